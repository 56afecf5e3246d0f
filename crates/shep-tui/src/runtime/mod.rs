//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! Async results are collected through an "inbox": handlers send `UiEvent`s
//! to `inbox_tx`, and the runtime drains `inbox_rx` each frame. Suspension
//! only ever happens at this boundary, so a request always reflects the
//! form state at the moment it was submitted.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use shep_core::client::ShepherdClient;
use shep_core::config::Config;
use tokio::sync::mpsc;

use crate::common::{TaskCompleted, TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick cadence while a request is in flight (drives the spinner).
const BUSY_POLL_DURATION: Duration = Duration::from_millis(50);

/// Tick cadence when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(200);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and on
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: ShepherdClient,
    /// Inbox sender: async handlers send their result events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver: drained each frame.
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    pub fn new(config: Config, client: ShepherdClient) -> Result<Self> {
        // Set up the panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the reducer requests quit.
    pub fn run(&mut self) -> Result<()> {
        while !self.state.tui.should_quit {
            let events = self.collect_events()?;
            for event in events {
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            self.terminal
                .draw(|frame| render::render(&self.state, frame))?;
        }
        Ok(())
    }

    /// Collects events from the inbox and the terminal, emitting a tick at
    /// the current cadence.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        let tick_interval = if self.state.tui.tasks.is_any_running() {
            BUSY_POLL_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick is due, unless there is already work.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered input without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::OpenBrowser { url } => {
                let _ = open::that(&url);
            }
            UiEffect::RegisterSession { task, request } => {
                let client = self.client.clone();
                self.spawn_task(TaskKind::Register, task, move || {
                    handlers::register_session(client, request)
                });
            }
            UiEffect::ReleaseSession { port } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::release_session(client, port));
            }
        }
    }

    /// Spawns a fire-and-forget async effect whose result event is delivered
    /// through the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    /// Spawns a tracked task.
    ///
    /// The reducer marked the task active when it emitted the effect;
    /// completion goes back through the inbox so the guard clears only once
    /// the outcome has been processed.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let result = f().await;
            let completed = TaskCompleted {
                id,
                result: Box::new(result),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
