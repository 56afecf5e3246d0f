//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. This is the single source of truth
//! for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use shep_core::client::{self, RegisterOutcome, RegisterRequest};
use shep_core::session::Session;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{AlertState, Overlay, OverlayTransition};
use crate::sessions::SessionRow;
use crate::state::{AppState, Pane};
use crate::{form, sessions};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskCompleted { kind, completed } => {
            // Clearing the guard here, right before the inner event is
            // applied, is what holds the submission guard across the whole
            // network round trip.
            let ok = app.tui.tasks.state_mut(kind).finish_if_active(completed.id);
            if !ok {
                vec![]
            } else {
                update(app, *completed.result)
            }
        }
        UiEvent::Registered { request, outcome } => {
            handle_register_outcome(app, request, outcome)
        }
        // Optimistic removal: the row was removed when the release was
        // issued, and failures were already logged by the handler.
        UiEvent::Released { .. } => vec![],
    }
}

fn handle_register_outcome(
    app: &mut AppState,
    request: RegisterRequest,
    outcome: RegisterOutcome,
) -> Vec<UiEffect> {
    match outcome {
        RegisterOutcome::Registered(port) => {
            let address = client::session_address(&app.tui.config.service_url, port);
            tracing::info!(port, tool = %request.tool, "session registered");
            app.tui.sessions.append(SessionRow {
                session: Session {
                    tool: request.tool,
                    name: request.name,
                    path1: request.path1,
                    path2: request.path2,
                    port,
                },
                address,
                registered_at: chrono::Local::now(),
            });
            vec![]
        }
        RegisterOutcome::ServiceDown => {
            app.overlay = Some(Overlay::Alert(AlertState::service_down(
                &app.tui.config.service_url,
            )));
            vec![]
        }
        RegisterOutcome::Rejected(message) => {
            app.overlay = Some(Overlay::Alert(AlertState::rejected(message)));
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return vec![UiEffect::Quit];
    }

    // An active overlay captures all input.
    if let Some(overlay) = app.overlay.as_mut() {
        let overlay_update = overlay.handle_key(key);
        if matches!(overlay_update.transition, OverlayTransition::Close) {
            app.overlay = None;
        }
        return overlay_update.effects;
    }

    match app.tui.focus {
        Pane::Form => form::handle_key(&mut app.tui, key),
        Pane::Sessions => sessions::handle_key(&mut app.tui, key),
    }
}

#[cfg(test)]
mod tests {
    use shep_core::config::Config;
    use shep_core::session::ToolKind;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind};
    use crate::form::{FormField, INACTIVE_PATH_MARKER};

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn submit_pprof(app: &mut AppState, path: &str) -> Vec<UiEffect> {
        app.tui.form.path1 = path.to_string();
        update(app, key(KeyCode::Enter))
    }

    /// Feeds a completed register task back through the reducer, the way the
    /// runtime delivers it.
    fn complete_register(app: &mut AppState, task: TaskId, outcome: RegisterOutcome) {
        let request = RegisterRequest::new(ToolKind::Pprof, "api", "/tmp/cpu.pb.gz", None);
        update(
            app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Register,
                completed: TaskCompleted {
                    id: task,
                    result: Box::new(UiEvent::Registered { request, outcome }),
                },
            },
        );
    }

    fn pending_task(effects: &[UiEffect]) -> TaskId {
        match &effects[0] {
            UiEffect::RegisterSession { task, .. } => *task,
            other => panic!("expected RegisterSession, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_emits_one_register_effect() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");

        assert_eq!(effects.len(), 1);
        match &effects[0] {
            UiEffect::RegisterSession { request, .. } => {
                assert_eq!(request.tool, ToolKind::Pprof);
                assert_eq!(request.path1, "/tmp/cpu.pb.gz");
                assert_eq!(request.path2, None);
            }
            other => panic!("expected RegisterSession, got {other:?}"),
        }
        assert!(app.tui.tasks.register.is_running(), "guard must be held");
    }

    #[test]
    fn test_second_submit_while_busy_emits_nothing() {
        let mut app = app();
        let first = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        assert_eq!(first.len(), 1);

        let second = update(&mut app, key(KeyCode::Enter));
        assert!(second.is_empty(), "busy guard must swallow the submit");
    }

    #[test]
    fn test_guard_clears_when_outcome_arrives() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        let task = pending_task(&effects);

        complete_register(&mut app, task, RegisterOutcome::Registered(8080));
        assert!(!app.tui.tasks.register.is_running());

        // A fresh submit goes through again.
        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn test_successful_add_appends_row_keyed_by_port() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        let task = pending_task(&effects);

        complete_register(&mut app, task, RegisterOutcome::Registered(8080));

        assert_eq!(app.tui.sessions.len(), 1);
        let row = &app.tui.sessions.rows()[0];
        assert_eq!(row.session.port, 8080);
        assert_eq!(row.address, "http://localhost:8080");
        assert_eq!(row.session.display_path(), "/tmp/cpu.pb.gz");
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_service_down_warns_and_leaves_table_alone() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        let task = pending_task(&effects);

        complete_register(&mut app, task, RegisterOutcome::ServiceDown);

        assert!(app.tui.sessions.is_empty());
        match &app.overlay {
            Some(Overlay::Alert(alert)) => {
                assert!(alert.message.contains("http://localhost:7777"));
            }
            other => panic!("expected alert overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_rejection_message_shown_verbatim() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        let task = pending_task(&effects);

        complete_register(
            &mut app,
            task,
            RegisterOutcome::Rejected("not-a-port".to_string()),
        );

        assert!(app.tui.sessions.is_empty());
        match &app.overlay {
            Some(Overlay::Alert(alert)) => assert_eq!(alert.message, "not-a-port"),
            other => panic!("expected alert overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_alert_dismisses_with_enter() {
        let mut app = app();
        app.overlay = Some(Overlay::Alert(AlertState::rejected("x".to_string())));

        update(&mut app, key(KeyCode::Enter));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_sentinel_marker_never_reaches_the_request() {
        let mut app = app();
        // Visit the diff kind and come back: the marker is parked in the
        // secondary buffer.
        app.tui.form.focus = FormField::Tool;
        update(&mut app, key(KeyCode::Right)); // trace
        update(&mut app, key(KeyCode::Right)); // pprof diff
        assert!(app.tui.form.secondary_active());
        update(&mut app, key(KeyCode::Right)); // back to pprof
        assert_eq!(app.tui.form.path2, INACTIVE_PATH_MARKER);

        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        match &effects[0] {
            UiEffect::RegisterSession { request, .. } => assert_eq!(request.path2, None),
            other => panic!("expected RegisterSession, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_form_sets_inline_error_and_sends_nothing() {
        let mut app = app();
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(app.tui.form.error.is_some());
        assert!(!app.tui.tasks.register.is_running());
    }

    #[test]
    fn test_two_adds_confirm_in_order_and_removal_is_optimistic() {
        let mut app = app();

        for port in [8080u16, 8081] {
            let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
            let task = pending_task(&effects);
            complete_register(&mut app, task, RegisterOutcome::Registered(port));
        }
        assert_eq!(app.tui.sessions.len(), 2);

        // Move to the table and remove the first row.
        app.tui.focus = Pane::Sessions;
        app.tui.sessions.selected = 0;
        let effects = update(&mut app, key(KeyCode::Char('d')));

        match &effects[0] {
            UiEffect::ReleaseSession { port } => assert_eq!(*port, 8080),
            other => panic!("expected ReleaseSession, got {other:?}"),
        }
        assert_eq!(app.tui.sessions.len(), 1);
        assert_eq!(app.tui.sessions.rows()[0].session.port, 8081);

        // The release outcome arrives later and changes nothing, however it
        // went on the wire.
        let effects = update(&mut app, UiEvent::Released { port: 8080 });
        assert!(effects.is_empty());
        assert_eq!(app.tui.sessions.len(), 1);
    }

    #[test]
    fn test_stale_task_completion_is_ignored() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        let _task = pending_task(&effects);

        complete_register(&mut app, TaskId(999), RegisterOutcome::Registered(8080));
        assert!(app.tui.sessions.is_empty());
        assert!(app.tui.tasks.register.is_running(), "guard still held");
    }

    #[test]
    fn test_tab_cycles_between_panes() {
        let mut app = app();
        assert_eq!(app.tui.focus, Pane::Form);

        // Tool -> Name -> Path1 -> past the end -> table pane.
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.tui.focus, Pane::Sessions);

        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.tui.focus, Pane::Form);
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(effects[0], UiEffect::Quit));
    }

    #[test]
    fn test_enter_on_row_opens_browser() {
        let mut app = app();
        let effects = submit_pprof(&mut app, "/tmp/cpu.pb.gz");
        let task = pending_task(&effects);
        complete_register(&mut app, task, RegisterOutcome::Registered(8080));

        app.tui.focus = Pane::Sessions;
        let effects = update(&mut app, key(KeyCode::Enter));
        match &effects[0] {
            UiEffect::OpenBrowser { url } => assert_eq!(url, "http://localhost:8080"),
            other => panic!("expected OpenBrowser, got {other:?}"),
        }
    }
}
