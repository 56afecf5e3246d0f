//! Tool-session domain types.

use std::fmt;
use std::str::FromStr;

/// Kind of tool the shepherd service runs for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// CPU/heap profile viewer over a single profile file.
    Pprof,
    /// Execution trace viewer over a single trace file.
    Trace,
    /// Profile comparison: needs a base profile and a new profile.
    PprofDiff,
}

impl ToolKind {
    /// All kinds, in the order the form cycles through them.
    pub fn all() -> &'static [ToolKind] {
        &[ToolKind::Pprof, ToolKind::Trace, ToolKind::PprofDiff]
    }

    /// Value the shepherd service expects in the `tool` query parameter.
    pub fn wire_value(self) -> &'static str {
        match self {
            ToolKind::Pprof => "0",
            ToolKind::Trace => "1",
            ToolKind::PprofDiff => "2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Pprof => "pprof",
            ToolKind::Trace => "trace",
            ToolKind::PprofDiff => "pprof diff",
        }
    }

    /// Whether this kind compares two inputs and therefore requires a
    /// second path.
    pub fn needs_second_path(self) -> bool {
        matches!(self, ToolKind::PprofDiff)
    }

    pub fn next(self) -> Self {
        match self {
            ToolKind::Pprof => ToolKind::Trace,
            ToolKind::Trace => ToolKind::PprofDiff,
            ToolKind::PprofDiff => ToolKind::Pprof,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ToolKind::Pprof => ToolKind::PprofDiff,
            ToolKind::Trace => ToolKind::Pprof,
            ToolKind::PprofDiff => ToolKind::Trace,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pprof" => Ok(ToolKind::Pprof),
            "trace" => Ok(ToolKind::Trace),
            "pprof-diff" | "pprof_diff" | "diff" => Ok(ToolKind::PprofDiff),
            other => Err(format!(
                "unknown tool '{other}' (expected pprof, trace, or pprof-diff)"
            )),
        }
    }
}

/// One registered tool session, confirmed by the shepherd service.
///
/// `port` is the session's unique key: it is assigned by the service on
/// registration and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Session {
    pub tool: ToolKind,
    /// Free-text project label, display-only.
    pub name: String,
    pub path1: String,
    pub path2: Option<String>,
    pub port: u16,
}

impl Session {
    /// Composite path for display: the primary path, with the second path
    /// on its own line when present.
    pub fn display_path(&self) -> String {
        match &self.path2 {
            Some(path2) => format!("{}\n{}", self.path1, path2),
            None => self.path1.clone(),
        }
    }
}

/// Normalizes a user-supplied path the way the shepherd service does before
/// handing it to a tool: surrounding double quotes and backticks become
/// spaces, then the result is trimmed.
pub fn clean_path(path: &str) -> String {
    path.replace(['"', '`'], " ").trim().to_string()
}
