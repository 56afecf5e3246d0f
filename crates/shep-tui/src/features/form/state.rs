//! Registration form state.

use shep_core::client::RegisterRequest;
use shep_core::session::{ToolKind, clean_path};

/// Value parked in the secondary path buffer while the selected tool kind
/// does not need a second path. Distinguishes "field inactive" from "field
/// empty but required"; serialization must never let it reach the wire.
pub const INACTIVE_PATH_MARKER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Tool,
    Name,
    Path1,
    Path2,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Tool => "tool",
            FormField::Name => "project",
            FormField::Path1 => "path",
            FormField::Path2 => "second path",
        }
    }
}

/// State of the registration form.
#[derive(Debug)]
pub struct FormState {
    pub tool: ToolKind,
    pub name: String,
    pub path1: String,
    /// Secondary path buffer; holds [`INACTIVE_PATH_MARKER`] while inactive.
    pub path2: String,
    pub focus: FormField,
    /// Validation error shown inline under the fields.
    pub error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            tool: ToolKind::Pprof,
            name: String::new(),
            path1: String::new(),
            path2: INACTIVE_PATH_MARKER.to_string(),
            focus: FormField::Tool,
            error: None,
        }
    }

    /// Whether the secondary path field is visible and required.
    ///
    /// Purely a function of the selected tool kind; no other state
    /// influences it.
    pub fn secondary_active(&self) -> bool {
        self.tool.needs_second_path()
    }

    /// Selects a tool kind, toggling the secondary field.
    ///
    /// Activating the field clears it to force fresh input; deactivating it
    /// parks the marker in the buffer and moves focus off the field.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool == self.tool {
            return;
        }
        self.tool = tool;
        if tool.needs_second_path() {
            self.path2.clear();
        } else {
            self.path2 = INACTIVE_PATH_MARKER.to_string();
            if self.focus == FormField::Path2 {
                self.focus = FormField::Path1;
            }
        }
    }

    /// The fields currently shown, in focus order.
    pub fn fields(&self) -> &'static [FormField] {
        if self.secondary_active() {
            &[
                FormField::Tool,
                FormField::Name,
                FormField::Path1,
                FormField::Path2,
            ]
        } else {
            &[FormField::Tool, FormField::Name, FormField::Path1]
        }
    }

    fn focus_index(&self) -> usize {
        self.fields()
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0)
    }

    /// Moves focus to the next field. Returns false when focus moved past
    /// the last field; the caller hands focus to the table.
    pub fn focus_next(&mut self) -> bool {
        let fields = self.fields();
        let index = self.focus_index();
        if index + 1 < fields.len() {
            self.focus = fields[index + 1];
            true
        } else {
            self.focus = fields[0];
            false
        }
    }

    /// Moves focus to the previous field. Returns false when focus moved
    /// before the first field.
    pub fn focus_prev(&mut self) -> bool {
        let fields = self.fields();
        let index = self.focus_index();
        if index > 0 {
            self.focus = fields[index - 1];
            true
        } else {
            self.focus = fields[fields.len() - 1];
            false
        }
    }

    /// Moves focus down one field, wrapping within the form.
    pub fn focus_down(&mut self) {
        let fields = self.fields();
        self.focus = fields[(self.focus_index() + 1) % fields.len()];
    }

    /// Moves focus up one field, wrapping within the form.
    pub fn focus_up(&mut self) {
        let fields = self.fields();
        self.focus = fields[(self.focus_index() + fields.len() - 1) % fields.len()];
    }

    /// The text buffer of the focused field, if it is a text field.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Tool => None,
            FormField::Name => Some(&mut self.name),
            FormField::Path1 => Some(&mut self.path1),
            FormField::Path2 => Some(&mut self.path2),
        }
    }

    /// Serializes the form into a register request.
    ///
    /// Field reads happen here, synchronously at submit time, so the request
    /// reflects the form exactly as submitted. An inactive secondary field
    /// serializes to no second path regardless of what the buffer holds.
    pub fn serialize(&self) -> Result<RegisterRequest, String> {
        let path1 = clean_path(&self.path1);
        if path1.is_empty() {
            return Err("a path is required".to_string());
        }

        let path2 = if self.secondary_active() {
            let cleaned = clean_path(&self.path2);
            if cleaned.is_empty() {
                return Err("pprof diff needs a second path".to_string());
            }
            Some(cleaned)
        } else {
            None
        };

        Ok(RegisterRequest::new(
            self.tool,
            &self.name,
            &path1,
            path2.as_deref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_field_toggles_with_tool_kind() {
        let mut form = FormState::new();
        assert!(!form.secondary_active());
        assert_eq!(form.path2, INACTIVE_PATH_MARKER);

        form.set_tool(ToolKind::PprofDiff);
        assert!(form.secondary_active());
        assert_eq!(form.path2, "", "activating must clear for fresh input");

        form.path2.push_str("/tmp/new.pb.gz");
        form.set_tool(ToolKind::Trace);
        assert!(!form.secondary_active());
        assert_eq!(form.path2, INACTIVE_PATH_MARKER);
    }

    #[test]
    fn test_deactivating_moves_focus_off_the_field() {
        let mut form = FormState::new();
        form.set_tool(ToolKind::PprofDiff);
        form.focus = FormField::Path2;

        form.set_tool(ToolKind::Pprof);
        assert_eq!(form.focus, FormField::Path1);
    }

    #[test]
    fn test_marker_never_serializes() {
        let mut form = FormState::new();
        form.path1 = "/tmp/cpu.pb.gz".to_string();
        // Round-trip through the diff kind leaves the marker in the buffer.
        form.set_tool(ToolKind::PprofDiff);
        form.set_tool(ToolKind::Pprof);
        assert_eq!(form.path2, INACTIVE_PATH_MARKER);

        let request = form.serialize().unwrap();
        assert_eq!(request.path2, None);
    }

    #[test]
    fn test_serialize_requires_primary_path() {
        let form = FormState::new();
        assert!(form.serialize().is_err());
    }

    #[test]
    fn test_serialize_requires_second_path_for_diff() {
        let mut form = FormState::new();
        form.path1 = "/tmp/base.pb.gz".to_string();
        form.set_tool(ToolKind::PprofDiff);
        assert!(form.serialize().is_err());

        form.path2 = "/tmp/new.pb.gz".to_string();
        let request = form.serialize().unwrap();
        assert_eq!(request.path2.as_deref(), Some("/tmp/new.pb.gz"));
    }

    #[test]
    fn test_focus_cycle_includes_secondary_only_when_active() {
        let mut form = FormState::new();
        assert!(form.focus_next()); // Tool -> Name
        assert!(form.focus_next()); // Name -> Path1
        assert!(!form.focus_next(), "past the last field leaves the form");
        assert_eq!(form.focus, FormField::Tool);

        form.set_tool(ToolKind::PprofDiff);
        form.focus = FormField::Path1;
        assert!(form.focus_next());
        assert_eq!(form.focus, FormField::Path2);
    }
}
