//! Native edit intents reported by the host widget before it mutates text.

/// A pending text mutation, as described by the host before applying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Typed text, IME commit, or autocorrect replacement
    InsertText(String),
    /// Text pasted or dropped into the field
    InsertFromPaste(String),
    /// Backspace
    DeleteBackward,
    /// Delete
    DeleteForward,
    /// An intent this editor does not handle (kept for logging)
    Unknown(String),
}

impl EditIntent {
    /// Map a host input-type name (as used by `beforeinput` events) and its
    /// data to an intent.
    pub fn from_input_type(input_type: &str, data: Option<&str>) -> Self {
        let text = || data.unwrap_or_default().to_string();
        match input_type {
            "insertText" | "insertReplacementText" | "insertCompositionText" => {
                EditIntent::InsertText(text())
            }
            "insertFromPaste" | "insertFromDrop" | "insertFromYank" => {
                EditIntent::InsertFromPaste(text())
            }
            "deleteContentBackward" | "deleteWordBackward" | "deleteSoftLineBackward" => {
                EditIntent::DeleteBackward
            }
            "deleteContentForward" | "deleteWordForward" | "deleteSoftLineForward" => {
                EditIntent::DeleteForward
            }
            other => EditIntent::Unknown(other.to_string()),
        }
    }

    /// Text carried by an insertion intent
    pub fn inserted_text(&self) -> Option<&str> {
        match self {
            EditIntent::InsertText(text) | EditIntent::InsertFromPaste(text) => Some(text),
            _ => None,
        }
    }
}
