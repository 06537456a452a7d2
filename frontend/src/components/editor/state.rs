use serde_json::Value;

use common::editor::EditorState;

/// Component state for the `CardEditor`.
pub struct CardEditor {
    /// Working config the form edits.
    pub state: EditorState,
}

impl CardEditor {
    pub fn new(config: &Value) -> Self {
        Self {
            state: EditorState::new(config),
        }
    }

    /// Discards local edits in favour of the config the host sent back.
    pub fn reset(&mut self, config: &Value) {
        self.state = EditorState::new(config);
    }
}
