use serde::{Deserialize, Serialize};

/// A single vocabulary entry: the prompt shown to players, the term they have
/// to produce, and a paragraph used to judge explanations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    /// Prompt in the players' native language
    pub native: String,
    /// Term in the language being learned, e.g. "das Haus"
    pub target: String,
    /// Descriptive paragraph in the target language
    pub description: String,
}

impl VocabEntry {
    pub fn new(
        native: impl Into<String>,
        target: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            native: native.into(),
            target: target.into(),
            description: description.into(),
        }
    }

    /// Same entry with surrounding whitespace removed from every field
    pub(crate) fn trimmed(self) -> Self {
        Self::new(
            self.native.trim(),
            self.target.trim(),
            self.description.trim(),
        )
    }

    /// Name of the first empty field, if any
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.native.is_empty() {
            Some("native")
        } else if self.target.is_empty() {
            Some("target")
        } else if self.description.is_empty() {
            Some("description")
        } else {
            None
        }
    }
}
