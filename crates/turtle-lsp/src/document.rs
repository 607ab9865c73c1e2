/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Language identifier announced by the client on open
    language_id: String,
    /// Version of the last applied change
    version: i32,
}

impl Document {
    pub fn new(text: String, language_id: String, version: i32) -> Self {
        Self {
            text,
            language_id,
            version,
        }
    }

    /// Replace the whole text (full sync)
    pub fn update_text(&mut self, new_text: String, version: i32) {
        self.text = new_text;
        self.version = version;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    /// Whether completions and diagnostics should run for this document
    pub fn is_enabled_for(&self, language_ids: &[String]) -> bool {
        language_ids.iter().any(|id| id == &self.language_id)
    }
}
