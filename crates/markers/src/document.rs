use ropey::Rope;

/// One text document participating in a comparison.
///
/// Immutable for the duration of a comparison pass; a content change means
/// building a new `Document` and rerunning the whole pass.
#[derive(Debug, Clone)]
pub struct Document {
    text: Rope,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self {
            text: Rope::from_str(text),
        }
    }

    /// Number of rows: line breaks plus one, except that the empty document
    /// has no rows at all
    pub fn line_count(&self) -> usize {
        if self.text.len_chars() == 0 {
            0
        } else {
            self.text.len_lines()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.len_chars() == 0
    }

    /// The document text
    pub fn text(&self) -> &Rope {
        &self.text
    }

    /// Materialize the text for the diff engine
    pub fn to_text(&self) -> String {
        self.text.to_string()
    }
}
