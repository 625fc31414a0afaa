//! Template text and the rendered result.

use std::fmt;

/// The full contents of a header template, read once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateText(String);

impl TemplateText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

impl From<String> for TemplateText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for TemplateText {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl AsRef<str> for TemplateText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Output of applying a [`Substitution`](crate::domain::Substitution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    text: String,
    replacements: usize,
}

impl Rendered {
    pub(crate) fn new(text: String, replacements: usize) -> Self {
        Self { text, replacements }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// How many marker occurrences were replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
