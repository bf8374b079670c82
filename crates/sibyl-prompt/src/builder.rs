//! Builder-style helper for writing **system instructions**.
//!
//! Long behavioural instructions read best as lightweight Markdown: a
//! heading, a few numbered rules, maybe an example of the JSON the model is
//! expected to emit. Assembling that with raw string concatenation is
//! tedious and error-prone; `PromptBuilder` offers a fluent API that lets
//! you focus on the *content* instead of the syntax. Every method returns
//! `self`, enabling call-chaining:
//!
//! ```rust
//! use sibyl_prompt::builder::PromptBuilder;
//!
//! let instruction = PromptBuilder::new()
//!     .add_heading("Invoice processor")
//!     .add_line("Extract key details from the user's text.")
//!     .add_rule("Dates are formatted as YYYY-MM-DD.")
//!     .add_rule("Amounts are plain numbers without currency symbols.")
//!     .finalize();
//!
//! assert!(instruction.starts_with("# Invoice processor"));
//! assert!(instruction.contains("1. Dates"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing
//! to the internal `String` never fails (which it shouldn't). It also
//! refrains from smart-formatting to stay predictable—newlines and
//! whitespace are emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce instruction text.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the assembled text.
pub struct PromptBuilder {
    buffer: String,
    rule_count: usize,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            rule_count: 0,
        }
    }

    /// Add a level-1 (`#`) heading.
    pub fn add_heading(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "# {line}").expect("failed to write buffer");
        self
    }

    /// Add a level-2 (`##`) heading.
    pub fn add_section(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a bulleted line (`- text`).
    pub fn add_bullet(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "- {line}").expect("failed to write buffer");
        self
    }

    /// Add a numbered rule. Numbering continues across calls, so rules can
    /// be interleaved with other content.
    pub fn add_rule(mut self, line: impl Display) -> Self {
        self.rule_count += 1;
        let number = self.rule_count;
        writeln!(self.buffer, "{number}. {line}").expect("failed to write buffer");
        self
    }

    /// Add a key–value pair in **bold**:
    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Embed a code block fenced as `json`, e.g. an example of the reply
    /// shape.
    pub fn add_json_block(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a "---" delimiter.
    pub fn add_delimiter(self) -> Self {
        self.add_line("---")
    }

    /// Retrieve the accumulated text and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_numbering_continues_across_interleaved_content() {
        let text = PromptBuilder::new()
            .add_rule("first")
            .add_blank_line()
            .add_line("context")
            .add_rule("second")
            .finalize();

        assert!(text.contains("1. first"));
        assert!(text.contains("2. second"));
    }
}
