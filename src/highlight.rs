use inksac::prelude::*;

/// Colours error lines when the terminal can show them.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Never emits escape codes. For pipes, files and tests.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_leaves_text_alone() {
        let highlighter = SyntaxHighlighter::plain();
        assert_eq!(highlighter.highlight_error("usage: alloc"), "usage: alloc");
    }

    #[test]
    fn test_highlight_keeps_message() {
        let highlighted = SyntaxHighlighter::new().highlight_error("command not found: x");
        assert!(highlighted.contains("command not found: x"));
    }
}
