//! Untrusted-text handling for anything rendered from a traced URL.
//!
//! Raw and cleaned URLs are attacker-controlled: the redirect chain decides
//! what they contain. They must only ever reach a markup context through the
//! escaping step here, so a URL carrying `<script>` renders as literal text.
//! Log output additionally gets control characters stripped.

/// An attacker-controlled string that has not been made safe for any output
/// context.
///
/// The only way to obtain markup from an `UntrustedText` is [`as_html`],
/// which escapes it; [`for_log`] strips control characters for log lines.
/// There is intentionally no `Display` implementation.
///
/// [`as_html`]: UntrustedText::as_html
/// [`for_log`]: UntrustedText::for_log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntrustedText(String);

impl UntrustedText {
    /// Wraps an untrusted string.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw untrusted value. Callers must not hand this to a markup sink.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Escapes the value for insertion into an HTML context.
    pub fn as_html(&self) -> String {
        escape_html(&self.0)
    }

    /// A control-character-free rendition for log output.
    pub fn for_log(&self) -> String {
        strip_control_chars(&self.0)
    }
}

/// Escapes the characters HTML assigns meaning to, so untrusted text renders
/// as literal text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Removes control characters from a string.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when displayed in logs. This function removes them while preserving
/// readability.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
                || code > 0x7F // Allow non-ASCII (UTF-8)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_tag_renders_as_literal_text() {
        let url = UntrustedText::new("https://evil.example/<script>alert(1)</script>");
        assert_eq!(
            url.as_html(),
            "https://evil.example/&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_attribute_breakout_characters_escaped() {
        let text = UntrustedText::new(r#""onmouseover='x'"#);
        assert_eq!(text.as_html(), "&quot;onmouseover=&#39;x&#39;");
    }

    #[test]
    fn test_ampersand_escaped_first() {
        assert_eq!(escape_html("a&lt;b"), "a&amp;lt;b");
    }

    #[test]
    fn test_plain_url_unchanged() {
        let url = UntrustedText::new("https://example.com/page?id=5");
        assert_eq!(url.as_html(), "https://example.com/page?id=5");
    }

    #[test]
    fn test_strip_control_chars_removes_control_chars() {
        assert_eq!(strip_control_chars("a\x00b\x01c"), "abc");
    }

    #[test]
    fn test_strip_control_chars_preserves_whitespace_and_unicode() {
        assert_eq!(strip_control_chars("a\tb\nc 測試"), "a\tb\nc 測試");
    }

    #[test]
    fn test_for_log() {
        let text = UntrustedText::new("https://example.com/\x07beep");
        assert_eq!(text.for_log(), "https://example.com/beep");
    }
}
