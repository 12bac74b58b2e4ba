// HTML fragment rendering. Every piece of server- or user-provided text goes
// through `escape` before landing in markup.

pub mod dashboard;
pub mod page;
pub mod profile;
pub mod resume;

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A static, user-visible message in place of a result.
pub fn message(text: &str) -> String {
    format!("<p class=\"message\">{}</p>", escape(text))
}
