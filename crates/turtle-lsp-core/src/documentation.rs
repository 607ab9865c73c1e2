//! Markdown documentation attached to completion entries

/// Where users report wrong suggestions
pub const ISSUES_URL: &str = "https://github.com/EmilyGraceSeville7cf/tinyscheme-turtle/issues";

/// Render `text` followed by a "Read more" link and an optional notice
pub fn documentation(text: &str, read_more: &str, note: Option<&str>) -> String {
    let mut doc = format!(
        "{}\n\n[Read more]({}) |\n[Is something incorrect?]({})",
        text, read_more, ISSUES_URL
    );

    if let Some(note) = note {
        doc.push_str(&format!("\n\n*Notice: {}*.", note));
    }

    doc
}
