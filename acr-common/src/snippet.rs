//! Fenced code block extraction
//!
//! The "Recommended Fix" section of a review carries a ready-to-use code
//! snippet inside a fenced block. The UI offers that snippet as its own
//! copyable unit, separate from the surrounding prose.

/// Return the trimmed inner text of the first fenced code block in `text`.
///
/// The opening fence may carry a language tag (```` ```javascript ````).
/// An unclosed fence yields `None` - better no snippet than a truncated
/// one.
pub fn first_fenced_block(text: &str) -> Option<String> {
    let mut body: Option<Vec<&str>> = None;

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            match body.take() {
                Some(lines) => return Some(lines.join("\n").trim().to_string()),
                None => body = Some(Vec::new()),
            }
        } else if let Some(lines) = body.as_mut() {
            lines.push(line);
        }
    }

    None
}
