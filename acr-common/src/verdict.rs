//! Review verdict classification
//!
//! The external model is instructed to open every review with a
//! "Code Verdict" heading followed by a one-line judgement. This module
//! turns that convention into a three-way classification. Both the API
//! service (classifying the full review) and the UI composer (classifying
//! a single section's content) use the same token classifier, so the two
//! paths cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::sections::{heading_title, title_matches};

/// Title the verdict heading is matched against (emoji prefix tolerated)
const VERDICT_HEADING: &str = "Code Verdict";

/// Three-way review classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Good,
    Bad,
    Unknown,
}

impl Verdict {
    /// Classify a piece of verdict text by its tokens.
    ///
    /// Word tokens take precedence over glyphs, and "good" over "bad",
    /// matching the behavior the UI depends on. Anything unrecognized is
    /// `Unknown` - this function never fails.
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("good") {
            return Verdict::Good;
        }
        if lowered.contains("bad") {
            return Verdict::Bad;
        }
        if text.contains('\u{2705}') {
            // ✅
            return Verdict::Good;
        }
        if text.contains('\u{274C}') {
            // ❌
            return Verdict::Bad;
        }
        Verdict::Unknown
    }
}

/// Extract the verdict from a full review markdown document.
///
/// Scans for the first level-2 "Code Verdict" heading (case-insensitive,
/// tolerant of a leading label emoji) and classifies the next non-empty
/// line. Missing heading, empty input, or a heading with no body all
/// yield `Verdict::Unknown`.
pub fn extract_verdict(markdown: &str) -> Verdict {
    let mut lines = markdown.lines();
    while let Some(line) = lines.next() {
        let Some(title) = heading_title(line) else {
            continue;
        };
        if !title_matches(title, VERDICT_HEADING) {
            continue;
        }
        for body_line in lines.by_ref() {
            let body_line = body_line.trim();
            if !body_line.is_empty() {
                return Verdict::from_text(body_line);
            }
        }
        return Verdict::Unknown;
    }
    Verdict::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_good_token() {
        assert_eq!(Verdict::from_text("Good"), Verdict::Good);
        assert_eq!(Verdict::from_text("✅ good work"), Verdict::Good);
        assert_eq!(Verdict::from_text("GOOD"), Verdict::Good);
    }

    #[test]
    fn classifies_bad_token() {
        assert_eq!(Verdict::from_text("Bad"), Verdict::Bad);
        assert_eq!(Verdict::from_text("❌ Bad"), Verdict::Bad);
    }

    #[test]
    fn classifies_glyphs_without_words() {
        assert_eq!(Verdict::from_text("✅"), Verdict::Good);
        assert_eq!(Verdict::from_text("❌"), Verdict::Bad);
    }

    #[test]
    fn word_tokens_win_over_glyphs() {
        // "good" is checked before the ❌ glyph
        assert_eq!(Verdict::from_text("❌ good"), Verdict::Good);
    }

    #[test]
    fn unrecognized_text_is_unknown() {
        assert_eq!(Verdict::from_text(""), Verdict::Unknown);
        assert_eq!(Verdict::from_text("mediocre at best"), Verdict::Unknown);
    }

    #[test]
    fn extracts_good_verdict_after_heading() {
        let md = "## 🏷️ Code Verdict\n✅ Good\n\n## 🔍 Issues\n- none\n";
        assert_eq!(extract_verdict(md), Verdict::Good);
    }

    #[test]
    fn extracts_bad_verdict_after_heading() {
        let md = "## 🏷️ Code Verdict\n❌ Bad\n";
        assert_eq!(extract_verdict(md), Verdict::Bad);
    }

    #[test]
    fn skips_blank_lines_after_heading() {
        let md = "## Code Verdict\n\n\n✅ Good\n";
        assert_eq!(extract_verdict(md), Verdict::Good);
    }

    #[test]
    fn heading_match_is_case_insensitive() {
        let md = "## code verdict\nBad\n";
        assert_eq!(extract_verdict(md), Verdict::Bad);
    }

    #[test]
    fn missing_heading_is_unknown() {
        assert_eq!(extract_verdict("no verdict here, just prose"), Verdict::Unknown);
        assert_eq!(extract_verdict(""), Verdict::Unknown);
    }

    #[test]
    fn heading_with_no_body_is_unknown() {
        assert_eq!(extract_verdict("## Code Verdict\n\n"), Verdict::Unknown);
        assert_eq!(extract_verdict("## Code Verdict"), Verdict::Unknown);
    }

    #[test]
    fn level_three_heading_is_not_a_verdict_heading() {
        assert_eq!(extract_verdict("### Code Verdict\nGood\n"), Verdict::Unknown);
    }

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(serde_json::to_string(&Verdict::Good).unwrap(), "\"Good\"");
        assert_eq!(serde_json::to_string(&Verdict::Bad).unwrap(), "\"Bad\"");
        assert_eq!(serde_json::to_string(&Verdict::Unknown).unwrap(), "\"Unknown\"");
    }
}
