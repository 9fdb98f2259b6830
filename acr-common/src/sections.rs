//! Markdown section splitting
//!
//! Splits a review document into titled sections at level-2 heading
//! boundaries. This is a line scanner keyed on the structural `##` prefix
//! rather than a regex over the whole document: model output drifts, and
//! an unrecognized line must simply fall into the current section instead
//! of breaking the parse.

use serde::{Deserialize, Serialize};

/// One titled block of the review, bounded by level-2 headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

/// Return the title of a level-2 heading line, or `None` for any other line.
///
/// `###` and deeper headings are content, not boundaries.
pub(crate) fn heading_title(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if rest.starts_with('#') {
        return None;
    }
    Some(rest.trim())
}

/// Case-insensitive title match, tolerant of a leading label emoji.
///
/// The model prefixes titles with emoji ("🏷️ Code Verdict"); any leading
/// non-alphanumeric run is stripped before comparing.
pub fn title_matches(title: &str, label: &str) -> bool {
    let stripped = title.trim_start_matches(|c: char| !c.is_ascii_alphanumeric());
    stripped.to_lowercase().starts_with(&label.to_lowercase())
}

/// Split review markdown into ordered sections.
///
/// Text before the first heading is discarded. Section content is trimmed.
/// A document with no level-2 headings yields an empty list. Never fails.
pub fn parse_sections(markdown: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in markdown.lines() {
        if let Some(title) = heading_title(line) {
            if let Some((title, body)) = current.take() {
                sections.push(Section {
                    title,
                    content: body.join("\n").trim().to_string(),
                });
            }
            current = Some((title.to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
        // Lines before the first heading fall through and are dropped
    }

    if let Some((title, body)) = current {
        sections.push(Section {
            title,
            content: body.join("\n").trim().to_string(),
        });
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Some preamble the model added.

## 🏷️ Code Verdict
❌ Bad

## 🔍 Issues
- ❌ fetch() is asynchronous, but the promise is not handled.
- ❌ Missing error handling.

## 🛠️ Recommended Fix
```javascript
async function fetchData() {
  return await fetch('/api/data');
}
```

## 📝 Summary
Refactor as shown above.
";

    #[test]
    fn splits_on_level_two_headings_in_document_order() {
        let sections = parse_sections(SAMPLE);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "🏷️ Code Verdict",
                "🔍 Issues",
                "🛠️ Recommended Fix",
                "📝 Summary"
            ]
        );
    }

    #[test]
    fn preamble_before_first_heading_is_discarded() {
        let sections = parse_sections(SAMPLE);
        assert!(!sections.iter().any(|s| s.content.contains("preamble")));
    }

    #[test]
    fn content_is_trimmed_and_keeps_inner_lines() {
        let sections = parse_sections(SAMPLE);
        let issues = &sections[1];
        assert!(issues.content.starts_with("- ❌ fetch()"));
        assert!(issues.content.ends_with("Missing error handling."));
    }

    #[test]
    fn zero_headings_yield_empty_list() {
        assert_eq!(parse_sections("just a paragraph\nwith two lines"), vec![]);
        assert_eq!(parse_sections(""), vec![]);
    }

    #[test]
    fn single_section_document() {
        let sections = parse_sections("## Only One\nbody text");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Only One");
        assert_eq!(sections[0].content, "body text");
    }

    #[test]
    fn deeper_headings_stay_inside_their_section() {
        let sections = parse_sections("## Outer\n### Inner\ntext");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.contains("### Inner"));
    }

    #[test]
    fn heading_with_trailing_content_and_no_body() {
        let sections = parse_sections("## Empty One\n## Next\nbody");
        assert_eq!(sections[0].content, "");
        assert_eq!(sections[1].content, "body");
    }

    #[test]
    fn reparse_of_reserialized_sections_is_identical() {
        let first = parse_sections(SAMPLE);
        let rejoined: String = first
            .iter()
            .map(|s| format!("## {}\n{}\n\n", s.title, s.content))
            .collect();
        let second = parse_sections(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn title_match_tolerates_emoji_prefix_and_case() {
        assert!(title_matches("🏷️ Code Verdict", "Code Verdict"));
        assert!(title_matches("Code Verdict", "code verdict"));
        assert!(title_matches("🛠️ Recommended Fix", "Recommended Fix"));
        assert!(!title_matches("🔍 Issues", "Code Verdict"));
    }
}
