//! Presentation composition
//!
//! Turns raw review markdown into the ordered render plan the browser
//! page consumes: the verdict section hoisted first, every section with a
//! ready-made copy payload, and the Recommended Fix snippet exposed as a
//! separate copyable unit. Rendering markdown to HTML stays in the page
//! script; this module owns ordering and classification.

use acr_common::{first_fenced_block, parse_sections, title_matches, Verdict};
use serde::Serialize;

const VERDICT_TITLE: &str = "Code Verdict";
const RECOMMENDED_FIX_TITLE: &str = "Recommended Fix";

/// How the page should treat a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// The hoisted verdict panel, styled by its classification
    Verdict,
    /// Recommended Fix: carries a standalone copyable code snippet
    RecommendedFix,
    /// Everything else, rendered in document order
    General,
}

/// One section ready for display
#[derive(Debug, Clone, Serialize)]
pub struct RenderSection {
    pub title: String,
    pub content: String,
    pub kind: SectionKind,
    /// Clipboard payload for "copy section": heading line plus content
    pub copy_text: String,
    /// Trimmed inner text of the section's first fenced code block
    /// (Recommended Fix only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
}

/// Ordered render plan for one review
#[derive(Debug, Clone, Serialize)]
pub struct ComposedReview {
    /// Classification of the verdict section's content, Unknown when the
    /// section is missing or unrecognizable
    pub verdict: Verdict,
    /// Verdict section first (when present), then remaining sections in
    /// document order
    pub sections: Vec<RenderSection>,
}

/// Compose a review for display. Pure; tolerates any input, including an
/// empty document (zero sections, Unknown verdict).
pub fn compose(review_markdown: &str) -> ComposedReview {
    let mut verdict = Verdict::Unknown;
    let mut verdict_section: Option<RenderSection> = None;
    let mut rest = Vec::new();

    for section in parse_sections(review_markdown) {
        if title_matches(&section.title, VERDICT_TITLE) {
            // Only the first verdict section is displayed; duplicates are
            // dropped rather than rendered twice
            if verdict_section.is_none() {
                verdict = Verdict::from_text(&section.content);
                verdict_section = Some(render(section, SectionKind::Verdict, false));
            }
        } else if title_matches(&section.title, RECOMMENDED_FIX_TITLE) {
            rest.push(render(section, SectionKind::RecommendedFix, true));
        } else {
            rest.push(render(section, SectionKind::General, false));
        }
    }

    let mut sections = Vec::with_capacity(rest.len() + 1);
    if let Some(section) = verdict_section {
        sections.push(section);
    }
    sections.extend(rest);

    ComposedReview { verdict, sections }
}

fn render(section: acr_common::Section, kind: SectionKind, with_snippet: bool) -> RenderSection {
    let copy_text = format!("## {}\n{}", section.title, section.content);
    let code_snippet = if with_snippet {
        first_fenced_block(&section.content)
    } else {
        None
    };

    RenderSection {
        title: section.title,
        content: section.content,
        kind,
        copy_text,
        code_snippet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
## 🔍 Issues
- ❌ Missing error handling.

## 🏷️ Code Verdict
❌ Bad

## 🛠️ Recommended Fix
Try this:
```javascript
const data = await fetchData();
```

## 📝 Summary
Needs error handling.
";

    #[test]
    fn verdict_section_is_hoisted_first() {
        let composed = compose(SAMPLE);
        assert_eq!(composed.sections[0].kind, SectionKind::Verdict);
        assert_eq!(composed.sections[0].title, "🏷️ Code Verdict");
        assert_eq!(composed.verdict, Verdict::Bad);
    }

    #[test]
    fn remaining_sections_keep_document_order() {
        let composed = compose(SAMPLE);
        let titles: Vec<&str> = composed.sections[1..]
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["🔍 Issues", "🛠️ Recommended Fix", "📝 Summary"]);
    }

    #[test]
    fn recommended_fix_exposes_trimmed_snippet() {
        let composed = compose(SAMPLE);
        let fix = composed
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::RecommendedFix)
            .unwrap();
        assert_eq!(
            fix.code_snippet.as_deref(),
            Some("const data = await fetchData();")
        );
    }

    #[test]
    fn general_sections_carry_no_snippet() {
        let composed = compose(SAMPLE);
        let issues = composed
            .sections
            .iter()
            .find(|s| s.title.contains("Issues"))
            .unwrap();
        assert!(issues.code_snippet.is_none());
    }

    #[test]
    fn copy_text_reconstructs_the_section() {
        let composed = compose(SAMPLE);
        let summary = composed.sections.last().unwrap();
        assert_eq!(summary.copy_text, "## 📝 Summary\nNeeds error handling.");
    }

    #[test]
    fn missing_verdict_section_degrades_to_unknown() {
        let composed = compose("## 🔍 Issues\n- something\n");
        assert_eq!(composed.verdict, Verdict::Unknown);
        assert_eq!(composed.sections.len(), 1);
        assert_eq!(composed.sections[0].kind, SectionKind::General);
    }

    #[test]
    fn duplicate_verdict_sections_render_once() {
        let md = "## Code Verdict\n✅ Good\n\n## Code Verdict\n❌ Bad\n";
        let composed = compose(md);
        assert_eq!(composed.verdict, Verdict::Good);
        assert_eq!(composed.sections.len(), 1);
    }

    #[test]
    fn empty_review_composes_to_nothing() {
        let composed = compose("");
        assert_eq!(composed.verdict, Verdict::Unknown);
        assert!(composed.sections.is_empty());
    }

    #[test]
    fn verdict_classification_matches_server_side_tokens() {
        // Same shared classifier as the API's extractor: glyph-only
        // content still classifies
        let composed = compose("## 🏷️ Code Verdict\n✅\n");
        assert_eq!(composed.verdict, Verdict::Good);
    }
}
