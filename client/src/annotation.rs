//! Provenance annotation parser
//!
//! The tutor service returns its context passage as one loosely formatted
//! string, e.g. `Use this local metaphor: ... (Source: X) (Region: Y)`.
//! This module recovers the source, region and display text from it.
//!
//! Only the first `(Source: ...)` and first `(Region: ...)` tag are
//! recognised and stripped. A second occurrence stays in `content`
//! verbatim, so parsing the output again is not a no-op. Values end at the
//! first `)`, so nested parentheses truncate them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Phrase the service prepends to the context passage
pub const METAPHOR_PREFIX: &str = "Use this local metaphor:";

/// Source value used when the string carries no `(Source: ...)` tag
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Region value used when the string carries no `(Region: ...)` tag
pub const GENERAL_REGION: &str = "General";

// Tag values stop at any line terminator: \n, \r, U+2028, U+2029
const TAG_SOURCE_PATTERN: &str = r"\(Source: ([^\r\n\x{2028}\x{2029}]*?)\)";
const TAG_REGION_PATTERN: &str = r"\(Region: ([^\r\n\x{2028}\x{2029}]*?)\)";

static SOURCE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(TAG_SOURCE_PATTERN).expect("source tag pattern is valid"));

static REGION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(TAG_REGION_PATTERN).expect("region tag pattern is valid"));

/// Structured view of a raw provenance string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedAnnotation {
    /// Passage with prefix and tags removed, trimmed
    pub content: String,
    /// Value of the first `(Source: ...)` tag
    pub source: String,
    /// Value of the first `(Region: ...)` tag
    pub region: String,
}

/// Parse a raw provenance string
///
/// Never fails. Empty input yields an all-empty annotation, which is
/// deliberately different from the `Unknown Source` / `General` defaults
/// used when a non-empty string simply lacks a tag.
pub fn parse(raw: &str) -> ParsedAnnotation {
    if raw.is_empty() {
        return ParsedAnnotation::default();
    }

    let text = raw.replacen(METAPHOR_PREFIX, "", 1);
    let text = text.trim_matches(is_trimmable);

    let source = first_capture(&SOURCE_TAG, text).unwrap_or(UNKNOWN_SOURCE);
    let region = first_capture(&REGION_TAG, text).unwrap_or(GENERAL_REGION);

    // Region is searched again after the Source tag is gone
    let without_source = SOURCE_TAG.replace(text, "");
    let content = REGION_TAG.replace(&without_source, "");

    ParsedAnnotation {
        content: content.trim_matches(is_trimmable).to_string(),
        source: source.to_string(),
        region: region.to_string(),
    }
}

/// Whitespace and line terminators stripped around the passage
///
/// Includes the byte-order mark U+FEFF; excludes NEL (U+0085), which is a
/// control character rather than a space.
fn is_trimmable(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn first_capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(content: &str, source: &str, region: &str) -> ParsedAnnotation {
        ParsedAnnotation {
            content: content.to_string(),
            source: source.to_string(),
            region: region.to_string(),
        }
    }

    #[test]
    fn test_empty_input_is_all_empty() {
        assert_eq!(parse(""), annotation("", "", ""));
    }

    #[test]
    fn test_prefix_and_both_tags() {
        let parsed = parse("Use this local metaphor: Foo (Source: Bar) (Region: Baz)");
        assert_eq!(parsed, annotation("Foo", "Bar", "Baz"));
    }

    #[test]
    fn test_no_tags_uses_defaults() {
        assert_eq!(
            parse("No tags here"),
            annotation("No tags here", "Unknown Source", "General")
        );
    }

    #[test]
    fn test_whitespace_only_is_not_empty_input() {
        // Only a truly empty string takes the all-empty branch
        assert_eq!(parse("   "), annotation("", "Unknown Source", "General"));
    }

    #[test]
    fn test_duplicate_source_tag_stays_in_content() {
        let parsed = parse("(Source: A) text (Source: B)");
        assert_eq!(parsed.source, "A");
        assert_eq!(parsed.region, "General");
        assert_eq!(parsed.content, "text (Source: B)");

        // Re-parsing picks up the leftover tag
        let reparsed = parse(&parsed.content);
        assert_eq!(reparsed.source, "B");
        assert_eq!(reparsed.content, "text");
    }

    #[test]
    fn test_nested_parentheses_truncate_value() {
        let parsed = parse("Passage (Source: Oral history (Lagos)) end");
        assert_eq!(parsed.source, "Oral history (Lagos");
        assert_eq!(parsed.content, "Passage ) end");
    }

    #[test]
    fn test_prefix_removed_anywhere() {
        let parsed = parse("Think of it this way. Use this local metaphor: a market (Region: Kano)");
        assert_eq!(parsed.content, "Think of it this way.  a market");
        assert_eq!(parsed.region, "Kano");
        assert_eq!(parsed.source, "Unknown Source");
    }

    #[test]
    fn test_only_first_prefix_removed() {
        let parsed = parse("Use this local metaphor: one Use this local metaphor: two");
        assert_eq!(parsed.content, "one Use this local metaphor: two");
    }

    #[test]
    fn test_region_before_source() {
        let parsed = parse("(Region: West Africa) A river (Source: Textbook p.12)");
        assert_eq!(parsed, annotation("A river", "Textbook p.12", "West Africa"));
    }

    #[test]
    fn test_tag_requires_exact_spacing() {
        let parsed = parse("Text (Source:NoSpace) (source: lower)");
        assert_eq!(parsed.source, "Unknown Source");
        assert_eq!(parsed.content, "Text (Source:NoSpace) (source: lower)");
    }

    #[test]
    fn test_first_occurrence_removed_from_content() {
        let inputs = [
            "Use this local metaphor: Foo (Source: Bar) (Region: Baz)",
            "(Source: A) middle (Region: B)",
            "Tail text (Region: R)",
        ];
        for input in inputs {
            let parsed = parse(input);
            assert!(!parsed.content.contains("(Source:"), "input: {input}");
            assert!(!parsed.content.contains("(Region:"), "input: {input}");
        }
    }

    #[test]
    fn test_multiline_passage() {
        let parsed = parse("Line one\nLine two\n(Source: Notes)\n(Region: Abuja)");
        assert_eq!(parsed, annotation("Line one\nLine two", "Notes", "Abuja"));
    }

    #[test]
    fn test_carriage_return_ends_tag_value() {
        let parsed = parse("Text (Source: a\rb)");
        assert_eq!(parsed.source, "Unknown Source");
        assert_eq!(parsed.content, "Text (Source: a\rb)");
    }

    #[test]
    fn test_unicode_line_separators_end_tag_value() {
        let parsed = parse("Text (Region: a\u{2028}b)");
        assert_eq!(parsed.region, "General");
        assert_eq!(parsed.content, "Text (Region: a\u{2028}b)");

        let parsed = parse("Text (Source: a\u{2029}b) (Region: Kano)");
        assert_eq!(parsed.source, "Unknown Source");
        assert_eq!(parsed.region, "Kano");
        assert_eq!(parsed.content, "Text (Source: a\u{2029}b)");
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let parsed = parse("\u{FEFF}Text (Source: Notes)\u{FEFF}");
        assert_eq!(parsed, annotation("Text", "Notes", "General"));
    }

    #[test]
    fn test_next_line_control_is_kept() {
        let parsed = parse("\u{0085}Text");
        assert_eq!(parsed.content, "\u{0085}Text");
    }
}
