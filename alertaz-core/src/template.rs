//! Client-side hints for message templates.
//!
//! These only inform the compose UI (encoding warning, segment estimate,
//! which placeholders were found). Authoritative rendering and billing
//! happen on the backend.

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Characters from the GSM 03.38 extension table; each costs two septets.
const GSM_EXTENSION_CHARS: &str = "^{}\\[~]|";

const GSM7_SINGLE_SEGMENT: usize = 160;
const GSM7_MULTI_SEGMENT: usize = 153;
const UCS2_SINGLE_SEGMENT: usize = 70;
const UCS2_MULTI_SEGMENT: usize = 67;

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{([a-zA-Z0-9_]+)\}\}").expect("valid placeholder regex"))
}

/// True iff `text` contains any character outside the single-byte range.
pub fn has_unicode(text: &str) -> bool {
    text.len() != text.chars().count()
}

/// Names of all `{{identifier}}` placeholders, de-duplicated.
pub fn extract_variables(template: &str) -> BTreeSet<String> {
    variable_pattern()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsEncoding {
    Gsm7,
    Ucs2,
}

impl SmsEncoding {
    pub fn detect(text: &str) -> Self {
        if has_unicode(text) {
            SmsEncoding::Ucs2
        } else {
            SmsEncoding::Gsm7
        }
    }

    fn limits(self) -> (usize, usize) {
        match self {
            SmsEncoding::Gsm7 => (GSM7_SINGLE_SEGMENT, GSM7_MULTI_SEGMENT),
            SmsEncoding::Ucs2 => (UCS2_SINGLE_SEGMENT, UCS2_MULTI_SEGMENT),
        }
    }

    /// Length of `text` in this encoding's units (septets or UTF-16 units).
    pub fn units(self, text: &str) -> usize {
        match self {
            SmsEncoding::Gsm7 => text
                .chars()
                .map(|c| if GSM_EXTENSION_CHARS.contains(c) { 2 } else { 1 })
                .sum(),
            SmsEncoding::Ucs2 => text.encode_utf16().count(),
        }
    }
}

/// Estimated number of billable SMS segments for `text`.
pub fn segment_count(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let encoding = SmsEncoding::detect(text);
    let units = encoding.units(text);
    let (single, multi) = encoding.limits();
    if units <= single {
        1
    } else {
        units.div_ceil(multi)
    }
}

/// Everything the compose preview shows about a template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateHints {
    pub unicode: bool,
    pub encoding: SmsEncoding,
    pub characters: usize,
    pub segments: usize,
    pub variables: BTreeSet<String>,
}

pub fn analyze(text: &str) -> TemplateHints {
    TemplateHints {
        unicode: has_unicode(text),
        encoding: SmsEncoding::detect(text),
        characters: text.chars().count(),
        segments: segment_count(text),
        variables: extract_variables(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_unicode() {
        assert!(!has_unicode("hello"));
        assert!(!has_unicode(""));
        assert!(has_unicode("hellö"));
        assert!(has_unicode("Salam, dünya"));
        assert!(has_unicode("🚀"));
    }

    #[test]
    fn test_extract_variables_dedupes() {
        let vars = extract_variables("Hi {{name}}, code {{code}}, again {{name}}");
        let expected: BTreeSet<String> = ["name", "code"].iter().map(|s| s.to_string()).collect();
        assert_eq!(vars, expected);
    }

    #[test]
    fn test_extract_variables_ignores_malformed() {
        let vars = extract_variables("{{ spaced }} {{dash-ed}} {single} {{}} {{ok_1}}");
        assert_eq!(vars.len(), 1);
        assert!(vars.contains("ok_1"));
    }

    #[test]
    fn test_extract_variables_is_idempotent() {
        let template = "Dear {{first_name}}, your OTP is {{otp}}";
        assert_eq!(extract_variables(template), extract_variables(template));
    }

    #[test]
    fn test_segment_boundaries_gsm7() {
        assert_eq!(segment_count(""), 0);
        assert_eq!(segment_count(&"a".repeat(160)), 1);
        assert_eq!(segment_count(&"a".repeat(161)), 2);
        assert_eq!(segment_count(&"a".repeat(306)), 2);
        assert_eq!(segment_count(&"a".repeat(307)), 3);
    }

    #[test]
    fn test_extension_chars_cost_two_septets() {
        // 80 braces = 160 septets
        assert_eq!(segment_count(&"{".repeat(80)), 1);
        assert_eq!(segment_count(&"{".repeat(81)), 2);
    }

    #[test]
    fn test_segment_boundaries_ucs2() {
        assert_eq!(segment_count(&"ö".repeat(70)), 1);
        assert_eq!(segment_count(&"ö".repeat(71)), 2);
        assert_eq!(segment_count(&"ö".repeat(134)), 2);
        assert_eq!(segment_count(&"ö".repeat(135)), 3);
    }

    #[test]
    fn test_analyze() {
        let hints = analyze("Salam {{name}}, şifrəniz {{code}}");
        assert!(hints.unicode);
        assert_eq!(hints.encoding, SmsEncoding::Ucs2);
        assert_eq!(hints.segments, 1);
        assert_eq!(hints.variables.len(), 2);
    }
}
