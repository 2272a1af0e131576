//! A single recorded conversion

use chrono::{DateTime, Utc};
use codeshift_core::Language;
use serde::{Deserialize, Serialize};

/// Characters of input/output kept per entry before the ellipsis
pub const MAX_CODE_CHARS: usize = 200;

/// Appended to code that was cut at [`MAX_CODE_CHARS`]
pub const ELLIPSIS: &str = "...";

/// One past conversion, with input and output shortened for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Epoch milliseconds at creation, strictly increasing within a log
    pub id: i64,
    #[serde(alias = "fromLang")]
    pub source_lang: Language,
    #[serde(alias = "toLang")]
    pub target_lang: Language,
    pub input_code: String,
    pub output_code: String,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub(crate) fn new(
        id: i64,
        source_lang: Language,
        target_lang: Language,
        input: &str,
        output: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            source_lang,
            target_lang,
            input_code: truncate_code(input),
            output_code: truncate_code(output),
            timestamp,
        }
    }
}

/// Keep the first [`MAX_CODE_CHARS`] characters, marking the cut with [`ELLIPSIS`]
pub fn truncate_code(code: &str) -> String {
    match code.char_indices().nth(MAX_CODE_CHARS) {
        Some((cut, _)) => format!("{}{}", &code[..cut], ELLIPSIS),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_boundaries() {
        let exact = "a".repeat(MAX_CODE_CHARS);
        assert_eq!(truncate_code(&exact), exact);

        let over = "a".repeat(MAX_CODE_CHARS + 1);
        let cut = truncate_code(&over);
        assert_eq!(cut.chars().count(), MAX_CODE_CHARS + ELLIPSIS.len());
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let wide = "é".repeat(250);
        let cut = truncate_code(&wide);
        assert_eq!(cut.chars().count(), 203);
        assert!(cut.starts_with(&"é".repeat(200)));
    }

    #[test]
    fn test_json_shape() {
        let entry = HistoryEntry::new(
            1_700_000_000_000,
            Language::JavaScript,
            Language::Python,
            "console.log(1)",
            "print(1)",
            DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        );
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["id"], 1_700_000_000_000i64);
        assert_eq!(json["sourceLang"], "javascript");
        assert_eq!(json["targetLang"], "python");
        assert_eq!(json["inputCode"], "console.log(1)");
        assert_eq!(json["outputCode"], "print(1)");
        assert_eq!(json["timestamp"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_reads_legacy_field_names() {
        let json = r#"{
            "id": 1,
            "fromLang": "java",
            "toLang": "python",
            "inputCode": "a",
            "outputCode": "b",
            "timestamp": "2024-01-01T00:00:00.000Z"
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.source_lang, Language::Java);
        assert_eq!(entry.target_lang, Language::Python);
    }
}
