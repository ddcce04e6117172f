//! The fixed interview-tip table used by keyword-based tip selection.

use serde::{Deserialize, Serialize};

/// Tip returned when no keyword matches the job description.
pub const DEFAULT_TIP: &str =
    "Study the job requirements and prepare concrete examples from your experience.";

/// One keyword and the tip it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipEntry {
    pub keyword: String,
    pub tip: String,
}

impl TipEntry {
    pub fn new(keyword: impl Into<String>, tip: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            tip: tip.into(),
        }
    }
}

/// Ordered keyword → tip table. The first keyword found wins, so order
/// is part of the table's meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipTable {
    entries: Vec<TipEntry>,
    default_tip: String,
}

impl TipTable {
    /// Keywords are stored lowercased; matching is case-insensitive.
    pub fn new(entries: Vec<TipEntry>, default_tip: impl Into<String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| TipEntry::new(e.keyword.to_lowercase(), e.tip))
            .collect();
        Self {
            entries,
            default_tip: default_tip.into(),
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            vec![
                TipEntry::new(
                    "python",
                    "Review async/await patterns and how to handle concurrent requests efficiently.",
                ),
                TipEntry::new(
                    "sql",
                    "Practice complex JOIN queries and understand indexing strategies for performance.",
                ),
                TipEntry::new(
                    "react",
                    "Be ready to explain the virtual DOM, hooks lifecycle, and state management patterns.",
                ),
                TipEntry::new(
                    "kubernetes",
                    "Know the difference between Deployments, StatefulSets, and DaemonSets.",
                ),
                TipEntry::new(
                    "fastapi",
                    "Understand dependency injection and how FastAPI uses Pydantic for validation.",
                ),
            ],
            DEFAULT_TIP,
        )
    }

    pub fn entries(&self) -> &[TipEntry] {
        &self.entries
    }

    pub fn default_tip(&self) -> &str {
        &self.default_tip
    }

    /// First entry whose keyword appears in `text`, case-insensitively.
    pub fn find(&self, text: &str) -> Option<&TipEntry> {
        let lower = text.to_lowercase();
        self.entries.iter().find(|e| lower.contains(&e.keyword))
    }

    /// The matching tip, or the default tip.
    pub fn select(&self, text: &str) -> &str {
        self.find(text)
            .map(|e| e.tip.as_str())
            .unwrap_or(&self.default_tip)
    }
}

impl Default for TipTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_keyword_in_table_order_wins() {
        let table = TipTable::builtin();
        // Mentions both SQL and Python; python comes first in the table.
        let tip = table.select("Data Analyst role requiring SQL, Tableau, Python for data analysis");
        assert!(tip.starts_with("Review async/await"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let table = TipTable::builtin();
        assert_eq!(table.find("KUBERNETES operators").unwrap().keyword, "kubernetes");
    }

    #[test]
    fn no_match_returns_default() {
        let table = TipTable::builtin();
        assert_eq!(
            table.select("Software engineering role requiring technical expertise."),
            DEFAULT_TIP
        );
    }

    #[test]
    fn custom_keywords_are_lowercased() {
        let table = TipTable::new(vec![TipEntry::new("Rust", "Know the borrow checker.")], "x");
        assert_eq!(table.select("rust backend"), "Know the borrow checker.");
        assert_eq!(table.select("go backend"), "x");
    }
}
