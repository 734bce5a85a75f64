//! Subject normalization and the used-subject ledger.
//!
//! Generated subjects (book titles, art names) arrive with inconsistent
//! punctuation and casing. Collision checks against previously used subjects
//! compare normalized forms; display forms are kept verbatim.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Punctuation stripped before subject comparison.
const STRIPPED: &[char] = &['.', '=', ':', '\'', ',', '"', '?'];

/// Strip the fixed punctuation set from a generated subject, preserving case.
///
/// Generated titles arrive decorated ("\"Deep Work\": by Cal Newport.");
/// this produces the display form used for folder names and record keys.
///
/// # Examples
///
/// ```
/// use thirdbrain_core::strip_punctuation;
///
/// assert_eq!(
///     strip_punctuation("\"Deep Work\": by Cal Newport."),
///     "Deep Work by Cal Newport"
/// );
/// ```
pub fn strip_punctuation(subject: &str) -> String {
    subject
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalize a subject for collision comparison.
///
/// Strips the fixed punctuation set, collapses surrounding whitespace, and
/// lowercases the result. The comparison is case-insensitive; the display
/// form is not altered by callers.
///
/// # Examples
///
/// ```
/// use thirdbrain_core::normalize_subject;
///
/// assert_eq!(
///     normalize_subject("\"Atomic Habits\" by James Clear."),
///     normalize_subject("atomic habits by james clear"),
/// );
/// ```
pub fn normalize_subject(subject: &str) -> String {
    strip_punctuation(subject).to_lowercase()
}

/// A request-scoped record of subjects already used.
///
/// Built per pipeline invocation from store or vault listings; never shared
/// process-global state. Membership is decided on normalized forms, while
/// the original display forms are retained for prompt construction ("not
/// these subjects, please").
///
/// # Examples
///
/// ```
/// use thirdbrain_core::SubjectLedger;
///
/// let mut ledger = SubjectLedger::from_titles(["Atomic Habits by James Clear"]);
/// assert!(ledger.contains("\"Atomic Habits\" by James Clear"));
/// assert!(!ledger.contains("Deep Work by Cal Newport"));
///
/// ledger.insert("Deep Work by Cal Newport");
/// assert!(ledger.contains("deep work by cal newport"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectLedger {
    titles: Vec<String>,
    normalized: HashSet<String>,
}

impl SubjectLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from display-form titles.
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ledger = Self::new();
        for title in titles {
            ledger.insert(title);
        }
        ledger
    }

    /// True when the subject collides with a used subject after normalization.
    pub fn contains(&self, subject: &str) -> bool {
        self.normalized.contains(&normalize_subject(subject))
    }

    /// Record a subject as used. Duplicates (post-normalization) are ignored.
    pub fn insert(&mut self, subject: impl Into<String>) {
        let subject = subject.into();
        if self.normalized.insert(normalize_subject(&subject)) {
            self.titles.push(subject);
        }
    }

    /// The display forms of all used subjects, in insertion order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of distinct subjects recorded.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// True when no subjects are recorded.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_punctuation_and_case() {
        assert_eq!(
            normalize_subject("The 7 Habits: of Highly Effective People?"),
            "the 7 habits of highly effective people"
        );
    }

    #[test]
    fn ledger_deduplicates_on_normalized_form() {
        let mut ledger = SubjectLedger::new();
        ledger.insert("Atomic Habits by James Clear");
        ledger.insert("\"Atomic Habits\" by James Clear.");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn display_forms_are_preserved() {
        let ledger = SubjectLedger::from_titles(["Deep Work by Cal Newport"]);
        assert_eq!(ledger.titles(), ["Deep Work by Cal Newport"]);
    }
}
