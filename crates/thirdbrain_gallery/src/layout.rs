//! Display layout helpers.

use regex::Regex;
use std::sync::OnceLock;

/// Assign entries to `columns` display columns, round-robin by index.
///
/// Order within each column follows the input order, so a two-column layout
/// shows entries 0, 2, 4... on the left and 1, 3, 5... on the right.
///
/// # Examples
///
/// ```
/// use thirdbrain_gallery::column_layout;
///
/// let urls = ["a.png", "b.png", "c.png"];
/// let columns = column_layout(2, &urls);
/// assert_eq!(columns[0], ["a.png", "c.png"]);
/// assert_eq!(columns[1], ["b.png"]);
/// ```
pub fn column_layout<T: Clone>(columns: usize, entries: &[T]) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut layout: Vec<Vec<T>> = vec![Vec::new(); columns];
    for (index, entry) in entries.iter().enumerate() {
        layout[index % columns].push(entry.clone());
    }
    layout
}

/// Extract a caption from an image URL.
///
/// Image files are named `{stem}_{provider}_{i}.png`; the provider label
/// makes a serviceable caption.
///
/// # Examples
///
/// ```
/// use thirdbrain_gallery::caption_for;
///
/// assert_eq!(
///     caption_for("vault://ab12/Deep Work_dalle_0.png").as_deref(),
///     Some("dalle")
/// );
/// assert_eq!(caption_for("vault://ab12/notes.txt"), None);
/// ```
pub fn caption_for(url: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"_(\w+)_\d+\.png").expect("caption pattern is valid"));
    pattern
        .captures(url)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_round_robin() {
        let entries = [1, 2, 3, 4, 5];
        let columns = column_layout(2, &entries);
        assert_eq!(columns[0], [1, 3, 5]);
        assert_eq!(columns[1], [2, 4]);
    }

    #[test]
    fn zero_columns_degrades_to_one() {
        let entries = [1, 2];
        let columns = column_layout(0, &entries);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0], [1, 2]);
    }

    #[test]
    fn caption_takes_the_provider_segment() {
        assert_eq!(
            caption_for("vault://x/The Title_stability_1.png").as_deref(),
            Some("stability")
        );
    }
}
