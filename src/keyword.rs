//! Case-insensitive keyword line filtering over extracted text.

/// Return every line of `text` whose lowercase form contains the lowercase
/// keyword as a substring.
///
/// Pure and order-preserving; duplicate lines are kept. An empty keyword
/// matches every line (substring-of-empty is always true), which the caller
/// may rely on to dump all recognized lines.
pub fn filter_lines(text: &str, keyword: &str) -> Vec<String> {
    let needle = keyword.to_lowercase();

    text.split('\n')
        .filter(|line| line.to_lowercase().contains(&needle))
        .map(|line| line.to_string())
        .collect()
}
