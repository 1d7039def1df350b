use std::collections::HashSet;

/// Jaccard similarity of two titles over their lowercase whitespace tokens.
///
/// Tokens are compared as sets, so repeats and word order are ignored.
/// Punctuation is kept: `"word."` and `"word"` are different tokens. The result
/// is rounded to two decimals and is `0.0` when both titles have no tokens.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let left: HashSet<&str> = a.split_whitespace().collect();
    let right: HashSet<&str> = b.split_whitespace().collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = left.intersection(&right).count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = intersection as f64 / union as f64;
    (ratio * 100.0).round() / 100.0
}
