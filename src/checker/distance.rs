/// A distance function over words.
///
/// Implementations must be a true metric: `distance(x, x) == 0`, symmetric, and
/// satisfy the triangle inequality. [`BkTree`](super::bktree::BkTree) prunes
/// subtrees based on these laws, so a non-metric silently loses matches.
pub trait Metric: Send + Sync {
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Levenshtein edit distance: the minimum number of single-character
/// insertions, deletions and substitutions turning `a` into `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        edit_distance(a, b)
    }
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);

            matrix[i + 1][j + 1] = (matrix[i][j + 1] + 1) // deletion
                .min(matrix[i + 1][j] + 1) // insertion
                .min(matrix[i][j] + cost); // substitution
        }
    }

    matrix[a_len][b_len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("hello", "hello"), 0);
        assert_eq!(edit_distance("hello", "hallo"), 1);
        assert_eq!(edit_distance("hello", "hullo"), 1);
        assert_eq!(edit_distance("hello", "world"), 4);
        assert_eq!(edit_distance("teh", "the"), 2);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(Levenshtein.distance("naïve", "naive"), 1);
    }

    fn word() -> impl Strategy<Value = String> {
        "[a-e]{0,7}"
    }

    proptest! {
        #[test]
        fn identity(x in word()) {
            prop_assert_eq!(edit_distance(&x, &x), 0);
        }

        #[test]
        fn symmetry(x in word(), y in word()) {
            prop_assert_eq!(edit_distance(&x, &y), edit_distance(&y, &x));
        }

        #[test]
        fn triangle_inequality(x in word(), y in word(), z in word()) {
            prop_assert!(edit_distance(&x, &z) <= edit_distance(&x, &y) + edit_distance(&y, &z));
        }

        #[test]
        fn bounded_by_longer_length(x in word(), y in word()) {
            let d = edit_distance(&x, &y);
            let (lx, ly) = (x.chars().count(), y.chars().count());
            prop_assert!(d <= lx.max(ly));
            prop_assert!(d >= lx.abs_diff(ly));
        }
    }
}
