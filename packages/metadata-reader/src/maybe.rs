//! Combinators over sequences of optional values.
//!
//! The single-value chain (`map`, `and_then`, `or_else`, `unwrap_or`) is
//! `Option` itself; these helpers cover the two sequence shapes the reader
//! needs.

/// The first present value, scanning left to right.
pub fn first_present<T>(values: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    values.into_iter().flatten().next()
}

/// Present only if every element is present. A single absence discards the
/// entire sequence, not just the absent element.
pub fn all_or_absent<T>(values: impl IntoIterator<Item = Option<T>>) -> Option<Vec<T>> {
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_present_picks_leftmost() {
        assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_present::<i32>([None, None]), None);
        assert_eq!(first_present::<i32>([]), None);
    }

    #[test]
    fn test_all_or_absent_requires_every_element() {
        assert_eq!(all_or_absent([Some(1), Some(2)]), Some(vec![1, 2]));
        assert_eq!(all_or_absent([Some(1), None, Some(3)]), None);
    }

    #[test]
    fn test_all_or_absent_of_empty_is_present() {
        assert_eq!(all_or_absent::<i32>([]), Some(vec![]));
    }
}
