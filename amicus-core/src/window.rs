//! Stable "next N" windowing over ordered lists.
//!
//! `window` never wraps; `advance` is the only operation that does. Callers
//! own the cursor.

/// Up to `size` contiguous elements starting at `cursor`.
/// Past the end the slice is shorter (possibly empty), never wrapped.
pub fn window<T>(list: &[T], cursor: usize, size: usize) -> &[T] {
    let start = cursor.min(list.len());
    let end = cursor.saturating_add(size).min(list.len());
    &list[start..end]
}

/// Next starting point, wrapping to 0 at `len`. An empty list always yields 0.
pub fn advance(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor + 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_window_short_at_end() {
        let list = ['a', 'b', 'c', 'd', 'e'];
        assert_eq!(window(&list, 3, 3), &['d', 'e']);
        assert_eq!(window(&list, 0, 3), &['a', 'b', 'c']);
    }

    #[test]
    fn test_window_past_end_is_empty() {
        let list = [1, 2, 3];
        assert!(window(&list, 3, 2).is_empty());
        assert!(window(&list, 10, 2).is_empty());
        assert!(window(&list, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(advance(4, 5), 0);
        assert_eq!(advance(0, 5), 1);
        assert_eq!(advance(3, 0), 0);
    }

    proptest! {
        #[test]
        fn window_is_contiguous_prefix(len in 0usize..20, cursor in 0usize..25, size in 0usize..8) {
            let list: Vec<usize> = (0..len).collect();
            let w = window(&list, cursor, size);
            prop_assert!(w.len() <= size);
            for (i, v) in w.iter().enumerate() {
                prop_assert_eq!(*v, cursor + i);
            }
        }

        #[test]
        fn advance_stays_in_range(cursor in 0usize..100, len in 1usize..50) {
            prop_assert!(advance(cursor % len, len) < len);
        }
    }
}
