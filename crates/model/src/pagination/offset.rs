/// Offsets of every page after the first: `{L, 2L, ...}` up to the last page
/// implied by the declared total. The first page (offset 0) is fetched
/// eagerly to learn the total, so it is never part of the plan.
///
/// For `declared_total <= page_size` (including an empty dataset) the plan
/// is empty.
pub fn remaining_offsets(declared_total: usize, page_size: usize) -> Vec<usize> {
    debug_assert!(page_size > 0);
    let pages = declared_total.div_ceil(page_size);
    (1..pages).map(|i| i * page_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_has_no_remaining_pages() {
        assert!(remaining_offsets(0, 100).is_empty());
    }

    #[test]
    fn single_page_has_no_remaining_pages() {
        assert!(remaining_offsets(1, 100).is_empty());
        assert!(remaining_offsets(100, 100).is_empty());
    }

    #[test]
    fn partial_last_page_is_included() {
        assert_eq!(remaining_offsets(101, 100), vec![100]);
        assert_eq!(remaining_offsets(250, 100), vec![100, 200]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        assert_eq!(remaining_offsets(300, 100), vec![100, 200]);
    }

    #[test]
    fn plan_length_matches_ceiling_division() {
        for total in 0..=1000usize {
            for page_size in [1, 7, 100, 250] {
                let plan = remaining_offsets(total, page_size);
                let expected = total.div_ceil(page_size).saturating_sub(1);
                assert_eq!(plan.len(), expected, "total={total} page_size={page_size}");
                for (i, offset) in plan.iter().enumerate() {
                    assert_eq!(*offset, (i + 1) * page_size);
                }
            }
        }
    }
}
