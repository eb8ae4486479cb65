use crate::records::{page::Page, record::Record};
use tracing::warn;

/// The fully reassembled dataset: every record in offset order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    /// Assembles the dataset from the first page plus the pages produced by
    /// the worker pool, in whatever order they arrived. Pages are sorted by
    /// offset before concatenation, so the result is independent of fetch
    /// completion order.
    ///
    /// A mismatch between the assembled length and the total declared by the
    /// first page is logged and tolerated; the source total may drift under
    /// concurrent external writes.
    pub fn assemble(first: Page, mut rest: Vec<Page>) -> Self {
        let declared_total = first.declared_total;

        let mut pages = Vec::with_capacity(rest.len() + 1);
        pages.push(first);
        pages.append(&mut rest);
        pages.sort_by_key(|p| p.offset);

        let records: Vec<Record> = pages.into_iter().flat_map(|p| p.items).collect();

        if records.len() != declared_total {
            warn!(
                declared = declared_total,
                assembled = records.len(),
                "Assembled record count differs from the declared total"
            );
        }

        Dataset { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::page::{Page, PageResponse};
    use serde_json::json;
    use tracing_test::traced_test;

    fn page(offset: usize, ids: &[u64], total: usize) -> Page {
        let items = ids
            .iter()
            .map(|id| match json!({"id": id}) {
                serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            })
            .collect();
        Page::from_response(
            offset,
            PageResponse {
                items,
                count: ids.len(),
                total_count: total,
            },
        )
    }

    fn ids(dataset: &Dataset) -> Vec<u64> {
        dataset
            .records
            .iter()
            .map(|r| r.get("id").unwrap().as_u64().unwrap())
            .collect()
    }

    #[test]
    fn assembles_in_offset_order() {
        let first = page(0, &[1, 2], 6);
        let rest = vec![page(4, &[5, 6], 6), page(2, &[3, 4], 6)];

        let dataset = Dataset::assemble(first, rest);
        assert_eq!(ids(&dataset), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn assembly_is_permutation_invariant() {
        let totals = 7;
        let build = |order: [usize; 3]| {
            let pages = [page(2, &[3, 4], totals), page(4, &[5, 6], totals), page(6, &[7], totals)];
            let rest: Vec<Page> = order.iter().map(|&i| pages[i].clone()).collect();
            Dataset::assemble(page(0, &[1, 2], totals), rest)
        };

        let baseline = ids(&build([0, 1, 2]));
        for order in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
            assert_eq!(ids(&build(order)), baseline);
        }
    }

    #[test]
    #[traced_test]
    fn count_mismatch_warns_but_proceeds() {
        let first = page(0, &[1, 2], 300);
        let dataset = Dataset::assemble(first, vec![page(2, &[3], 300)]);

        assert_eq!(dataset.len(), 3);
        assert!(logs_contain(
            "Assembled record count differs from the declared total"
        ));
    }

    #[test]
    fn matching_count_does_not_warn() {
        let first = page(0, &[1, 2], 3);
        let dataset = Dataset::assemble(first, vec![page(2, &[3], 3)]);
        assert_eq!(dataset.len(), 3);
    }
}
