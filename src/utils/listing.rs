/// In-memory filtered + sorted view over a fetched collection.
///
/// List endpoints materialize the full collection and derive the display
/// order here, recomputed per request from (collection, search term, filter
/// predicate, sort key, sort direction). Search is a case-insensitive
/// substring match across the fields each entity exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_param(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "desc" | "descending" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

pub fn matches_search<T: Searchable>(item: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_and_sort<T, K, F, P>(
    items: Vec<T>,
    search: &str,
    keep: P,
    sort_key: F,
    direction: SortDirection,
) -> Vec<T>
where
    T: Searchable,
    K: Ord,
    F: Fn(&T) -> K,
    P: Fn(&T) -> bool,
{
    let mut view: Vec<T> = items
        .into_iter()
        .filter(|item| matches_search(item, search) && keep(item))
        .collect();

    view.sort_by(|a, b| {
        let ordering = sort_key(a).cmp(&sort_key(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    view
}

/// Key helper for case-insensitive string ordering.
pub fn text_key(value: &str) -> String {
    value.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: i64,
        purpose: String,
        email: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.purpose, &self.email]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 1,
                purpose: "Zika Outbreak Assistance".to_string(),
                email: "ana@example.com".to_string(),
            },
            Row {
                id: 2,
                purpose: "indigency certification".to_string(),
                email: "ben@example.com".to_string(),
            },
            Row {
                id: 3,
                purpose: "Job application".to_string(),
                email: "carla@example.com".to_string(),
            },
        ]
    }

    #[test]
    fn empty_search_returns_everything_in_sort_order() {
        let view = filter_and_sort(rows(), "", |_| true, |r| r.id, SortDirection::Descending);
        let ids: Vec<i64> = view.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let view = filter_and_sort(rows(), "zika", |_| true, |r| r.id, SortDirection::Ascending);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);

        // "zika" must not match a row whose fields only contain "indigency"
        let view = filter_and_sort(rows(), "ZIKA", |_| true, |r| r.id, SortDirection::Ascending);
        assert!(view.iter().all(|r| r.id != 2));
    }

    #[test]
    fn filter_predicate_composes_with_search() {
        let view = filter_and_sort(
            rows(),
            "",
            |r| r.email.starts_with('b'),
            |r| r.id,
            SortDirection::Ascending,
        );
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 2);
    }

    #[test]
    fn text_key_orders_without_case_bias() {
        let view = filter_and_sort(
            rows(),
            "",
            |_| true,
            |r| text_key(&r.purpose),
            SortDirection::Ascending,
        );
        let ids: Vec<i64> = view.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
