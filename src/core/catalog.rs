//! Filtering and sorting over an in-memory record list.
//!
//! Two filter variants exist because the two surfaces select categories
//! differently: the management list takes any subset (empty subset = no
//! restriction), the public catalog takes exactly one active category or
//! "All". Both share the same case-insensitive substring search; the public
//! catalog additionally searches the Arabic fields.

use crate::models::service::Service;
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Title,
    Category,
    Date,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Management-list filter: query against title OR description, record
/// category must be in the selected set (empty set = no restriction). An
/// empty string is a valid distinct category, not "unset".
pub fn admin_filter<'a>(
    records: &'a [Service],
    query: &str,
    categories: &[String],
) -> Vec<&'a Service> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|s| {
            let matches_search = needle.is_empty()
                || s.title.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle);
            let matches_category = categories.is_empty() || categories.contains(&s.category);
            matches_search && matches_category
        })
        .collect()
}

/// Public-catalog filter: one active category (`None` = All) matched by
/// equality, search over the English fields case-insensitively and the
/// Arabic fields as-is.
pub fn public_filter<'a>(
    records: &'a [Service],
    query: &str,
    active_category: Option<&str>,
) -> Vec<&'a Service> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|s| {
            let matches_category = active_category.is_none_or(|c| s.category == c);
            let matches_search = query.is_empty()
                || s.title.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
                || s.title_ar.as_deref().is_some_and(|t| t.contains(query))
                || s.description_ar.as_deref().is_some_and(|d| d.contains(query));
            matches_category && matches_search
        })
        .collect()
}

/// Sort in place by the given key and direction. The underlying sort is
/// stable and the descending variant reverses the comparator, never the
/// result, so records with equal keys keep their storage order either way.
pub fn sort_services(records: &mut [&Service], key: SortKey, direction: SortDirection) {
    records.sort_by(|a, b| {
        let ord = match key {
            SortKey::Title => compare_text(&a.title, &b.title),
            SortKey::Category => compare_text(&a.category, &b.category),
            SortKey::Date => a
                .created_at
                .unwrap_or(0)
                .cmp(&b.created_at.unwrap_or(0)),
        };
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

// Case-insensitive lexicographic compare. Ties fall through to the stable
// sort, which keeps storage order.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Every category present in the records, first-seen order.
pub fn distinct_categories(records: &[Service]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for s in records {
        if !seen.contains(&s.category) {
            seen.push(s.category.clone());
        }
    }
    seen
}
