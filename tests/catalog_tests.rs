use svcatalog::core::catalog::{
    SortDirection, SortKey, admin_filter, distinct_categories, public_filter, sort_services,
};
use svcatalog::models::service::Service;

fn service(id: &str, title: &str, description: &str, category: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        title_ar: None,
        description_ar: None,
        category: category.to_string(),
        icon: "Code".to_string(),
        created_at: None,
        slug: None,
    }
}

fn cloud_and_security() -> Vec<Service> {
    vec![
        service("1", "Cloud Migration", "Move to the cloud", "Cloud"),
        service("2", "Security Audit", "Find vulnerabilities", "Security"),
    ]
}

#[test]
fn admin_filter_matches_search_case_insensitively() {
    let records = cloud_and_security();

    let hits = admin_filter(&records, "cloud", &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");

    let hits = admin_filter(&records, "CLOUD", &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");

    // description text matches too
    let hits = admin_filter(&records, "vulnerab", &[]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn admin_filter_restricts_by_selected_categories() {
    let records = cloud_and_security();

    let hits = admin_filter(&records, "", &["Security".to_string()]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn admin_filter_with_no_query_and_no_categories_is_unfiltered() {
    let records = cloud_and_security();
    let hits = admin_filter(&records, "", &[]);
    assert_eq!(hits.len(), 2);
}

#[test]
fn empty_string_is_a_distinct_matchable_category() {
    let records = vec![
        service("1", "Uncategorized", "none", ""),
        service("2", "Categorized", "some", "Misc"),
    ];

    let hits = admin_filter(&records, "", &[String::new()]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn public_filter_takes_exactly_one_active_category_or_all() {
    let records = cloud_and_security();

    let hits = public_filter(&records, "", Some("Cloud"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");

    let hits = public_filter(&records, "", None);
    assert_eq!(hits.len(), 2);
}

#[test]
fn public_filter_searches_the_arabic_fields() {
    let mut records = cloud_and_security();
    records[0].title_ar = Some("ترحيل السحابة".to_string());

    let hits = public_filter(&records, "السحابة", None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn title_sort_is_stable_for_equal_keys() {
    let records = vec![
        service("b", "B", "d", "c"),
        service("a1", "A", "d", "c"),
        service("a2", "A", "d", "c"),
    ];
    let mut refs: Vec<&Service> = records.iter().collect();

    sort_services(&mut refs, SortKey::Title, SortDirection::Asc);
    let ids: Vec<&str> = refs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "b"]);

    // descending reverses the comparator, not the result, so ties keep
    // their storage order
    let mut refs: Vec<&Service> = records.iter().collect();
    sort_services(&mut refs, SortKey::Title, SortDirection::Desc);
    let ids: Vec<&str> = refs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a1", "a2"]);
}

#[test]
fn title_sort_ignores_case() {
    let records = vec![
        service("1", "beta", "d", "c"),
        service("2", "Alpha", "d", "c"),
    ];
    let mut refs: Vec<&Service> = records.iter().collect();
    sort_services(&mut refs, SortKey::Title, SortDirection::Asc);
    assert_eq!(refs[0].id, "2");
}

#[test]
fn date_sort_treats_missing_timestamps_as_oldest() {
    let mut records = vec![
        service("new", "New", "d", "c"),
        service("legacy", "Legacy", "d", "c"),
    ];
    records[0].created_at = Some(500);
    records[1].created_at = None;

    let mut refs: Vec<&Service> = records.iter().collect();
    sort_services(&mut refs, SortKey::Date, SortDirection::Asc);
    assert_eq!(refs[0].id, "legacy");
}

#[test]
fn category_sort_orders_lexicographically() {
    let records = vec![
        service("1", "x", "d", "Security"),
        service("2", "y", "d", "Cloud"),
        service("3", "z", "d", "development"),
    ];
    let mut refs: Vec<&Service> = records.iter().collect();
    sort_services(&mut refs, SortKey::Category, SortDirection::Asc);
    let ids: Vec<&str> = refs.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
}

#[test]
fn distinct_categories_keep_first_seen_order() {
    let records = vec![
        service("1", "a", "d", "Cloud"),
        service("2", "b", "d", "Security"),
        service("3", "c", "d", "Cloud"),
        service("4", "d", "d", ""),
    ];
    assert_eq!(
        distinct_categories(&records),
        vec!["Cloud".to_string(), "Security".to_string(), String::new()]
    );
}
