use svcatalog::models::service::Service;
use svcatalog::store::defaults::default_services;
use svcatalog::store::{KeyValue, MemoryBackend, ServiceStore, keys};

fn sample(id: &str, title: &str) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: "A service".to_string(),
        title_ar: None,
        description_ar: None,
        category: "Development".to_string(),
        icon: "Code".to_string(),
        created_at: None,
        slug: None,
    }
}

#[test]
fn first_list_seeds_the_default_catalog() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);

    let services = store.list().unwrap();
    assert_eq!(services.len(), 7);
    assert_eq!(services[0].id, "1");
    assert_eq!(services[0].slug.as_deref(), Some("custom-software-development"));

    // the seed is persisted
    assert!(backend.get(keys::SERVICES).is_some());
}

#[test]
fn upsert_appends_new_records_with_derived_slug_and_timestamp() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);

    let updated = store.upsert(sample("n1", "Edge  Computing!!")).unwrap();
    let stored = updated.last().unwrap();

    assert_eq!(updated.len(), 8);
    assert_eq!(stored.slug.as_deref(), Some("edge-computing"));
    assert!(stored.created_at.is_some());
}

#[test]
fn upsert_replaces_in_place_and_preserves_position() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);
    store.list().unwrap();

    let mut replacement = sample("3", "Penetration Testing");
    replacement.category = "Security".to_string();
    let updated = store.upsert(replacement).unwrap();

    assert_eq!(updated.len(), 7);
    assert_eq!(updated[2].id, "3");
    assert_eq!(updated[2].title, "Penetration Testing");
}

#[test]
fn upsert_never_changes_an_existing_creation_timestamp() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);
    let original = store.list().unwrap()[0].clone();

    let mut edited = original.clone();
    edited.title = "Renamed".to_string();
    edited.created_at = Some(999);

    let updated = store.upsert(edited).unwrap();
    assert_eq!(updated[0].created_at, original.created_at);

    // also when the edit carries no timestamp at all
    let mut edited = updated[0].clone();
    edited.created_at = None;
    let updated = store.upsert(edited).unwrap();
    assert_eq!(updated[0].created_at, original.created_at);
}

#[test]
fn upsert_keeps_an_explicit_slug_and_never_rederives_on_edit() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);
    store.list().unwrap();

    let mut record = sample("s1", "Original Title");
    record.slug = Some("hand-picked".to_string());
    let updated = store.upsert(record).unwrap();
    assert_eq!(updated.last().unwrap().slug.as_deref(), Some("hand-picked"));

    // retitle without touching the slug
    let mut edited = updated.last().unwrap().clone();
    edited.title = "Completely Different".to_string();
    let updated = store.upsert(edited).unwrap();
    assert_eq!(updated.last().unwrap().slug.as_deref(), Some("hand-picked"));
}

#[test]
fn delete_many_removes_exactly_the_named_ids() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);
    store.list().unwrap();

    let remaining = store
        .delete_many(&["2".to_string(), "5".to_string(), "999".to_string()])
        .unwrap();

    let ids: Vec<&str> = remaining.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4", "6", "7"]);
}

#[test]
fn deleting_an_unknown_id_is_a_noop() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);
    let before = store.list().unwrap();

    let after = store.delete_one("does-not-exist").unwrap();
    assert_eq!(before, after);
}

#[test]
fn reset_restores_the_default_catalog_after_any_mutation() {
    let backend = MemoryBackend::new();
    let store = ServiceStore::new(&backend);

    store.upsert(sample("x", "Extra")).unwrap();
    store.delete_one("1").unwrap();

    let restored = store.reset().unwrap();
    assert_eq!(restored, default_services());
    assert_eq!(store.list().unwrap(), default_services());
}

#[test]
fn corrupt_stored_catalog_falls_back_to_defaults_without_overwriting() {
    let backend = MemoryBackend::new();
    backend.set(keys::SERVICES, "{this is not json").unwrap();

    let store = ServiceStore::new(&backend);
    let services = store.list().unwrap();
    assert_eq!(services, default_services());

    // the damaged value stays on disk for inspection
    assert_eq!(
        backend.get(keys::SERVICES).as_deref(),
        Some("{this is not json")
    );
}

#[test]
fn list_backfills_missing_slug_and_timestamp_on_every_read() {
    let backend = MemoryBackend::new();
    let legacy = r#"[{"id":"a","title":"Legacy Entry","description":"Old","category":"Misc","icon":"Code"}]"#;
    backend.set(keys::SERVICES, legacy).unwrap();

    let store = ServiceStore::new(&backend);
    let services = store.list().unwrap();

    assert_eq!(services.len(), 1);
    assert_eq!(services[0].slug.as_deref(), Some("legacy-entry"));
    assert!(services[0].created_at.is_some());

    // the repair is a read-side pass, the stored blob is untouched
    assert_eq!(backend.get(keys::SERVICES).as_deref(), Some(legacy));
}

#[test]
fn get_by_slug_returns_the_first_match_in_storage_order() {
    let backend = MemoryBackend::new();
    let colliding = r#"[
        {"id":"a","title":"First","description":"d","category":"c","icon":"Code","slug":"shared","createdAt":1},
        {"id":"b","title":"Second","description":"d","category":"c","icon":"Code","slug":"shared","createdAt":2}
    ]"#;
    backend.set(keys::SERVICES, colliding).unwrap();

    let store = ServiceStore::new(&backend);
    let found = store.get_by_slug("shared").unwrap().unwrap();
    assert_eq!(found.id, "a");

    assert!(store.get_by_slug("missing").unwrap().is_none());
}
