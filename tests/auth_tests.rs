use svcatalog::core::auth::AccessGate;
use svcatalog::models::session::Role;
use svcatalog::store::{KeyValue, MemoryBackend, keys};

#[test]
fn seeding_fills_only_missing_credentials() {
    let backend = MemoryBackend::new();
    backend.set(keys::PWD_ADMIN, "customadmin").unwrap();

    let gate = AccessGate::new(&backend);
    gate.ensure_seeded().unwrap();

    assert_eq!(backend.get(keys::PWD_ADMIN).as_deref(), Some("customadmin"));
    assert_eq!(backend.get(keys::PWD_EDITOR).as_deref(), Some("editor123"));
}

#[test]
fn login_with_seeded_defaults_yields_the_matching_role() {
    let backend = MemoryBackend::new();
    let gate = AccessGate::new(&backend);

    assert!(gate.login("admin123").unwrap());
    assert_eq!(gate.session().role, Some(Role::Admin));

    assert!(gate.login("editor123").unwrap());
    assert_eq!(gate.session().role, Some(Role::Editor));
}

#[test]
fn failed_login_signals_false_and_changes_nothing() {
    let backend = MemoryBackend::new();
    let gate = AccessGate::new(&backend);

    assert!(!gate.login("nope").unwrap());
    assert!(!gate.session().authenticated);
}

#[test]
fn admin_credential_is_checked_first_when_both_match() {
    let backend = MemoryBackend::new();
    backend.set(keys::PWD_ADMIN, "same").unwrap();
    backend.set(keys::PWD_EDITOR, "same").unwrap();

    let gate = AccessGate::new(&backend);
    assert!(gate.login("same").unwrap());
    assert_eq!(gate.session().role, Some(Role::Admin));
}

#[test]
fn password_rotation_takes_effect_for_subsequent_logins() {
    let backend = MemoryBackend::new();
    let gate = AccessGate::new(&backend);

    assert!(gate.login("admin123").unwrap());
    assert!(gate.change_password("swordfish").unwrap());

    assert!(!gate.login("admin123").unwrap());
    assert!(gate.login("swordfish").unwrap());
    assert_eq!(gate.session().role, Some(Role::Admin));
}

#[test]
fn editors_can_never_change_credentials() {
    let backend = MemoryBackend::new();
    let gate = AccessGate::new(&backend);

    assert!(gate.login("editor123").unwrap());
    assert!(!gate.change_password("hijack").unwrap());

    assert_eq!(backend.get(keys::PWD_ADMIN).as_deref(), Some("admin123"));
    assert_eq!(backend.get(keys::PWD_EDITOR).as_deref(), Some("editor123"));
}

#[test]
fn change_password_requires_an_open_session() {
    let backend = MemoryBackend::new();
    let gate = AccessGate::new(&backend);
    gate.ensure_seeded().unwrap();

    assert!(!gate.change_password("nope").unwrap());

    gate.login("admin123").unwrap();
    gate.logout().unwrap();
    assert!(!gate.change_password("nope").unwrap());
}

#[test]
fn logout_clears_the_persisted_session() {
    let backend = MemoryBackend::new();
    let gate = AccessGate::new(&backend);

    gate.login("admin123").unwrap();
    assert!(gate.session().authenticated);

    gate.logout().unwrap();
    assert!(!gate.session().authenticated);
    assert!(backend.get(keys::AUTH).is_none());
    assert!(backend.get(keys::ROLE).is_none());
}

#[test]
fn unknown_stored_role_degrades_to_editor() {
    let backend = MemoryBackend::new();
    backend.set(keys::AUTH, "true").unwrap();
    backend.set(keys::ROLE, "SUPERUSER").unwrap();

    let gate = AccessGate::new(&backend);
    let session = gate.session();
    assert!(session.authenticated);
    assert_eq!(session.role, Some(Role::Editor));
}
