//! Slug derivation and record repair.
//!
//! Pure helpers applied by the record store on every read (backfill pass for
//! legacy records) and on every write (derive-if-absent pass). A present
//! non-empty slug or timestamp is never overwritten.

use crate::models::service::Service;
use chrono::Utc;
use regex::Regex;
use std::sync::OnceLock;

fn non_alnum_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-z0-9]+").unwrap())
}

/// Derive a URL-safe slug from a title: lowercase, every run of
/// non-alphanumeric characters collapsed to a single hyphen, leading and
/// trailing hyphens trimmed.
pub fn derive_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = non_alnum_runs().replace_all(&lowered, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Current time as epoch milliseconds, the unit creation timestamps are
/// stored in.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

fn slug_missing(service: &Service) -> bool {
    service.slug.as_deref().is_none_or(|s| s.is_empty())
}

/// Backfill a record's slug and creation timestamp where absent.
pub fn repair(mut service: Service) -> Service {
    if slug_missing(&service) {
        service.slug = Some(derive_slug(&service.title));
    }
    if service.created_at.is_none() {
        service.created_at = Some(now_millis());
    }
    service
}

/// Prepare an incoming record for storage: derive the slug if absent and
/// settle the creation timestamp. A record that replaces an existing one
/// always carries the existing timestamp forward, whatever the update
/// supplied; a new record keeps its own timestamp or gets "now".
pub fn prepare_for_store(mut service: Service, existing: Option<&Service>) -> Service {
    if slug_missing(&service) {
        service.slug = Some(derive_slug(&service.title));
    }
    service.created_at = match existing.and_then(|e| e.created_at) {
        Some(original) => Some(original),
        None => service.created_at.or_else(|| Some(now_millis())),
    };
    service
}
