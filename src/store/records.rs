//! The record store owning the persisted service collection.
//!
//! All reads go through a repair pass (slug and timestamp backfill) and all
//! mutations rewrite the full collection: the latest writer's snapshot wins,
//! there is no merge. Storage order is preserved across every operation.

use crate::core::normalize;
use crate::errors::AppResult;
use crate::models::service::Service;
use crate::store::defaults::default_services;
use crate::store::{KeyValue, keys};
use crate::ui::messages::warning;

pub struct ServiceStore<'a, B: KeyValue> {
    backend: &'a B,
}

impl<'a, B: KeyValue> ServiceStore<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }

    /// Return every persisted record in storage order.
    ///
    /// On first run the default catalog is seeded and returned. An
    /// unreadable or unparseable stored value is reported and answered with
    /// the default catalog WITHOUT persisting over the damaged value, so it
    /// stays inspectable on disk.
    pub fn list(&self) -> AppResult<Vec<Service>> {
        let stored = match self.backend.get(keys::SERVICES) {
            Some(raw) => raw,
            None => {
                let defaults = default_services();
                self.persist(&defaults)?;
                return Ok(defaults);
            }
        };

        match serde_json::from_str::<Vec<Service>>(&stored) {
            Ok(services) => Ok(services.into_iter().map(normalize::repair).collect()),
            Err(e) => {
                warning(format!(
                    "Stored catalog is not valid JSON ({}), serving the default catalog",
                    e
                ));
                Ok(default_services())
            }
        }
    }

    /// First record whose slug matches, in storage order. Slug collisions
    /// are not reconciled: the first match wins.
    pub fn get_by_slug(&self, slug: &str) -> AppResult<Option<Service>> {
        Ok(self.list()?.into_iter().find(|s| s.slug_or_empty() == slug))
    }

    pub fn get_by_id(&self, id: &str) -> AppResult<Option<Service>> {
        Ok(self.list()?.into_iter().find(|s| s.id == id))
    }

    /// Insert or replace by identifier. A replaced record keeps its position
    /// and its original creation timestamp; a new record is appended.
    /// Persists and returns the full resulting collection.
    pub fn upsert(&self, service: Service) -> AppResult<Vec<Service>> {
        let mut current = self.list()?;
        let index = current.iter().position(|s| s.id == service.id);

        let prepared = normalize::prepare_for_store(
            service,
            index.map(|i| &current[i]),
        );

        match index {
            Some(i) => current[i] = prepared,
            None => current.push(prepared),
        }

        self.persist(&current)?;
        Ok(current)
    }

    /// Remove the record with the given identifier. Unknown identifiers are
    /// a no-op, not an error.
    pub fn delete_one(&self, id: &str) -> AppResult<Vec<Service>> {
        let updated: Vec<Service> = self
            .list()?
            .into_iter()
            .filter(|s| s.id != id)
            .collect();
        self.persist(&updated)?;
        Ok(updated)
    }

    /// Remove every record whose identifier appears in `ids`.
    pub fn delete_many(&self, ids: &[String]) -> AppResult<Vec<Service>> {
        let updated: Vec<Service> = self
            .list()?
            .into_iter()
            .filter(|s| !ids.contains(&s.id))
            .collect();
        self.persist(&updated)?;
        Ok(updated)
    }

    /// Discard all records and restore the default catalog.
    pub fn reset(&self) -> AppResult<Vec<Service>> {
        let defaults = default_services();
        self.persist(&defaults)?;
        Ok(defaults)
    }

    fn persist(&self, services: &[Service]) -> AppResult<()> {
        let raw = serde_json::to_string_pretty(services)?;
        self.backend.set(keys::SERVICES, &raw)
    }
}
