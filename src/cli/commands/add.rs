use crate::cli::commands::require_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::{AppError, AppResult};
use crate::models::category::DEFAULT_CATEGORY;
use crate::models::icon::IconRef;
use crate::models::service::Service;
use crate::store::{FileBackend, ServiceStore};
use crate::ui::messages::success;
use uuid::Uuid;

/// Create a new service record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        description,
        title_ar,
        description_ar,
        category,
        icon,
        slug,
    } = cmd
    {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let gate = AccessGate::new(&backend);
        require_session(&gate)?;

        if title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        if description.trim().is_empty() {
            return Err(AppError::Validation("description must not be empty".into()));
        }

        let category = match category.as_deref() {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };

        // Unknown bare icon names fall back through the preset registry.
        let icon = match icon.as_deref() {
            Some(raw) => IconRef::from_stored(raw).as_stored().to_string(),
            None => "Code".to_string(),
        };

        let service = Service {
            id: Uuid::new_v4().to_string(),
            title: title.clone(),
            description: description.clone(),
            title_ar: title_ar.clone(),
            description_ar: description_ar.clone(),
            category,
            icon,
            created_at: None,
            slug: slug.clone(),
        };

        let store = ServiceStore::new(&backend);
        let updated = store.upsert(service)?;

        // upsert appends new records, so the stored form is the last entry
        if let Some(stored) = updated.last() {
            success(format!(
                "Service '{}' created with slug '{}' (id {})",
                stored.title,
                stored.slug_or_empty(),
                stored.id
            ));
        }
    }
    Ok(())
}
