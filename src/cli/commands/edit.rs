use crate::cli::commands::require_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::errors::{AppError, AppResult};
use crate::models::icon::IconRef;
use crate::store::{FileBackend, ServiceStore};
use crate::ui::messages::success;

/// Partial update of an existing record. Identifier and creation timestamp
/// are preserved; omitted flags keep the current values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
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

        let store = ServiceStore::new(&backend);
        let mut service = store
            .get_by_id(id)?
            .ok_or_else(|| AppError::Validation(format!("no service with id '{}'", id)))?;

        if let Some(t) = title {
            if t.trim().is_empty() {
                return Err(AppError::Validation("title must not be empty".into()));
            }
            service.title = t.clone();
        }
        if let Some(d) = description {
            if d.trim().is_empty() {
                return Err(AppError::Validation("description must not be empty".into()));
            }
            service.description = d.clone();
        }
        if let Some(t) = title_ar {
            service.title_ar = Some(t.clone());
        }
        if let Some(d) = description_ar {
            service.description_ar = Some(d.clone());
        }
        if let Some(c) = category {
            service.category = c.clone();
        }
        if let Some(i) = icon {
            service.icon = IconRef::from_stored(i).as_stored().to_string();
        }
        if let Some(s) = slug {
            service.slug = Some(s.clone());
        }

        store.upsert(service)?;
        success(format!("Service '{}' updated", id));
    }
    Ok(())
}
