use crate::cli::commands::require_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AccessGate;
use crate::core::generate::{
    DescriptionGenerator, GeminiGenerator, GenerationRequest,
};
use crate::errors::{AppError, AppResult};
use crate::models::category::DEFAULT_CATEGORY;
use crate::store::{FileBackend, ServiceStore};
use crate::ui::messages::success;

/// Generate a description through the external provider, optionally writing
/// it into an existing record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        title,
        category,
        tone,
        length,
        save,
    } = cmd
    {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let gate = AccessGate::new(&backend);
        require_session(&gate)?;

        let request = GenerationRequest {
            title: title.clone(),
            category: category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            tone: *tone,
            length: *length,
        };

        let generator = GeminiGenerator::from_config(cfg)?;
        let text = generator.generate(&request)?;

        match save {
            Some(id) => {
                let store = ServiceStore::new(&backend);
                let mut service = store.get_by_id(id)?.ok_or_else(|| {
                    AppError::Validation(format!("no service with id '{}'", id))
                })?;
                service.description = text;
                store.upsert(service)?;
                success(format!("Generated description saved to service '{}'", id));
            }
            None => println!("{}", text),
        }
    }
    Ok(())
}
