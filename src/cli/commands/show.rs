use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::icon::IconRef;
use crate::store::{FileBackend, KeyValue, ServiceStore, keys};
use crate::ui::messages::header;
use crate::utils::text::{format_created_at, wrap_body};

const BODY_WIDTH: usize = 72;

/// Detail view for one service, looked up by slug. On colliding slugs the
/// first record in storage order wins.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { slug } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let store = ServiceStore::new(&backend);

        let service = store
            .get_by_slug(slug)?
            .ok_or_else(|| AppError::ServiceNotFound(slug.clone()))?;

        let arabic = backend.get(keys::LANGUAGE).as_deref() == Some("ar");

        header(service.display_title(arabic));
        println!("Id:       {}", service.id);
        println!("Category: {}", service.category);
        println!("Icon:     {}", IconRef::from_stored(&service.icon).label());
        println!("Slug:     {}", service.slug_or_empty());
        println!("Created:  {}", format_created_at(service.created_at));
        println!();
        println!("{}", wrap_body(service.display_description(arabic), BODY_WIDTH));

        if !arabic {
            if let Some(ar) = &service.title_ar {
                if !ar.is_empty() {
                    println!();
                    println!("{}", ar);
                    if let Some(d) = &service.description_ar {
                        println!("{}", wrap_body(d, BODY_WIDTH));
                    }
                }
            }
        }
    }
    Ok(())
}
