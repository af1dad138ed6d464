use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog;
use crate::errors::AppResult;
use crate::store::{FileBackend, KeyValue, ServiceStore, keys};
use crate::ui::messages::header;
use crate::utils::colors::{RESET, category_color};
use crate::utils::text::wrap_body;

const BODY_WIDTH: usize = 72;

/// Public catalog view: card-style output, single active category or all,
/// bilingual search. Honors the stored display language preference.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Browse { search, category } = cmd {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let store = ServiceStore::new(&backend);
        let services = store.list()?;

        let arabic = backend.get(keys::LANGUAGE).as_deref() == Some("ar");

        let query = search.as_deref().unwrap_or("");
        let filtered = catalog::public_filter(&services, query, category.as_deref());

        let categories = catalog::distinct_categories(&services);
        println!(
            "Categories: All, {}",
            categories.join(", ")
        );
        println!();

        if filtered.is_empty() {
            println!("No services match.");
            return Ok(());
        }

        for s in &filtered {
            header(s.display_title(arabic));
            println!(
                "{}{}{}  /{}",
                category_color(&s.category),
                s.category,
                RESET,
                s.slug_or_empty()
            );
            println!("{}", wrap_body(s.display_description(arabic), BODY_WIDTH));
            println!();
        }
        println!("{} service(s)", filtered.len());
    }
    Ok(())
}
