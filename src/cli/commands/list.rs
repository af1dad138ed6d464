use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::{self, SortDirection};
use crate::errors::AppResult;
use crate::models::icon::IconRef;
use crate::store::{FileBackend, ServiceStore};
use crate::utils::table::{Column, Table};
use crate::utils::text::{format_created_at, truncate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        category,
        sort,
        desc,
        arabic,
    } = cmd
    {
        let backend = FileBackend::new(&cfg.data_dir)?;
        let store = ServiceStore::new(&backend);
        let services = store.list()?;

        let query = search.as_deref().unwrap_or("");
        let mut filtered = catalog::admin_filter(&services, query, category);

        if let Some(key) = sort {
            let direction = if *desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            catalog::sort_services(&mut filtered, *key, direction);
        }

        if filtered.is_empty() {
            println!("No services match.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "ID".into(),
                width: 12,
            },
            Column {
                header: "TITLE".into(),
                width: 34,
            },
            Column {
                header: "CATEGORY".into(),
                width: 24,
            },
            Column {
                header: "ICON".into(),
                width: 10,
            },
            Column {
                header: "SLUG".into(),
                width: 32,
            },
            Column {
                header: "CREATED".into(),
                width: 10,
            },
        ]);

        for s in &filtered {
            table.add_row(vec![
                truncate(&s.id, 12),
                truncate(s.display_title(*arabic), 34),
                truncate(&s.category, 24),
                IconRef::from_stored(&s.icon).label().to_string(),
                truncate(s.slug_or_empty(), 32),
                format_created_at(s.created_at),
            ]);
        }

        print!("{}", table.render());
        println!("{} service(s)", filtered.len());
    }
    Ok(())
}
