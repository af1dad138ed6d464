use crate::core::catalog::SortKey;
use crate::core::generate::{Length, Tone};
use clap::{Parser, Subcommand};

/// Command-line interface definition for svcatalog
/// CLI application to manage a bilingual services catalog with local JSON storage
#[derive(Parser)]
#[command(
    name = "svcatalog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage a bilingual (English/Arabic) services catalog with local JSON storage",
    long_about = None
)]
pub struct Cli {
    /// Override the catalog data directory (useful for tests or multiple catalogs)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the catalog and the default credentials
    Init,

    /// Inspect the configuration or set display preferences
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,

        #[arg(long = "set-theme", help = "Set the UI theme preference (light or dark)")]
        set_theme: Option<String>,

        #[arg(long = "set-language", help = "Set the display language (en or ar)")]
        set_language: Option<String>,
    },

    /// Management list: filter, sort and inspect the full catalog
    List {
        #[arg(long, short, help = "Free-text search over title and description")]
        search: Option<String>,

        #[arg(
            long = "category",
            help = "Restrict to a category (repeatable; none = all categories)"
        )]
        category: Vec<String>,

        #[arg(long, value_enum, help = "Sort by title, category or date")]
        sort: Option<SortKey>,

        #[arg(long, help = "Sort descending (requires --sort)", requires = "sort")]
        desc: bool,

        #[arg(long = "ar", help = "Show Arabic titles where available")]
        arabic: bool,
    },

    /// Public catalog view: one active category, bilingual search
    Browse {
        #[arg(long, short, help = "Free-text search, matches Arabic fields too")]
        search: Option<String>,

        #[arg(long = "category", help = "Show a single category (omit for all)")]
        category: Option<String>,
    },

    /// Show one service by its slug
    Show {
        /// URL-safe identifier of the service
        slug: String,
    },

    /// Create a new service (requires login)
    Add {
        #[arg(long, help = "Service title (required, non-empty)")]
        title: String,

        #[arg(long, help = "Service description (required, non-empty)")]
        description: String,

        #[arg(long = "title-ar", help = "Arabic title")]
        title_ar: Option<String>,

        #[arg(long = "description-ar", help = "Arabic description")]
        description_ar: Option<String>,

        #[arg(long, help = "Category (free-form; empty becomes 'General')")]
        category: Option<String>,

        #[arg(
            long,
            help = "Icon: a preset name (Code, Cloud, Shield, ...) or an image URL/data URI"
        )]
        icon: Option<String>,

        #[arg(long, help = "Explicit slug (derived from the title when omitted)")]
        slug: Option<String>,
    },

    /// Edit an existing service by id; omitted flags keep current values (requires login)
    Edit {
        /// Identifier of the service to edit
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long = "title-ar")]
        title_ar: Option<String>,

        #[arg(long = "description-ar")]
        description_ar: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        slug: Option<String>,
    },

    /// Delete one or more services by id (requires login)
    Del {
        /// Identifiers of the services to delete
        #[arg(required = true)]
        ids: Vec<String>,

        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Restore the default catalog, discarding all changes (administrator only)
    Reset {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Open a session with the administrator or editor password
    Login {
        /// Password to check against both role credentials
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show the current session state
    Whoami,

    /// Change the administrator password (administrator only)
    Passwd {
        /// New password (minimum 6 characters)
        new_password: String,
    },

    /// Generate a service description via the text-generation provider
    Generate {
        #[arg(long, help = "Service title to describe")]
        title: String,

        #[arg(long, help = "Service category for context")]
        category: Option<String>,

        #[arg(long, value_enum, default_value = "professional")]
        tone: Tone,

        #[arg(long, value_enum, default_value = "medium")]
        length: Length,

        #[arg(long, help = "Write the generated text into this record's description")]
        save: Option<String>,
    },

    /// Watch the catalog for writes from other processes
    Watch {
        #[arg(
            long,
            default_value = "2",
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Poll interval in seconds (at least 1)"
        )]
        interval: u64,
    },
}
