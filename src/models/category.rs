/// The six categories the default catalog ships with. The `category` field
/// on a record stays a free string so user-created categories pass through
/// unchanged; this enum only names the seeded set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Development,
    Cloud,
    Security,
    Data,
    Consulting,
    Design,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Development => "Development",
            ServiceCategory::Cloud => "Cloud & Infrastructure",
            ServiceCategory::Security => "Security",
            ServiceCategory::Data => "Data & Analytics",
            ServiceCategory::Consulting => "Consulting",
            ServiceCategory::Design => "Design & UX",
        }
    }

    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Development,
        ServiceCategory::Cloud,
        ServiceCategory::Security,
        ServiceCategory::Data,
        ServiceCategory::Consulting,
        ServiceCategory::Design,
    ];
}

/// Category applied when a record is saved with an empty category.
pub const DEFAULT_CATEGORY: &str = "General";
