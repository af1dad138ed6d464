use serde::{Deserialize, Serialize};

/// One advertised offering of the catalog.
///
/// The serialized field names match the stored JSON shape used by the
/// previous generation of the catalog, so an existing `services.json` can be
/// read as-is (`titleAr`, `createdAt`, optional fields omitted when absent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "titleAr", skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(rename = "descriptionAr", skip_serializing_if = "Option::is_none")]
    pub description_ar: Option<String>,
    pub category: String,
    pub icon: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Service {
    /// Title in the requested display language, falling back to English
    /// when no Arabic title is present.
    pub fn display_title(&self, arabic: bool) -> &str {
        if arabic {
            if let Some(t) = &self.title_ar {
                if !t.is_empty() {
                    return t;
                }
            }
        }
        &self.title
    }

    /// Description in the requested display language, falling back to
    /// English.
    pub fn display_description(&self, arabic: bool) -> &str {
        if arabic {
            if let Some(d) = &self.description_ar {
                if !d.is_empty() {
                    return d;
                }
            }
        }
        &self.description
    }

    pub fn slug_or_empty(&self) -> &str {
        self.slug.as_deref().unwrap_or("")
    }
}
