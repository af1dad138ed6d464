/// Known preset icon identifiers, mirroring the symbol set the catalog UI
/// ships with.
pub const PRESET_ICONS: [&str; 18] = [
    "Code", "Server", "Cloud", "Shield", "Smartphone", "Zap", "Globe", "Cpu", "Database",
    "Layout", "Terminal", "Wifi", "Box", "Layers", "Monitor", "Command", "Bot", "Brain",
];

/// Fallback preset for unknown bare names.
pub const FALLBACK_ICON: &str = "Box";

/// Typed view over the stored `icon` string.
///
/// A stored value is either a preset symbol name from [`PRESET_ICONS`] or a
/// custom image source (data URI or URL). The one classification rule lives
/// here: a value containing `:` or `/` is an image source, everything else
/// resolves through the preset registry with [`FALLBACK_ICON`] as default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconRef {
    Preset(&'static str),
    CustomImage(String),
}

impl IconRef {
    /// Resolve the stored string form into a typed reference.
    pub fn from_stored(value: &str) -> Self {
        if value.contains(':') || value.contains('/') {
            return IconRef::CustomImage(value.to_string());
        }
        match PRESET_ICONS.iter().copied().find(|name| *name == value) {
            Some(name) => IconRef::Preset(name),
            None => IconRef::Preset(FALLBACK_ICON),
        }
    }

    /// Convert back to the stored string form.
    pub fn as_stored(&self) -> &str {
        match self {
            IconRef::Preset(name) => name,
            IconRef::CustomImage(src) => src,
        }
    }

    /// Short label for list output. Custom images render as a marker rather
    /// than the full source.
    pub fn label(&self) -> &str {
        match self {
            IconRef::Preset(name) => name,
            IconRef::CustomImage(_) => "[image]",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, IconRef::CustomImage(_))
    }
}
