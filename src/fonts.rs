//! Font resolution – builds the catalog of selectable typefaces.
//!
//! The catalog always contains the three PDF builtin families; a custom
//! font folder can add TTF/OTF files, each validated with `ttf-parser`
//! before admission and registered under its file stem. A well-known
//! override file (`ArialNarrow.ttf` sitting alongside the folder) gets a
//! fixed display name. Per-file failures are logged and skipped, never
//! fatal.
//!
//! Resolution is an explicit init step: build the catalog once at
//! startup, then treat it as read-only for every request.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use printpdf::BuiltinFont;

/// The three fixed builtin identifiers, always selectable.
pub const BUILTIN_FAMILIES: [(&str, BuiltinFont); 3] = [
    ("Helvetica", BuiltinFont::Helvetica),
    ("Times-Roman", BuiltinFont::TimesRoman),
    ("Courier", BuiltinFont::Courier),
];

/// Family substituted when a selected font is missing or unusable.
pub const FALLBACK_FAMILY: &str = "Helvetica";

/// Override typeface expected alongside (not inside) the font folder.
pub const OVERRIDE_FILE: &str = "ArialNarrow.ttf";
pub const OVERRIDE_NAME: &str = "ArialNarrow";

/// Where a display name resolves to at draw time.
#[derive(Clone)]
pub enum FontSource {
    Builtin(BuiltinFont),
    /// Raw TTF/OTF bytes, already validated by `ttf-parser`.
    Custom(Vec<u8>),
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::Builtin(font) => write!(f, "Builtin({font:?})"),
            FontSource::Custom(bytes) => write!(f, "Custom({} bytes)", bytes.len()),
        }
    }
}

/// Display name → renderer-usable font source. BTreeMap keeps `names()`
/// in a stable order for the selection dropdown.
pub struct FontCatalog {
    fonts: BTreeMap<String, FontSource>,
}

impl FontCatalog {
    /// Catalog holding only the three builtin families.
    pub fn builtin() -> Self {
        let mut fonts = BTreeMap::new();
        for (name, font) in BUILTIN_FAMILIES {
            fonts.insert(name.to_string(), FontSource::Builtin(font));
        }
        Self { fonts }
    }

    /// Builtins plus every usable typeface file under `search_folder`,
    /// plus the override file next to it if present. A missing or
    /// unreadable folder leaves just the builtins.
    pub fn resolve(search_folder: &Path) -> Self {
        let mut catalog = Self::builtin();
        catalog.scan_folder(search_folder);

        if let Some(parent) = search_folder.parent() {
            let override_path = parent.join(OVERRIDE_FILE);
            if override_path.is_file() {
                catalog.register_file(OVERRIDE_NAME, &override_path);
            }
        }
        catalog
    }

    fn scan_folder(&mut self, folder: &Path) {
        let entries = match fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!(
                    "font folder '{}' not readable ({err}); using builtins only",
                    folder.display()
                );
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let is_typeface = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
                .unwrap_or(false);
            if !is_typeface {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                self.register_file(stem, &path);
            }
        }
    }

    /// Read, validate, and admit one typeface file. Failures are logged
    /// and the entry is simply omitted.
    fn register_file(&mut self, name: &str, path: &Path) {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("skipping font '{}': {err}", path.display());
                return;
            }
        };
        if let Err(err) = ttf_parser::Face::parse(&bytes, 0) {
            log::warn!("skipping font '{}': parse error: {err}", path.display());
            return;
        }
        log::info!("registered font '{name}' from '{}'", path.display());
        self.fonts.insert(name.to_string(), FontSource::Custom(bytes));
    }

    /// Register a font programmatically, e.g. from bytes already in
    /// memory. An existing entry with the same name is replaced.
    pub fn insert(&mut self, name: impl Into<String>, source: FontSource) {
        self.fonts.insert(name.into(), source);
    }

    pub fn get(&self, name: &str) -> Option<&FontSource> {
        self.fonts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// Selectable display names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.fonts.keys().cloned().collect()
    }
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
