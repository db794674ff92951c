use std::{
    cell::RefCell,
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use image::RgbaImage;

use crate::{
    assets::{AssetLookup, decode},
    foundation::error::{GrimError, GrimResult},
    model::roles::RoleCatalog,
    text::engine::ParleyFont,
};

/// Asset lookups served from a local directory tree.
///
/// Role images are resolved through the catalog's image references relative to `root`, decoded
/// once and memoized. All fonts are size variants of one face.
pub struct DiskAssets {
    root: PathBuf,
    catalog: RoleCatalog,
    font_bytes: Vec<u8>,
    images: RefCell<HashMap<String, RgbaImage>>,
}

impl std::fmt::Debug for DiskAssets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskAssets")
            .field("root", &self.root)
            .field("roles", &self.catalog.len())
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

impl DiskAssets {
    /// Build from an already parsed catalog and raw font file bytes.
    pub fn new(root: impl Into<PathBuf>, catalog: RoleCatalog, font_bytes: Vec<u8>) -> Self {
        Self {
            root: root.into(),
            catalog,
            font_bytes,
            images: RefCell::new(HashMap::new()),
        }
    }

    /// Load the catalog JSON and the font file from disk.
    pub fn open(root: impl Into<PathBuf>, catalog_path: &Path, font_path: &Path) -> GrimResult<Self> {
        let catalog_json = std::fs::read_to_string(catalog_path)
            .with_context(|| format!("read role catalog '{}'", catalog_path.display()))?;
        let catalog = RoleCatalog::from_json(&catalog_json)?;
        let font_bytes = std::fs::read(font_path)
            .with_context(|| format!("read font '{}'", font_path.display()))?;
        Ok(Self::new(root, catalog, font_bytes))
    }

    /// Return root directory used when resolving image references.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Role catalog backing the name and image lookups.
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Read and decode an image file below the root.
    pub fn load_image(&self, reference: &str) -> GrimResult<RgbaImage> {
        let path = self.root.join(Path::new(&normalize_rel_path(reference)?));
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read image bytes from '{}'", path.display()))?;
        decode::decode_image(&bytes)
    }
}

impl AssetLookup for DiskAssets {
    type Font = ParleyFont;

    fn role_image(&self, role: &str) -> GrimResult<RgbaImage> {
        if let Some(img) = self.images.borrow().get(role) {
            return Ok(img.clone());
        }

        let info = self.catalog.get(role)?;
        let img = self
            .load_image(&info.image)
            .map_err(|e| GrimError::asset(format!("image for role '{role}': {e}")))?;
        tracing::debug!(role, width = img.width(), height = img.height(), "decoded role image");
        self.images
            .borrow_mut()
            .insert(role.to_string(), img.clone());
        Ok(img)
    }

    fn role_name(&self, role: &str) -> GrimResult<String> {
        Ok(self.catalog.get(role)?.name.clone())
    }

    fn text_font(&self, size: u32) -> GrimResult<ParleyFont> {
        ParleyFont::from_bytes(self.font_bytes.clone(), size as f32)
    }
}

/// Normalize and validate a root-relative image reference.
///
/// The script tool publishes references such as `/assets/icons/imp.webp`; a single leading `/` is
/// treated as the mirror root. The result uses `/` separators, drops `.` segments and rejects
/// parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> GrimResult<String> {
    let s = source.replace('\\', "/");
    let s = s.strip_prefix('/').unwrap_or(&s);
    if s.is_empty() {
        return Err(GrimError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(GrimError::validation("asset paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(GrimError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
