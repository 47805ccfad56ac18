//! Output file helpers shared by the commands

use std::path::Path;

use anyhow::{Context, Result};
use hexcards_core::render::Document;
use hexcards_core::{Renderer, SvgRenderer};

/// Write bytes to `path`, creating parent directories as needed
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Rasterize an SVG document and write the PNG
pub fn write_png(document: &Document, width: u32, height: u32, path: &Path) -> Result<()> {
    let png = SvgRenderer
        .rasterize(document, width, height)
        .with_context(|| format!("Failed to rasterize {}", path.display()))?;
    write_file(path, &png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        write_file(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }
}
