use crate::error::RenderError;

/// Rasterize SVG text to PNG bytes on a white background, stretching the
/// document's own size to `width` x `height`.
#[cfg(feature = "raster")]
pub fn rasterize_svg(svg: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    use resvg::{tiny_skia, usvg};

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| RenderError::InvalidSvg(e.to_string()))?;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RenderError::EmptyCanvas { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let size = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    tracing::debug!("rasterized {}x{} PNG", width, height);
    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

#[cfg(not(feature = "raster"))]
pub fn rasterize_svg(_svg: &str, _width: u32, _height: u32) -> Result<Vec<u8>, RenderError> {
    Err(RenderError::RasterUnsupported)
}
