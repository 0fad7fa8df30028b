// File: crates/plotgrid-render-skia/src/lib.rs
// Summary: Skia CPU raster backend for plotgrid scenes; PNG output to bytes or file.

pub mod colormap;
pub mod projection;
pub mod renderer;
pub mod text;
pub mod theme;

use std::path::Path;

use anyhow::{anyhow, Result};
use plotgrid_core::Scene;

pub use colormap::Colormap;
pub use projection::{PlotRect, Projection};
pub use renderer::{Insets, RenderOptions, SkiaRenderer, HEIGHT, WIDTH};
pub use theme::Theme;

/// Render `scene` and return the encoded PNG.
pub fn render_to_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut opts = opts.clone();
    opts.output = None;
    let mut renderer = SkiaRenderer::new(opts)?;
    scene.render(&mut renderer)?;
    renderer.into_png().ok_or_else(|| anyhow!("scene rendered without present"))
}

/// Render `scene` to a PNG file at `path`, creating parent directories.
pub fn render_to_png(scene: &Scene, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    let mut opts = opts.clone();
    opts.output = Some(path.as_ref().to_path_buf());
    let mut renderer = SkiaRenderer::new(opts)?;
    scene.render(&mut renderer)
}

/// Render `scene` and return unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
pub fn render_to_rgba8(scene: &Scene, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut opts = opts.clone();
    opts.output = None;
    let mut renderer = SkiaRenderer::new(opts)?;
    scene.render(&mut renderer)?;
    renderer.read_rgba8()
}
