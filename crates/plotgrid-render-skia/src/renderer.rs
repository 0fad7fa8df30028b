// File: crates/plotgrid-render-skia/src/renderer.rs
// Summary: Skia CPU raster implementation of the plotgrid Renderer contract, encoding PNG on present.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use plotgrid_core::{
    AxisDrawSpec, AxisFrame, ColorStyle, Coords, DrawDescriptor, DrawKind, LegendEntry, LegendLocation, MarkerKind,
    Mesh, Renderer, Rgba,
};
use skia_safe as skia;
use tracing::{debug, trace};

use crate::colormap::Colormap;
use crate::projection::{PlotRect, Projection};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const LEGEND_FONT: f32 = 13.0;
const LEGEND_ROW: f32 = 20.0;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick, axis and legend text. Off gives platform-independent pixels.
    pub draw_labels: bool,
    /// Where `present` writes the PNG, if anywhere.
    pub output: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            output: None,
        }
    }
}

impl RenderOptions {
    fn plot_rect(&self) -> PlotRect {
        PlotRect::from_ltrb(
            self.insets.left as f32,
            self.insets.top as f32,
            (self.width - self.insets.right as i32) as f32,
            (self.height - self.insets.bottom as i32) as f32,
        )
    }
}

fn to_skia(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn solid(style: &ColorStyle) -> Rgba {
    match style {
        ColorStyle::Solid(c) => *c,
        ColorStyle::Colormap(name) => Colormap::resolve(name).sample(0.5),
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width.max(0.5));
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

/// Renders one scene onto a raster surface. Create one per scene.
pub struct SkiaRenderer {
    opts: RenderOptions,
    surface: skia::Surface,
    text: TextShaper,
    frames: [Option<AxisFrame>; 3],
    projection: Projection,
    png: Option<Vec<u8>>,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        surface.canvas().clear(opts.theme.background);
        let projection = Projection::new(opts.plot_rect(), 2);
        Ok(Self { opts, surface, text: TextShaper::new(), frames: [None, None, None], projection, png: None })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Encoded frame from the last `present`.
    pub fn png(&self) -> Option<&[u8]> {
        self.png.as_deref()
    }

    pub fn into_png(self) -> Option<Vec<u8>> {
        self.png
    }

    /// Current surface contents as unpremultiplied RGBA8: (pixels, width, height, stride).
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(anyhow!("failed to read surface pixels"));
        }
        Ok((px, w as u32, h as u32, stride))
    }

    fn unit(&self, axis: usize, value: f64) -> f64 {
        self.frames[axis].as_ref().map_or(0.0, |f| f.normalize(value))
    }

    fn project_coords(&self, coords: &Coords<'_>) -> Vec<Option<(f32, f32)>> {
        let depth = matches!(self.projection, Projection::Oblique(_));
        let floor = if depth { self.unit(2, 0.0) } else { 0.0 };
        let point = |nx: f64, ny: f64, nz: f64| {
            let (px, py) = self.projection.project(nx, ny, nz);
            (px.is_finite() && py.is_finite()).then_some((px, py))
        };
        match coords {
            Coords::Planar { x, y } => x
                .iter()
                .zip(y.iter())
                .map(|(&x, &y)| point(self.unit(0, x), self.unit(1, y), floor))
                .collect(),
            Coords::Spatial { x, y, z } => x
                .iter()
                .zip(y.iter())
                .zip(z.iter())
                .map(|((&x, &y), &z)| {
                    let nz = if depth { self.unit(2, z) } else { 0.0 };
                    point(self.unit(0, x), self.unit(1, y), nz)
                })
                .collect(),
            Coords::Mesh(m) => m
                .x()
                .iter()
                .flatten()
                .zip(m.y().iter().flatten())
                .zip(m.z().iter().flatten())
                .map(|((&x, &y), &z)| point(self.unit(0, x), self.unit(1, y), self.unit(2, z)))
                .collect(),
        }
    }

    fn draw_mesh(&mut self, mesh: &Mesh, projected: &[Option<(f32, f32)>], cmap: Colormap) {
        let (rows, cols) = mesh.shape();
        if rows < 2 || cols < 2 {
            return;
        }
        let (zmin, zmax) = mesh
            .z()
            .iter()
            .flatten()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let zspan = if zmax > zmin { zmax - zmin } else { 1.0 };

        let mut quads = Vec::with_capacity((rows - 1) * (cols - 1));
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let idx = [i * cols + j, i * cols + j + 1, (i + 1) * cols + j + 1, (i + 1) * cols + j];
                let corners: Option<Vec<(f32, f32)>> = idx.iter().map(|&k| projected[k]).collect();
                let Some(corners) = corners else { continue };
                let z = idx.iter().map(|&k| mesh.z()[k / cols][k % cols]).sum::<f64>() / 4.0;
                let depth = idx.iter().map(|&k| self.unit(1, mesh.y()[k / cols][k % cols])).sum::<f64>();
                quads.push((depth, z, corners));
            }
        }
        // far quads first
        quads.sort_by(|a, b| b.0.total_cmp(&a.0));

        let canvas = self.surface.canvas();
        for (_, z, corners) in quads {
            let color = to_skia(cmap.sample((z - zmin) / zspan));
            let mut path = skia::Path::new();
            path.move_to(corners[0]);
            for &c in &corners[1..] {
                path.line_to(c);
            }
            path.close();
            canvas.draw_path(&path, &fill_paint(color));
        }
    }

    fn legend_origin(&self, location: LegendLocation, w: f32, h: f32) -> (f32, f32) {
        let r = self.projection.rect();
        let margin = 10.0;
        let left = r.left + margin;
        let hcenter = (r.left + r.right - w) * 0.5;
        let right = r.right - w - margin;
        let top = r.top + margin;
        let vcenter = (r.top + r.bottom - h) * 0.5;
        let bottom = r.bottom - h - margin;
        match location {
            LegendLocation::Best | LegendLocation::UpperRight => (right, top),
            LegendLocation::UpperLeft => (left, top),
            LegendLocation::UpperCenter => (hcenter, top),
            LegendLocation::LowerLeft => (left, bottom),
            LegendLocation::LowerRight => (right, bottom),
            LegendLocation::LowerCenter => (hcenter, bottom),
            LegendLocation::Right | LegendLocation::CenterRight => (right, vcenter),
            LegendLocation::CenterLeft => (left, vcenter),
            LegendLocation::Center => (hcenter, vcenter),
        }
    }
}

impl Renderer for SkiaRenderer {
    fn draw_axis(&mut self, axis: &AxisDrawSpec<'_>) -> Result<()> {
        let index = axis.index.min(2);
        if index == 0 {
            self.projection = Projection::new(self.opts.plot_rect(), axis.dimension);
        }
        let frame = axis.frame();
        let proj = self.projection;
        let rect = proj.rect();
        let scale = rect.min_side();
        let style = axis.style;
        let (dx, dy) = proj.tick_direction(index);
        let tick_len = (style.tick_length * scale).max(3.0);
        let positions: Vec<f64> = axis.ticks.iter().map(|t| frame.normalize_transformed(t.position.along_axis())).collect();
        trace!(index, ticks = positions.len(), "skia axis");

        let canvas = self.surface.canvas();

        // grid lines across the plot (or floor, in 3D) at each tick
        let grid = stroke_paint(self.opts.theme.grid, 1.0);
        for &t in &positions {
            let (a, b) = match index {
                0 => (proj.project(t, 0.0, 0.0), proj.project(t, 1.0, 0.0)),
                1 => (proj.project(0.0, t, 0.0), proj.project(1.0, t, 0.0)),
                // back wall
                _ => (proj.project(0.0, 1.0, t), proj.project(1.0, 1.0, t)),
            };
            canvas.draw_line(a, b, &grid);
        }

        let color = to_skia(style.color);
        canvas.draw_line(proj.axis_point(index, 0.0), proj.axis_point(index, 1.0), &stroke_paint(color, style.line_width));

        let tick_paint = stroke_paint(color, (style.tick_width * scale).max(1.0));
        for &t in &positions {
            let (x, y) = proj.axis_point(index, t);
            canvas.draw_line((x, y), (x + dx * tick_len, y + dy * tick_len), &tick_paint);
        }

        if self.opts.draw_labels {
            let anchor = if dx < 0.0 { Anchor::End } else if dx > 0.0 { Anchor::Start } else { Anchor::Middle };
            let text_color = self.opts.theme.text;
            for (tick, &t) in axis.ticks.iter().zip(&positions) {
                let (x, y) = proj.axis_point(index, t);
                let gap = tick_len + 4.0;
                let baseline = y + dy * (gap + TICK_FONT) + if dy == 0.0 { TICK_FONT * 0.35 } else { 0.0 };
                self.text.draw(canvas, &tick.label, x + dx * gap, baseline, TICK_FONT, text_color, anchor, true);
            }
            if let Some(label) = &style.label {
                let (x, y) = proj.axis_point(index, 0.5);
                let off = style.label_offset * scale + tick_len + TICK_FONT + 8.0;
                let (lx, ly) = if dx < 0.0 {
                    (x - off - 16.0, y)
                } else {
                    (x + dx * off, y + dy * (off + LABEL_FONT))
                };
                self.text.draw(canvas, label, lx, ly, LABEL_FONT, text_color, anchor, false);
            }
        }

        self.frames[index] = Some(frame);
        Ok(())
    }

    fn draw_actor(&mut self, descriptor: &DrawDescriptor<'_>) -> Result<()> {
        let projected = self.project_coords(&descriptor.coords);
        trace!(kind = ?descriptor.kind, points = projected.len(), "skia actor");

        if let (DrawKind::Mesh, Coords::Mesh(mesh)) = (descriptor.kind, &descriptor.coords) {
            let cmap = match &descriptor.style {
                ColorStyle::Colormap(name) => Colormap::resolve(name),
                ColorStyle::Solid(_) => Colormap::VIRIDIS,
            };
            self.draw_mesh(mesh, &projected, cmap);
            return Ok(());
        }

        let color = to_skia(solid(&descriptor.style));
        let canvas = self.surface.canvas();
        match descriptor.kind {
            DrawKind::Point => {
                let radius = descriptor.weight.max(0.5).sqrt() * 1.5;
                let paint = fill_paint(color);
                for (x, y) in projected.iter().flatten() {
                    canvas.draw_circle((*x, *y), radius, &paint);
                }
            }
            DrawKind::Polyline | DrawKind::Mesh => {
                // non-finite points break the line
                let mut path = skia::Path::new();
                let mut pen_down = false;
                for p in &projected {
                    match (p, pen_down) {
                        (Some(pt), false) => {
                            path.move_to(*pt);
                            pen_down = true;
                        }
                        (Some(pt), true) => {
                            path.line_to(*pt);
                        }
                        (None, _) => pen_down = false,
                    }
                }
                canvas.draw_path(&path, &stroke_paint(color, descriptor.weight));
            }
            DrawKind::Segments => {
                let paint = stroke_paint(color, descriptor.weight);
                for pair in projected.chunks_exact(2) {
                    if let (Some(a), Some(b)) = (pair[0], pair[1]) {
                        canvas.draw_line(a, b, &paint);
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_legend(&mut self, entries: &[LegendEntry], location: LegendLocation) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let text_w = if self.opts.draw_labels {
            entries.iter().map(|e| self.text.measure_width(&e.label, LEGEND_FONT, false)).fold(0.0f32, f32::max)
        } else {
            0.0
        };
        let w = 12.0 + 24.0 + 8.0 + text_w + 12.0;
        let h = 8.0 + entries.len() as f32 * LEGEND_ROW + 4.0;
        let (x0, y0) = self.legend_origin(location, w, h);
        trace!(entries = entries.len(), %location, "skia legend");

        let theme = self.opts.theme;
        let draw_labels = self.opts.draw_labels;
        let canvas = self.surface.canvas();
        let frame = skia::Rect::from_xywh(x0, y0, w, h);
        canvas.draw_rect(frame, &fill_paint(theme.legend_fill));
        canvas.draw_rect(frame, &stroke_paint(theme.legend_frame, 1.0));

        for (i, entry) in entries.iter().enumerate() {
            let cy = y0 + 8.0 + LEGEND_ROW * (i as f32 + 0.5);
            let color = to_skia(solid(&entry.style));
            match entry.marker {
                MarkerKind::Line => {
                    canvas.draw_line((x0 + 12.0, cy), (x0 + 36.0, cy), &stroke_paint(color, entry.weight.max(1.0)));
                }
                MarkerKind::Point => {
                    canvas.draw_circle((x0 + 24.0, cy), 4.0, &fill_paint(color));
                }
            }
            if draw_labels {
                self.text.draw(canvas, &entry.label, x0 + 44.0, cy + LEGEND_FONT * 0.35, LEGEND_FONT, theme.text, Anchor::Start, false);
            }
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        let bytes = data.as_bytes().to_vec();

        if let Some(path) = &self.opts.output {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
            debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        }
        self.png = Some(bytes);
        Ok(())
    }
}
