// File: crates/plotgrid-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, background, and a few pixels from actors.

use plotgrid_core::{Axis, Grid, Line, Rgba, Scene};
use plotgrid_render_skia::{render_to_rgba8, RenderOptions, Theme};

fn diagonal() -> Scene {
    let mut grid = Grid::planar(Axis::linear(0.0, 4.0).unwrap(), Axis::linear(0.0, 4.0).unwrap());
    grid.add_actor(Line::new(vec![0.0, 4.0], vec![0.0, 4.0]).unwrap().with_color(Rgba::RED).with_width(4.0))
        .unwrap();
    Scene::new(grid)
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let (px, w, h, stride) = render_to_rgba8(&diagonal(), &opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left corner lies in the margin: opaque white background
    assert_eq!(pixel(&px, stride, 2, 2), [255, 255, 255, 255]);

    // middle of the plot rectangle sits on the diagonal
    let ins = opts.insets;
    let cx = (ins.left as usize + (w - ins.right) as usize) / 2;
    let cy = (ins.top as usize + (h - ins.bottom) as usize) / 2;
    let [r, g, b, _] = pixel(&px, stride, cx, cy);
    assert!(r > 200 && g < 80 && b < 80, "expected red at plot center, got {:?}", (r, g, b));
}

#[test]
fn dark_theme_background() {
    let opts = RenderOptions { draw_labels: false, theme: Theme::dark(), ..RenderOptions::default() };
    let (px, _, _, stride) = render_to_rgba8(&diagonal(), &opts).expect("rgba render");
    assert_eq!(pixel(&px, stride, 2, 2), [18, 18, 20, 255]);
}
