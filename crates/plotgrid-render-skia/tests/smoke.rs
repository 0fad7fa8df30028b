// File: crates/plotgrid-render-skia/tests/smoke.rs
// Purpose: End-to-end renders of 2D and 3D scenes writing PNGs.

use plotgrid_core::{Axis, Grid, GridOptions, LegendLocation, Line, Mesh, Scatter, Scene, Surface};
use plotgrid_render_skia::{render_to_png, render_to_png_bytes, RenderOptions, SkiaRenderer};

fn planar_scene() -> Scene {
    let mut grid = Grid::planar(
        Axis::linear(0.0, 4.0).unwrap().with_label("X"),
        Axis::linear(0.0, 4.0).unwrap().with_label("Y"),
    );
    grid.add_actor(Line::new(vec![0.0, 1.0, 2.0, 3.0, 4.0], vec![0.0, 2.0, 1.0, 3.5, 2.5]).unwrap().with_label("line"))
        .unwrap();
    grid.add_actor(Scatter::new(vec![0.5, 1.5, 2.5], vec![1.0, 3.0, 2.0]).unwrap().with_label("points"))
        .unwrap();
    Scene::new(grid).with_auto_legend(LegendLocation::UpperLeft)
}

fn spatial_scene() -> Scene {
    let xs = plotgrid_core::linspace(-2.0, 2.0, 12);
    let ys = plotgrid_core::linspace(-2.0, 2.0, 12);
    let mesh = Mesh::meshgrid(&xs, &ys, |x, y| (-(x * x + y * y)).exp());
    let mut grid = Grid::spatial(
        Axis::linear(-2.0, 2.0).unwrap(),
        Axis::linear(-2.0, 2.0).unwrap(),
        Axis::linear(0.0, 1.0).unwrap(),
    )
    .with_options(GridOptions { show_shadows: true, show_perpendiculars: true, ..GridOptions::default() });
    grid.add_actor(Surface::from_mesh(mesh).with_colormap("plasma").with_label("bump")).unwrap();
    grid.add_actor(Scatter::new_3d(vec![-1.0, 0.0, 1.0], vec![0.0, 1.0, -1.0], vec![0.2, 0.9, 0.5]).unwrap())
        .unwrap();
    Scene::new(grid).with_auto_legend(LegendLocation::Best)
}

#[test]
fn render_smoke_png() {
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&planar_scene(), &RenderOptions::default(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&planar_scene(), &RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_spatial_surface() {
    let opts = RenderOptions { width: 480, height: 360, ..RenderOptions::default() };
    let bytes = render_to_png_bytes(&spatial_scene(), &opts).expect("render 3d");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (480, 360));
}

#[test]
fn renderer_holds_png_after_present() {
    let mut renderer = SkiaRenderer::new(RenderOptions::default()).unwrap();
    assert!(renderer.png().is_none());
    planar_scene().render(&mut renderer).unwrap();
    assert!(renderer.png().is_some_and(|b| b.starts_with(&[137, 80, 78, 71])));
}
