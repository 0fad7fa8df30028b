// File: crates/plotgrid-core/tests/scene.rs
// Purpose: End-to-end composition of grids, actors and legends against the recording renderer.

use plotgrid_core::{
    Actor, ColorStyle, DimensionError, DrawCall, DrawKind, Grid, Legend, LegendLocation, Line, MarkerKind,
    Recorder, Rgba, Scatter, Scene, ShapeError,
};
use plotgrid_core::{Axis, GridOptions, Mesh, Surface};

fn sample_xy(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let x = plotgrid_core::linspace(0.0, 10.0, n);
    let y = x.iter().map(|v| v.sin()).collect();
    let z = x.iter().map(|v| v.cos() * (-v / 10.0).exp()).collect();
    (x, y, z)
}

fn planar_grid() -> Grid {
    Grid::planar(
        Axis::linear(0.0, 10.0).unwrap().with_label("x"),
        Axis::linear(-1.0, 1.0).unwrap().with_label("y"),
    )
}

#[test]
fn mismatched_lengths_raise_shape_error() {
    let err = Scatter::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]).unwrap_err();
    assert_eq!(err, ShapeError::LengthMismatch { expected_field: "x", expected: 3, field: "y", actual: 2 });
    assert!(Line::new(vec![0.0], vec![]).is_err());
}

#[test]
fn depth_actor_rejected_by_planar_grid() {
    let (x, y, z) = sample_xy(10);
    let mut grid = planar_grid();
    let err = grid.add_actor(Scatter::new_3d(x, y, z).unwrap()).unwrap_err();
    assert_eq!(err, DimensionError::ActorNeedsDepth { actor_dims: 3, grid_axes: 2 });
    assert!(grid.actors().is_empty());
}

#[test]
fn legend_skips_unlabeled_actors_in_order() {
    let (x, y, z) = sample_xy(8);
    let a: Actor = Scatter::new(x.clone(), y.clone()).unwrap().with_label("first").into();
    let b: Actor = Line::new(x.clone(), z.clone()).unwrap().into();
    let c: Actor = Line::new(x, z).unwrap().with_color(Rgba::BLUE).with_label("third").into();
    let legend = Legend::new([&a, &b, &c], LegendLocation::UpperRight);
    let labels: Vec<_> = legend.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["first", "third"]);
    assert_eq!(legend.entries()[0].marker, MarkerKind::Point);
    assert_eq!(legend.entries()[1].style, ColorStyle::Solid(Rgba::BLUE));
}

#[test]
fn scene_renders_axes_actors_legend_then_present() {
    let (x, y, z) = sample_xy(100);
    let mut grid = planar_grid();
    grid.add_actor(Scatter::new(x.clone(), y).unwrap().with_color(Rgba::RED).with_size(5.0).with_label("data")).unwrap();
    grid.add_actor(Line::new(x, z).unwrap().with_color(Rgba::BLUE).with_width(2.0).with_label("fit")).unwrap();
    let scene = Scene::new(grid).with_auto_legend(LegendLocation::Best);

    let mut rec = Recorder::new();
    scene.render(&mut rec).unwrap();

    let tags: Vec<&str> = rec
        .calls
        .iter()
        .map(|c| match c {
            DrawCall::Axis(_) => "axis",
            DrawCall::Actor(_) => "actor",
            DrawCall::Legend { .. } => "legend",
            DrawCall::Present => "present",
        })
        .collect();
    assert_eq!(tags, ["axis", "axis", "actor", "actor", "legend", "present"]);
    assert_eq!(rec.presents(), 1);

    let kinds: Vec<_> = rec.actors().map(|d| d.kind).collect();
    assert_eq!(kinds, [DrawKind::Point, DrawKind::Polyline]);

    let axes: Vec<_> = rec.axes().collect();
    assert_eq!(axes[0].index, 0);
    assert_eq!(axes[1].dimension, 2);
    assert_eq!(axes[1].ticks.len(), 5);
    assert_eq!(axes[1].ticks[2].label, "0.00");
}

#[test]
fn grid_ticks_follow_axis_order() {
    let grid = Grid::spatial(
        Axis::linear(0.0, 4.0).unwrap(),
        Axis::log(1.0, 1.0e4, 10.0).unwrap(),
        Axis::hyperbolic(1.0, 5.0).unwrap(),
    );
    let ticks = grid.ticks();
    assert_eq!(ticks.len(), 3);
    assert_eq!(ticks[0][1].label, "1.00");
    assert_eq!(ticks[1][0].position.along_axis(), 0.0);
    assert_eq!(ticks[2][4].position.along_axis(), 0.2);
}

#[test]
fn spatial_scene_emits_guides_before_actors() {
    let (x, y, z) = sample_xy(6);
    let mesh = Mesh::meshgrid(&[0.0, 1.0, 2.0], &[0.0, 1.0], |a, b| a * b);
    let mut grid = Grid::spatial(
        Axis::linear(0.0, 10.0).unwrap(),
        Axis::linear(-1.0, 1.0).unwrap(),
        Axis::linear(-1.0, 1.0).unwrap(),
    )
    .with_options(GridOptions { show_shadows: true, ..GridOptions::default() });
    grid.add_actor(Surface::from_mesh(mesh).with_label("surface")).unwrap();
    grid.add_actor(Line::new_3d(x, y, z).unwrap().with_label("helix")).unwrap();

    let mut rec = Recorder::new();
    Scene::new(grid).render(&mut rec).unwrap();

    let actors: Vec<_> = rec.actors().collect();
    assert_eq!(actors.len(), 3);
    assert_eq!(actors[0].label, None);
    assert_eq!(actors[0].style, ColorStyle::Solid(Rgba::GRAY));
    assert_eq!(actors[1].kind, DrawKind::Mesh);
    assert_eq!(actors[2].label.as_deref(), Some("helix"));
    assert_eq!(rec.presents(), 1);
}
