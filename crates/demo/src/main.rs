// File: crates/demo/src/main.rs
// Summary: Demo renders 2D, 3D and non-linear axis scenes to PNGs; optionally plots an x,y[,z] CSV.

use anyhow::{Context, Result};
use plotgrid_core::{
    linspace, Axis, Grid, GridOptions, LegendLocation, Line, Mesh, Rgba, Scatter, Scene, Surface,
};
use plotgrid_render_skia::{render_to_png, theme, RenderOptions};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut opts = RenderOptions::default();
    if let Ok(name) = std::env::var("PLOTGRID_THEME") {
        opts.theme = theme::find(&name);
    }

    write(&planar_demo()?, &opts, "planar")?;
    write(&spatial_demo()?, &opts, "surface")?;
    write(&log_demo()?, &opts, "log")?;
    write(&hyperbolic_demo()?, &opts, "hyperbolic")?;
    write(&polar_demo()?, &opts, "polar")?;

    if let Some(raw) = std::env::args().nth(1) {
        let path = resolve_path(&raw)?;
        info!(path = %path.display(), "loading csv");
        let scene = csv_scene(&path).with_context(|| format!("failed to plot CSV '{}'", path.display()))?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
        write(&scene, &opts, &format!("csv_{stem}"))?;
    }
    Ok(())
}

fn write(scene: &Scene, opts: &RenderOptions, name: &str) -> Result<()> {
    let out = out_path(name);
    render_to_png(scene, opts, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// target/out/plotgrid_<name>.png
fn out_path(name: &str) -> PathBuf {
    PathBuf::from("target/out").join(format!("plotgrid_{name}.png"))
}

/// Sine scatter and damped cosine line on linear axes.
fn planar_demo() -> Result<Scene> {
    let x = linspace(0.0, 10.0, 100);
    let sin: Vec<f64> = x.iter().map(|v| v.sin()).collect();
    let damped: Vec<f64> = x.iter().map(|v| v.cos() * (-v / 5.0).exp()).collect();

    let mut grid = Grid::planar(
        Axis::linear(0.0, 10.0)?.with_label("t"),
        Axis::linear(-1.0, 1.0)?.with_label("amplitude"),
    );
    grid.add_actor(Scatter::new(x.clone(), sin)?.with_color(Rgba::BLUE).with_label("sin(t)"))?;
    grid.add_actor(Line::new(x, damped)?.with_color(Rgba::RED).with_width(2.0).with_label("damped cos(t)"))?;
    Ok(Scene::new(grid).with_auto_legend(LegendLocation::UpperRight))
}

/// Gaussian bump surface with a helix line, shadows and perpendiculars.
fn spatial_demo() -> Result<Scene> {
    let xs = linspace(-3.0, 3.0, 40);
    let ys = linspace(-3.0, 3.0, 40);
    let mesh = Mesh::meshgrid(&xs, &ys, |x, y| (-(x * x + y * y) / 2.0).exp());

    let t = linspace(0.0, 4.0 * std::f64::consts::PI, 60);
    let hx: Vec<f64> = t.iter().map(|v| 2.0 * v.cos()).collect();
    let hy: Vec<f64> = t.iter().map(|v| 2.0 * v.sin()).collect();
    let hz: Vec<f64> = t.iter().map(|v| v / (4.0 * std::f64::consts::PI)).collect();

    let mut grid = Grid::spatial(
        Axis::linear(-3.0, 3.0)?.with_label("x"),
        Axis::linear(-3.0, 3.0)?.with_label("y"),
        Axis::linear(0.0, 1.0)?.with_label("z"),
    )
    .with_options(GridOptions { show_shadows: true, show_perpendiculars: true, ..GridOptions::default() });
    grid.add_actor(Surface::from_mesh(mesh).with_colormap("viridis").with_label("exp(-r^2/2)"))?;
    grid.add_actor(Line::new_3d(hx, hy, hz)?.with_color(Rgba::RED).with_label("helix"))?;
    Ok(Scene::new(grid).with_auto_legend(LegendLocation::UpperLeft))
}

/// Exponential growth is a straight line on a base-10 y axis.
fn log_demo() -> Result<Scene> {
    let x = linspace(0.0, 3.0, 50);
    let y: Vec<f64> = x.iter().map(|v| 10f64.powf(*v)).collect();
    let mut grid = Grid::planar(
        Axis::linear(0.0, 3.0)?.with_label("exponent"),
        Axis::log(1.0, 1000.0, 10.0)?.with_label("10^x"),
    );
    grid.add_actor(Line::new(x, y)?.with_label("10^x"))?;
    Ok(Scene::new(grid).with_auto_legend(LegendLocation::LowerRight))
}

/// 1/x on a hyperbolic x axis.
fn hyperbolic_demo() -> Result<Scene> {
    let x = linspace(1.0, 10.0, 50);
    let y: Vec<f64> = x.iter().map(|v| 1.0 / v).collect();
    let mut grid = Grid::planar(
        Axis::hyperbolic(1.0, 10.0)?.with_label("x (reciprocal scale)"),
        Axis::linear(0.0, 1.0)?.with_label("1/x"),
    );
    grid.add_actor(Scatter::new(x, y)?.with_label("1/x"))?;
    Ok(Scene::new(grid).with_auto_legend(LegendLocation::Best))
}

/// Radius-bounded polar axis; ticks sit on the radial line.
fn polar_demo() -> Result<Scene> {
    let r = linspace(0.0, 5.0, 40);
    let y: Vec<f64> = r.iter().map(|v| v.sqrt()).collect();
    let mut grid = Grid::planar(
        Axis::polar(0.0, 5.0)?.with_label("radius"),
        Axis::linear(0.0, 2.5)?.with_label("sqrt(r)"),
    );
    grid.add_actor(Line::new(r, y)?.with_color(Rgba::GREEN).with_label("sqrt(r)"))?;
    Ok(Scene::new(grid).with_auto_legend(LegendLocation::LowerRight))
}

/// Resolve path, trying the .csv/.cvs swap if needed.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            warn!(requested = %p.display(), using = %alt.display(), "extension swapped between .csv/.cvs");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let swapped = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(swapped))
}

/// Columns of an x,y[,z] CSV. Rows with unparsable numbers are skipped.
#[derive(Debug, Default)]
struct Columns {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Option<Vec<f64>>,
}

fn load_xyz_csv(path: &Path) -> Result<Columns> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |name: &str, fallback: usize| headers.iter().position(|h| h == name).unwrap_or(fallback);
    let (ix, iy) = (idx("x", 0), idx("y", 1));
    let iz = headers.iter().position(|h| h == "z").or((headers.len() > 2).then_some(2));
    info!(?headers, has_z = iz.is_some(), "csv columns");

    let mut cols = Columns { z: iz.map(|_| Vec::new()), ..Columns::default() };
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        let z = iz.map(parse);
        match (parse(ix), parse(iy), z) {
            (Some(x), Some(y), None) => {
                cols.x.push(x);
                cols.y.push(y);
            }
            (Some(x), Some(y), Some(Some(z))) => {
                cols.x.push(x);
                cols.y.push(y);
                if let Some(zs) = cols.z.as_mut() {
                    zs.push(z);
                }
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without numeric x/y{}", if iz.is_some() { "/z" } else { "" });
    }
    Ok(cols)
}

fn bounds(v: &[f64]) -> (f64, f64) {
    let (lo, hi) = v.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &a| (lo.min(a), hi.max(a)));
    if lo < hi { (lo, hi) } else { (lo - 0.5, lo + 0.5) }
}

fn csv_scene(path: &Path) -> Result<Scene> {
    let cols = load_xyz_csv(path)?;
    if cols.x.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter.");
    }
    let label = path.file_name().and_then(|s| s.to_str()).unwrap_or("data").to_string();
    let (x0, x1) = bounds(&cols.x);
    let (y0, y1) = bounds(&cols.y);

    let grid = match cols.z {
        Some(z) => {
            let (z0, z1) = bounds(&z);
            let mut grid = Grid::spatial(
                Axis::linear(x0, x1)?.with_label("x"),
                Axis::linear(y0, y1)?.with_label("y"),
                Axis::linear(z0, z1)?.with_label("z"),
            )
            .with_options(GridOptions { show_perpendiculars: true, ..GridOptions::default() });
            grid.add_actor(Scatter::new_3d(cols.x, cols.y, z)?.with_label(label))?;
            grid
        }
        None => {
            let mut grid = Grid::planar(Axis::linear(x0, x1)?.with_label("x"), Axis::linear(y0, y1)?.with_label("y"));
            grid.add_actor(Line::new(cols.x, cols.y)?.with_label(label))?;
            grid
        }
    };
    Ok(Scene::new(grid).with_auto_legend(LegendLocation::Best))
}
