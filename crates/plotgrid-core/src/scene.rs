// File: crates/plotgrid-core/src/scene.rs
// Summary: Top-level grid + legend pair with a fixed render order and a single present.

use anyhow::Result;
use tracing::debug;

use crate::grid::Grid;
use crate::legend::{Legend, LegendLocation};
use crate::render::Renderer;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    grid: Grid,
    legend: Option<Legend>,
}

impl Scene {
    pub fn new(grid: Grid) -> Self {
        Self { grid, legend: None }
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Attach a legend built from every labeled actor in the grid.
    pub fn with_auto_legend(self, location: LegendLocation) -> Self {
        let legend = Legend::new(self.grid.actors(), location);
        self.with_legend(legend)
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn legend(&self) -> Option<&Legend> { self.legend.as_ref() }

    /// Axes, guides, actors, legend, then one `present`.
    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        debug!(
            axes = self.grid.dims(),
            actors = self.grid.actors().len(),
            legend = self.legend.as_ref().map_or(0, |l| l.entries().len()),
            "render scene"
        );
        self.grid.render(renderer)?;
        if let Some(legend) = &self.legend {
            legend.render(renderer)?;
        }
        renderer.present()?;
        debug!("scene presented");
        Ok(())
    }
}
