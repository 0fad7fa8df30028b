// File: crates/plotgrid-core/src/legend.rs
// Summary: Legend entries derived from labeled actors.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use tracing::trace;

use crate::actor::{Actor, ColorStyle, MarkerKind};
use crate::error::Error;
use crate::render::Renderer;

/// Placement hint passed through to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendLocation {
    #[default]
    Best,
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
    Right,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

impl LegendLocation {
    const ALL: [LegendLocation; 11] = [
        LegendLocation::Best,
        LegendLocation::UpperRight,
        LegendLocation::UpperLeft,
        LegendLocation::LowerLeft,
        LegendLocation::LowerRight,
        LegendLocation::Right,
        LegendLocation::CenterLeft,
        LegendLocation::CenterRight,
        LegendLocation::LowerCenter,
        LegendLocation::UpperCenter,
        LegendLocation::Center,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            LegendLocation::Best => "best",
            LegendLocation::UpperRight => "upper right",
            LegendLocation::UpperLeft => "upper left",
            LegendLocation::LowerLeft => "lower left",
            LegendLocation::LowerRight => "lower right",
            LegendLocation::Right => "right",
            LegendLocation::CenterLeft => "center left",
            LegendLocation::CenterRight => "center right",
            LegendLocation::LowerCenter => "lower center",
            LegendLocation::UpperCenter => "upper center",
            LegendLocation::Center => "center",
        }
    }
}

impl FromStr for LegendLocation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(&want))
            .ok_or_else(|| Error::UnknownLegendLocation(s.to_string()))
    }
}

impl fmt::Display for LegendLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: ColorStyle,
    pub marker: MarkerKind,
    /// Glyph stroke/marker weight, taken from the actor.
    pub weight: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    location: LegendLocation,
}

impl Legend {
    /// Collect one entry per labeled actor, in order. Unlabeled actors are skipped.
    pub fn new<'a>(actors: impl IntoIterator<Item = &'a Actor>, location: LegendLocation) -> Self {
        let entries = actors
            .into_iter()
            .filter_map(|actor| {
                let label = actor.label()?;
                Some(LegendEntry {
                    label: label.to_string(),
                    style: actor.style(),
                    marker: actor.marker(),
                    weight: actor.weight(),
                })
            })
            .collect();
        Self { entries, location }
    }

    pub fn entries(&self) -> &[LegendEntry] { &self.entries }
    pub fn location(&self) -> LegendLocation { self.location }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<()> {
        trace!(entries = self.entries.len(), location = %self.location, "draw legend");
        renderer.draw_legend(&self.entries, self.location)
    }
}
