// File: crates/plotgrid-render-skia/src/colormap.rs
// Summary: Named colormaps (piecewise-linear RGB stops) for surface meshes.

use plotgrid_core::Rgba;
use tracing::warn;

const VIRIDIS: &[[u8; 3]] = &[
    [0x44, 0x01, 0x54], [0x48, 0x28, 0x78], [0x3e, 0x49, 0x89], [0x31, 0x68, 0x8e], [0x26, 0x82, 0x8e],
    [0x1f, 0x9e, 0x89], [0x35, 0xb7, 0x79], [0x6e, 0xce, 0x58], [0xb5, 0xde, 0x2b], [0xfd, 0xe7, 0x25],
];

const PLASMA: &[[u8; 3]] = &[
    [0x0d, 0x08, 0x87], [0x46, 0x03, 0x9f], [0x72, 0x01, 0xa8], [0x9c, 0x17, 0x9e], [0xbd, 0x37, 0x86],
    [0xd8, 0x57, 0x6b], [0xed, 0x79, 0x53], [0xfb, 0x9f, 0x3a], [0xfd, 0xca, 0x26], [0xf0, 0xf9, 0x21],
];

const GRAY: &[[u8; 3]] = &[[0, 0, 0], [255, 255, 255]];

const COOLWARM: &[[u8; 3]] = &[
    [0x3b, 0x4c, 0xc0], [0x7b, 0x9f, 0xf9], [0xc0, 0xd4, 0xf5], [0xdd, 0xdd, 0xdd],
    [0xf2, 0xcb, 0xb7], [0xee, 0x84, 0x68], [0xb4, 0x04, 0x26],
];

/// Colormap with at least two stops, evenly spaced over `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colormap {
    pub name: &'static str,
    stops: &'static [[u8; 3]],
}

impl Colormap {
    pub const VIRIDIS: Colormap = Colormap { name: "viridis", stops: VIRIDIS };
    pub const PLASMA: Colormap = Colormap { name: "plasma", stops: PLASMA };
    pub const GRAY: Colormap = Colormap { name: "gray", stops: GRAY };
    pub const COOLWARM: Colormap = Colormap { name: "coolwarm", stops: COOLWARM };

    pub fn by_name(name: &str) -> Option<Colormap> {
        [Self::VIRIDIS, Self::PLASMA, Self::GRAY, Self::COOLWARM]
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name) || (c.name == "gray" && name.eq_ignore_ascii_case("grey")))
    }

    /// Like [`Colormap::by_name`], falling back to viridis.
    pub fn resolve(name: &str) -> Colormap {
        Self::by_name(name).unwrap_or_else(|| {
            warn!(name, "unknown colormap, using viridis");
            Self::VIRIDIS
        })
    }

    /// Color at `t`, clamped to `[0, 1]`; NaN maps to the first stop.
    pub fn sample(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        let pos = t * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;
        let (a, b) = (self.stops[i], self.stops[i + 1]);
        let mix = |k: usize| (a[k] as f64 + (b[k] as f64 - a[k] as f64) * frac).round() as u8;
        Rgba::rgb(mix(0), mix(1), mix(2))
    }
}
