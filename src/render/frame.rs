//! The rendering contract consumed by the session.

use crate::error::GrapherError;
use crate::grapher::domain::{SurfaceGrid, SurfaceKind};
use strum_macros::Display;

/// Color scheme per surface kind: Viridis for f, Bluered for df/dx,
/// Electric for df/dy. Distinct palettes so a tab switch is visible at a
/// glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ColorScheme {
    Viridis,
    Bluered,
    Electric,
}

impl ColorScheme {
    pub fn for_kind(kind: SurfaceKind) -> ColorScheme {
        match kind {
            SurfaceKind::Original => ColorScheme::Viridis,
            SurfaceKind::Dx => ColorScheme::Bluered,
            SurfaceKind::Dy => ColorScheme::Electric,
        }
    }

    /// Maps a normalized height t in [0, 1] to (hue, saturation, lightness),
    /// each in [0, 1]. The backends turn this into their own color types.
    pub fn shade(&self, t: f64) -> (f64, f64, f64) {
        let t = t.clamp(0.0, 1.0);
        match self {
            // purple -> green -> yellow
            ColorScheme::Viridis => (0.75 - 0.6 * t, 0.7, 0.25 + 0.4 * t),
            // blue -> red
            ColorScheme::Bluered => (2.0 / 3.0 - 2.0 / 3.0 * t, 0.85, 0.5),
            // black -> orange -> white
            ColorScheme::Electric => (0.08, 0.9, 0.05 + 0.9 * t),
        }
    }
}

/// One draw request: an immutable snapshot of a surface plus the metadata
/// needed to place it. Repeated frames with the same `target_id` redraw in
/// place.
pub struct RenderFrame<'a> {
    pub target_id: &'static str,
    pub title: String,
    pub color: ColorScheme,
    pub grid: &'a SurfaceGrid,
    /// z window the drawn surface is clipped to
    pub z_clip: (f64, f64),
}

/// The external plotting capability. Implementations draw a 3D surface for
/// the frame's grid at the frame's target.
pub trait SurfaceRenderer {
    fn draw(&self, frame: &RenderFrame) -> Result<(), GrapherError>;
}
