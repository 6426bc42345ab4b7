//! Drawing-surface geometry and the capability the simulator paints through.

use crate::particles::Glow;

/// Logical size of the drawing surface plus the device pixel ratio used for
/// its backing store.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceDimensions {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl SurfaceDimensions {
    /// Build dimensions from a layout measurement.
    ///
    /// A zero client dimension (element not laid out yet) falls back to the
    /// viewport. The ratio never drops below 1.
    pub fn measure(
        client_width: f64,
        client_height: f64,
        viewport_width: f64,
        viewport_height: f64,
        raw_dpr: f64,
    ) -> Self {
        let pick = |client: f64, viewport: f64| {
            if client > 0.0 {
                client
            } else {
                viewport.max(0.0)
            }
        };
        Self {
            width: pick(client_width, viewport_width),
            height: pick(client_height, viewport_height),
            dpr: normalize_dpr(raw_dpr),
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[inline]
pub fn normalize_dpr(raw: f64) -> f64 {
    if raw.is_finite() && raw > 1.0 {
        raw
    } else {
        1.0
    }
}

/// A 2D drawing surface addressed in logical (unscaled) coordinates.
pub trait Surface {
    /// Re-measure, resize the backing store and reset the coordinate transform.
    fn resize(&mut self) -> SurfaceDimensions;
    /// Wipe the whole visible area.
    fn clear(&mut self);
    fn draw_glow(&mut self, glow: &Glow);
}
