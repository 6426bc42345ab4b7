/// HSLA color as understood by CSS and canvas color stops.
///
/// Hue is in degrees; saturation and lightness are percentages (0..100).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Hue is truncated to whole degrees, matching the integer hues the page
    /// stylesheet uses.
    pub fn to_css(self) -> String {
        format!(
            "hsla({}, {}%, {}%, {})",
            self.h.floor() as i64,
            self.s,
            self.l,
            self.a
        )
    }
}
