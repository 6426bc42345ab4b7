use std::f64::consts::TAU;

use fx_core::{Glow, Surface, SurfaceDimensions};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The backdrop canvas with a 2D context scaled to the device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dims: SurfaceDimensions,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx,
            dims: SurfaceDimensions::default(),
        })
    }

    fn measure(&self) -> SurfaceDimensions {
        let (vw, vh, dpr) = match web::window() {
            Some(w) => (
                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                w.device_pixel_ratio(),
            ),
            None => (0.0, 0.0, 1.0),
        };
        SurfaceDimensions::measure(
            self.canvas.client_width() as f64,
            self.canvas.client_height() as f64,
            vw,
            vh,
            dpr,
        )
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self) -> SurfaceDimensions {
        let dims = self.measure();
        let (w_px, h_px) = dims.backing_size();
        self.canvas.set_width(w_px);
        self.canvas.set_height(h_px);
        _ = self.ctx.set_transform(dims.dpr, 0.0, 0.0, dims.dpr, 0.0, 0.0);
        self.dims = dims;
        dims
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.dims.width, self.dims.height);
    }

    fn draw_glow(&mut self, glow: &Glow) {
        let (x, y, r) = (glow.center.x, glow.center.y, glow.radius);
        let Ok(gradient) = self.ctx.create_radial_gradient(x, y, 0.0, x, y, r) else {
            return;
        };
        _ = gradient.add_color_stop(0.0, &glow.inner.to_css());
        _ = gradient.add_color_stop(1.0, &glow.outer.to_css());

        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r, 0.0, TAU);
        self.ctx.fill();
    }
}
