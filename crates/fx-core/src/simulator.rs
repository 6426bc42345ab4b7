use rand::rngs::StdRng;

use crate::particles::{FieldConfig, ParticleField};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::surface::{Surface, SurfaceDimensions};

/// Owns the particle field and its frame loop on a given surface.
///
/// At most one frame is pending at any time. Every `start` discards the
/// previous field and seeds a new one from the freshly measured surface.
pub struct Simulator<S, F> {
    surface: S,
    frames: F,
    config: FieldConfig,
    rng: StdRng,
    field: ParticleField,
    dims: SurfaceDimensions,
    pending: Option<FrameHandle>,
    runs: u64,
}

impl<S: Surface, F: FrameScheduler> Simulator<S, F> {
    pub fn new(surface: S, frames: F, config: FieldConfig, rng: StdRng) -> Self {
        Self {
            surface,
            frames,
            config,
            rng,
            field: ParticleField::default(),
            dims: SurfaceDimensions::default(),
            pending: None,
            runs: 0,
        }
    }

    /// Begin a fresh run: cancel the current loop, resize, reseed, schedule.
    pub fn start(&mut self) {
        self.stop();
        self.dims = self.surface.resize();
        self.field = ParticleField::seed(&self.config, self.dims.width, self.dims.height, &mut self.rng);
        self.runs += 1;
        log::debug!(
            "[backdrop] run {} with {} particles on {}x{} @{}x",
            self.runs,
            self.field.len(),
            self.dims.width,
            self.dims.height,
            self.dims.dpr
        );
        self.schedule();
    }

    /// Cancel the pending frame (if any), drop the particles and clear the
    /// surface. Safe to repeat.
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.frames.cancel_frame(handle);
        }
        self.field.clear();
        self.surface.clear();
    }

    /// Frame callback. Draws and reschedules only while `should_animate`;
    /// otherwise the loop ends here without touching the surface.
    pub fn frame(&mut self, should_animate: bool) {
        self.pending = None;
        if !should_animate {
            return;
        }
        self.surface.clear();
        self.field.step();
        for p in &self.field.particles {
            self.surface.draw_glow(&p.glow(self.config.glow_scale));
        }
        self.schedule();
    }

    fn schedule(&mut self) {
        self.pending = self.frames.request_frame();
        if self.pending.is_none() {
            log::warn!("[backdrop] host refused to schedule a frame");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn dimensions(&self) -> SurfaceDimensions {
        self.dims
    }

    /// Number of `start` calls so far.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}
