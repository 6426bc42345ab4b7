//! Ambient glow particles drifting behind the page content.
//!
//! A field is seeded in one batch from the current surface size and then only
//! integrated: every frame each particle moves by its velocity and wraps
//! around the surface edges with a small margin so glows never pop in view.

use glam::DVec2;
use rand::Rng;

use crate::color::Hsla;
use crate::constants::*;

/// Particle tuning. `Default` gives the values the page ships with.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub area_per_particle: f64,
    pub min_particles: usize,
    pub max_particles: usize,
    pub radius: (f64, f64),
    pub alpha: (f64, f64),
    pub speed_max: f64,
    pub wrap_margin: f64,
    pub glow_scale: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            area_per_particle: AREA_PER_PARTICLE,
            min_particles: MIN_PARTICLES,
            max_particles: MAX_PARTICLES,
            radius: (RADIUS_MIN, RADIUS_MAX),
            alpha: (ALPHA_MIN, ALPHA_MAX),
            speed_max: SPEED_MAX,
            wrap_margin: WRAP_MARGIN,
            glow_scale: GLOW_RADIUS_SCALE,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a `width` x `height` surface, density-scaled and clamped.
    pub fn target_count(&self, width: f64, height: f64) -> usize {
        let density = (width * height / self.area_per_particle).round();
        let density = if density.is_finite() { density.max(0.0) } else { 0.0 };
        (density as usize).clamp(self.min_particles, self.max_particles)
    }
}

/// Particle count for the shipped tuning.
pub fn target_count(width: f64, height: f64) -> usize {
    FieldConfig::default().target_count(width, height)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub alpha: f64,
    pub hue: f64, // 0..1 seed for both gradient stops
}

/// One radial-gradient disc to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub center: DVec2,
    pub radius: f64,
    pub inner: Hsla,
    pub outer: Hsla,
}

impl Particle {
    pub fn glow(&self, glow_scale: f64) -> Glow {
        Glow {
            center: self.pos,
            radius: self.radius * glow_scale,
            inner: Hsla::new(
                GLOW_INNER_HUE_BASE + GLOW_INNER_HUE_SPAN * self.hue,
                GLOW_SATURATION,
                GLOW_INNER_LIGHTNESS,
                self.alpha,
            ),
            outer: Hsla::new(
                GLOW_OUTER_HUE_BASE + GLOW_OUTER_HUE_SPAN * self.hue,
                GLOW_SATURATION,
                GLOW_OUTER_LIGHTNESS,
                0.0,
            ),
        }
    }
}

/// Wrap one coordinate to the opposite side once it leaves `[-margin, extent + margin]`.
#[inline]
pub fn wrap_axis(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        extent + margin
    } else if v > extent + margin {
        -margin
    } else {
        v
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    width: f64,
    height: f64,
    margin: f64,
}

impl ParticleField {
    /// Seed a fresh field sized for `width` x `height`.
    pub fn seed<R: Rng>(config: &FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let count = config.target_count(width, height);
        let particles = (0..count)
            .map(|_| Particle {
                pos: DVec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height)),
                vel: DVec2::new(
                    uniform(rng, -config.speed_max, config.speed_max),
                    uniform(rng, -config.speed_max, config.speed_max),
                ),
                radius: uniform(rng, config.radius.0, config.radius.1),
                alpha: uniform(rng, config.alpha.0, config.alpha.1),
                hue: rng.gen::<f64>(),
            })
            .collect();
        Self {
            particles,
            width,
            height,
            margin: config.wrap_margin,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Advance every particle one frame and wrap it around the edges.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos.x = wrap_axis(p.pos.x, self.width, self.margin);
            p.pos.y = wrap_axis(p.pos.y, self.height, self.margin);
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

// `gen_range` panics on an empty range, which a zero-sized surface produces.
fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
