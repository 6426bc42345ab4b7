pub mod backdrop;
pub mod color;
pub mod constants;
pub mod lifecycle;
pub mod motion;
pub mod particles;
pub mod prefs;
pub mod scheduler;
pub mod simulator;
pub mod surface;
pub mod ui;

pub use backdrop::Backdrop;
pub use color::Hsla;
pub use lifecycle::PageLifecycle;
pub use motion::{MotionState, Toggle};
pub use particles::{target_count, FieldConfig, Glow, Particle, ParticleField};
pub use prefs::{FlagStore, MemoryStore, StoreError};
pub use scheduler::{FrameHandle, FrameScheduler, Timer, TimerHandle};
pub use simulator::Simulator;
pub use surface::{Surface, SurfaceDimensions};
