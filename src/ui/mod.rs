//! Peripheral page interactions. Each `wire` function checks for its own DOM
//! anchors and does nothing when they are missing.

pub mod buttons;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
