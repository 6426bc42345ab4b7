//! State and arithmetic behind the page's peripheral interactions.
//!
//! The DOM wiring lives in the wasm crate; these pieces are kept free of
//! browser types so their behaviour can be tested on the host.

pub mod anchor;
pub mod menu;
pub mod nav;
pub mod pointer;
pub mod theme;
