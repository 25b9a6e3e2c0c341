//! Input mapping: discrete key presses to camera-local translations, pointer
//! motion and edge hover to yaw.
//!
//! # Invariants
//! - Handlers never fail; unmapped input is ignored.
//! - Yaw accumulates without bound; it is normalised only where consumed.
//! - Controllers hold no reference to a window or display.

pub mod navigation;
pub mod orbit;

pub use navigation::{NavKey, NavigationConfig, NavigationController};
pub use orbit::{OrbitConfig, OrbitLookController, PointerState};

pub fn crate_info() -> &'static str {
    "mazen-input v0.1.0"
}
