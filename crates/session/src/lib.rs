//! Session Kernel: enclosure assembly, viewer state and the per-frame loop.
//!
//! # Invariants
//! - Grid and wall placements are fixed once the enclosure is built.
//! - All viewer mutation flows through explicit session operations; the host
//!   calls them one at a time from a single thread.
//! - A session cannot start without a viewer, and a stopped session ignores
//!   input and renders nothing.

pub mod config;
pub mod enclosure;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod viewer;

pub use config::{ConfigError, MazeConfig, ScriptStep};
pub use enclosure::{Enclosure, build_enclosure};
pub use error::SessionError;
pub use scheduler::FrameScheduler;
pub use session::{HostEvent, PLAYER_NAME_LABEL, Session};
pub use viewer::{Viewer, ViewerDescriptor, ViewerState};

pub fn crate_info() -> &'static str {
    "mazen-session v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("session"));
    }
}
