//! wgpu render backend for the enclosure.
//!
//! Every scene node (wall, floor, ceiling) is drawn as a lit, instanced box
//! coloured by its texture id.
//!
//! # Invariants
//! - Renderer never mutates the scene or the camera.
//! - One `WgpuFrame` per presented surface texture.

mod gpu;
mod shaders;

pub use gpu::{WgpuFrame, WgpuRenderer, texture_color};
