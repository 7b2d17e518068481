//! # Viewer Engine
//!
//! The window/context layer of a small interactive 3D viewer. It owns one
//! GLFW window with an OpenGL 3.3 core context, a keyboard-driven
//! perspective camera, and a frames-per-second counter reported through the
//! window title.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use viewer_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new(ViewerConfig::default())?;
//!     window.open("My Viewer", 800, 600)?;
//!     while window.is_open() {
//!         // draw calls go here
//!         window.update_display();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod config;
pub mod foundation;
pub mod input;
pub mod render;

/// Common imports for viewer users
pub mod prelude {
    pub use crate::{
        config::{CameraSettings, Config, ViewerConfig, WindowSettings},
        foundation::{
            math::{Mat4, Vec3, Vec4},
            time::{FpsCounter, FpsSample},
        },
        input::CameraAction,
        render::{Camera, ProjectionKind, SeverityPolicy, Window, WindowError},
    };
}
