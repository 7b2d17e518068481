//! Rendering-facing modules: window/context management, camera, and
//! OpenGL diagnostics.

pub mod camera;
pub mod debug;
pub mod window;

pub use camera::{Camera, ProjectionKind};
pub use debug::SeverityPolicy;
pub use window::{Window, WindowError};
