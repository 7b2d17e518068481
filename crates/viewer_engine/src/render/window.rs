//! Window and OpenGL context management using GLFW
//!
//! [`Window`] is the single object an application owns to run the viewer:
//! it wraps the GLFW instance, the native window with its OpenGL 3.3 core
//! context, the camera, and the FPS counter. The window can be closed and
//! reopened; camera state and the stored title survive the cycle.
//!
//! All event dispatch happens synchronously inside [`Window::swap_buffer`],
//! on the calling thread. Every accessor is a no-op returning zero or a
//! default while the window is closed; callers that need to distinguish
//! "closed" from "zero" check [`Window::is_open`].

use glfw::Context as _;
use glow::HasContext as _;
use thiserror::Error;

use crate::config::ViewerConfig;
use crate::foundation::math::Vec3;
use crate::foundation::time::FpsCounter;
use crate::input;
use crate::render::camera::{Camera, ProjectionKind};
use crate::render::debug;

/// Requested OpenGL context version (major, minor)
const GL_VERSION: (u32, u32) = (3, 3);

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW failed to start; the window stays unusable
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The native window or its context could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// The driver provided a context below the required version
    #[error("OpenGL {0}.{1} is not supported")]
    UnsupportedVersion(i32, i32),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Resources that only exist while the window is open.
struct OpenState {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: glow::Context,
}

/// The viewer's window, context, camera and frame timing in one handle
///
/// Constructed explicitly and passed to whatever owns the render loop.
pub struct Window {
    glfw: glfw::Glfw,
    state: Option<OpenState>,
    camera: Camera,
    title: String,
    fps: FpsCounter,
    config: ViewerConfig,
}

impl Window {
    /// Initialize GLFW and prepare a closed window.
    ///
    /// The camera is created here and lives for the whole `Window` lifetime,
    /// so closing and reopening resumes with the same viewpoint.
    ///
    /// # Errors
    /// [`WindowError::InitializationFailed`] when the windowing library
    /// cannot start.
    pub fn new(config: ViewerConfig) -> WindowResult<Self> {
        let glfw = glfw::init(glfw::log_errors).map_err(|e| {
            log::error!("Unable to initialize the GLFW library: {e}");
            WindowError::InitializationFailed
        })?;

        let mut camera = Camera::new(ProjectionKind::Perspective);
        camera.set_clip_planes(config.camera.near, config.camera.far);
        camera.set_fov_degrees(config.camera.fov_degrees);

        let fps = FpsCounter::new(glfw.get_time());

        Ok(Self {
            glfw,
            state: None,
            camera,
            title: String::new(),
            fps,
            config,
        })
    }

    /// Open the native window and bring up its OpenGL context.
    ///
    /// No-op when the window is already open. On any context failure the
    /// half-created window is torn down before the error is returned, so
    /// the handle never stays partially initialized.
    ///
    /// # Errors
    /// [`WindowError::CreationFailed`] when GLFW cannot create the window,
    /// [`WindowError::UnsupportedVersion`] when the context version is
    /// below 3.3.
    pub fn open(&mut self, title: &str, width: u32, height: u32) -> WindowResult<()> {
        if self.is_open() {
            return Ok(());
        }

        self.glfw
            .window_hint(glfw::WindowHint::Samples(Some(self.config.window.msaa_samples)));
        self.glfw
            .window_hint(glfw::WindowHint::ContextVersion(GL_VERSION.0, GL_VERSION.1));
        self.glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = self
            .glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                log::error!("Unable to create window '{title}' ({width}x{height})");
                WindowError::CreationFailed
            })?;

        window.make_current();

        // Dropping `window` on the error paths below destroys the native
        // window, which is the fail-closed teardown.
        let mut gl = unsafe {
            glow::Context::from_loader_function(|symbol| {
                window.get_proc_address(symbol) as *const _
            })
        };

        let (major, minor) = unsafe {
            (
                gl.get_parameter_i32(glow::MAJOR_VERSION),
                gl.get_parameter_i32(glow::MINOR_VERSION),
            )
        };
        if (major, minor) < (GL_VERSION.0 as i32, GL_VERSION.1 as i32) {
            log::error!(
                "OpenGL {}.{} is not supported (driver reports {major}.{minor})",
                GL_VERSION.0,
                GL_VERSION.1
            );
            return Err(WindowError::UnsupportedVersion(major, minor));
        }
        log::info!("OpenGL {major}.{minor} context ready for window '{title}'");

        window.set_key_polling(true);
        window.set_size_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_scroll_polling(true);
        window.set_close_polling(true);

        self.glfw.set_swap_interval(if self.config.window.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        let policy = self.config.debug_policy;
        unsafe {
            gl.enable(glow::DEBUG_OUTPUT);
            gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
            gl.debug_message_callback(move |source, message_type, id, severity, message| {
                debug::handle_debug_message(policy, source, message_type, id, severity, message);
            });
            gl.debug_message_control(glow::DONT_CARE, glow::DONT_CARE, glow::DONT_CARE, &[], true);
        }

        self.camera.set_window_size(width as f32, height as f32);
        self.title = title.to_string();
        self.state = Some(OpenState { window, events, gl });

        Ok(())
    }

    /// Open with the configured default dimensions.
    ///
    /// # Errors
    /// Same as [`Window::open`].
    pub fn open_default(&mut self, title: &str) -> WindowResult<()> {
        let (width, height) = (self.config.window.width, self.config.window.height);
        self.open(title, width, height)
    }

    /// True while the native window exists.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Destroy the native window. Idempotent.
    ///
    /// Camera state and the stored title are kept, so a later
    /// [`open`](Self::open) resumes with the same viewpoint.
    pub fn close(&mut self) {
        if let Some(mut state) = self.state.take() {
            state.window.set_should_close(false);
            log::info!("Window '{}' closed", self.title);
        }
    }

    /// Make this window's context current on the calling thread.
    pub fn set_active(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.window.make_current();
        }
    }

    /// Update the native title bar text.
    ///
    /// Leaves the stored base title untouched; the FPS path formats its
    /// readout around the base title set by [`open`](Self::open).
    pub fn set_window_title(&mut self, title: &str) {
        if let Some(state) = self.state.as_mut() {
            state.window.set_title(title);
        }
    }

    /// Logical window width in pixels, 0 when closed.
    #[must_use]
    pub fn get_width(&self) -> u32 {
        self.state
            .as_ref()
            .map_or(0, |state| state.window.get_size().0.unsigned_abs())
    }

    /// Logical window height in pixels, 0 when closed.
    #[must_use]
    pub fn get_height(&self) -> u32 {
        self.state
            .as_ref()
            .map_or(0, |state| state.window.get_size().1.unsigned_abs())
    }

    /// Cursor position in logical window coordinates, (0, 0) when closed.
    #[must_use]
    pub fn get_cursor_pos(&self) -> (f64, f64) {
        self.state
            .as_ref()
            .map_or((0.0, 0.0), |state| state.window.get_cursor_pos())
    }

    /// Seconds on GLFW's monotonic clock.
    #[must_use]
    pub fn get_current_time(&self) -> f64 {
        self.glfw.get_time()
    }

    /// Value copy of the camera. Mutations go through the input path, not
    /// through this copy.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera.clone()
    }

    /// Move the camera eye point to an absolute position.
    pub fn set_eye_point(&mut self, eye: Vec3) {
        self.camera.set_eye_point(eye);
    }

    /// Present the frame: swap buffers, then update the FPS readout.
    ///
    /// The one call an application makes per rendered frame.
    pub fn update_display(&mut self) {
        self.swap_buffer();
        self.compute_fps();
    }

    /// Swap the back buffer and pump events. No-op when closed.
    ///
    /// All pending input is dispatched here: key events drive the camera,
    /// resize events update the camera aspect, framebuffer resizes update
    /// the viewport. When the user has requested a close, the window shuts
    /// down at the end of the call.
    pub fn swap_buffer(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        state.window.make_current();
        state.window.swap_buffers();

        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&state.events) {
            match event {
                glfw::WindowEvent::Key(key, _, action, _)
                    if input::is_dispatching_action(action) =>
                {
                    if let Some(camera_action) = input::action_for_key(key) {
                        input::apply_action(&mut self.camera, camera_action);
                    }
                }
                glfw::WindowEvent::Size(width, height) => {
                    log::debug!("Window resized to {width}x{height}");
                    self.camera.set_window_size(width as f32, height as f32);
                }
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    log::debug!("Framebuffer resized to {width}x{height}");
                    unsafe { state.gl.viewport(0, 0, width, height) };
                }
                glfw::WindowEvent::Scroll(..) => {
                    // Reserved: zoom control candidate.
                }
                _ => {}
            }
        }

        if state.window.should_close() {
            self.close();
        }
    }

    /// Count this frame and refresh the title once per second.
    ///
    /// Between reports the title is left alone. The readout is formatted
    /// around the base title stored by [`open`](Self::open).
    pub fn compute_fps(&mut self) {
        self.fps.frame();
        let now = self.glfw.get_time();
        if let Some(sample) = self.fps.sample(now) {
            let text = format!(
                "{}: {:3.1} FPS || {:3.3} ms/frame",
                self.title, sample.fps, sample.frame_ms
            );
            self.set_window_title(&text);
        }
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.close();
    }
}
