//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which owns the SDL2 window and the OpenGL context the
//! demo renders into. It is only built with the `demo` feature.

use std::sync::Arc;

use crate::config::WindowSettings;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
pub struct App {
    pub sdl: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub window: sdl2::video::Window,
    pub gl_context: sdl2::video::GLContext,
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
}

impl App {
    /// Creates a new [`App`] from the window settings.
    /// The width and height options are ignored if `fullscreen` is set to `true`.
    ///
    /// The context uses the compatibility profile since nothing here compiles shaders, so the
    /// fixed pipeline is what ends up drawing attribute 0.
    pub fn new(settings: &WindowSettings) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Compatibility);
        gl_attr.set_context_version(3, 3);
        let (width, height) = if settings.fullscreen {
            let display_mode = video_subsystem.current_display_mode(0)?;
            (display_mode.w as u32, display_mode.h as u32)
        } else {
            (settings.width, settings.height)
        };
        let mut window = video_subsystem
            .window(&settings.title, width, height)
            .opengl()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;
        window.set_fullscreen(if settings.fullscreen {
            sdl2::video::FullscreenType::Desktop
        } else {
            sdl2::video::FullscreenType::Off
        })?;
        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        log::info!("Opened {}x{} window \"{}\"", width, height, settings.title);

        Ok(Self {
            sdl,
            video_subsystem,
            window,
            gl_context,
            gl,
            event_pump,
        })
    }
}
