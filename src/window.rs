use eyre::{eyre, Result};
use sdl2::{
    event::{Event, WindowEvent},
    video::{GLContext, GLProfile, SwapInterval, Window},
    EventPump, Sdl, VideoSubsystem,
};

use crate::settings::Settings;

pub struct MyWindow {
    _sdl_context: Sdl,
    _video_subsystem: VideoSubsystem,
    window: Window,
    _gl_ctx: GLContext,
    pub event_pump: EventPump,
    pub width: u32,
    pub height: u32,
}

impl MyWindow {
    pub fn new(settings: &Settings) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| eyre!("{e}"))?;
        let video_subsystem = sdl_context.video().map_err(|e| eyre!("{e}"))?;

        // Context attributes have to be set before the window is created
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_major_version(4);
        gl_attr.set_context_minor_version(3);
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_flags().debug().set();
        gl_attr.set_double_buffer(true);

        let window = video_subsystem
            .window(&settings.title, settings.width, settings.height)
            .opengl()
            .resizable()
            .position_centered()
            .allow_highdpi()
            .build()?;

        let gl_ctx = window.gl_create_context().map_err(|e| eyre!("{e}"))?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as _);

        let interval = if settings.vsync {
            SwapInterval::VSync
        } else {
            SwapInterval::Immediate
        };
        window
            .subsystem()
            .gl_set_swap_interval(interval)
            .map_err(|e| eyre!("{e}"))?;

        let (width, height) = window.drawable_size();
        log::info!("Created a {width}x{height} window");

        let event_pump = sdl_context.event_pump().map_err(|e| eyre!("{e}"))?;

        Ok(Self {
            _sdl_context: sdl_context,
            _video_subsystem: video_subsystem,
            window,
            _gl_ctx: gl_ctx,
            event_pump,
            width,
            height,
        })
    }

    /// Presents the frame and returns if the render loop should terminate
    pub fn end_frame(&mut self) -> bool {
        self.window.gl_swap_window();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return true,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = self.window.drawable_size();
                    log::debug!("Window resized to {width}x{height}");
                    self.width = width;
                    self.height = height;
                }
                _ => (),
            }
        }

        false
    }
}
