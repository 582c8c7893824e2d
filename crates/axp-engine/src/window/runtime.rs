use anyhow::{Context, Result};

use crate::core::{App, AppControl, FrameCtx, FrameTarget};
use crate::coords::Viewport;
use crate::input::InputEvent;
use crate::pixel::PixelGrid;
use crate::scene::DrawList;
use crate::time::{FpsCounter, FrameClock};

/// Which kind of surface the window presents.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceKind {
    Vector,
    Pixels,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub viewport: Viewport,
    pub surface: SurfaceKind,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "axp".to_string(),
            viewport: Viewport::new(1440, 1440),
            surface: SurfaceKind::Vector,
        }
    }
}

impl RuntimeConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn surface(mut self, surface: SurfaceKind) -> Self {
        self.surface = surface;
        self
    }
}

/// An input event scheduled to arrive before a given frame is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedInput {
    pub frame: u64,
    pub event: InputEvent,
}

impl ScriptedInput {
    pub fn new(frame: u64, event: InputEvent) -> Self {
        Self { frame, event }
    }
}

/// What the last frame produced.
#[derive(Debug, Clone)]
pub enum FrameOutput {
    Vector(DrawList),
    Pixels(PixelGrid),
}

/// Drives an [`App`] without a platform window.
///
/// Each frame: deliver the input scheduled for it, tick the clock, report
/// FPS when a new figure is available, then call `on_frame`. Frames never
/// overlap and always run to completion.
pub struct HeadlessRuntime {
    config: RuntimeConfig,
    clock: FrameClock,
    fps: FpsCounter,
}

impl HeadlessRuntime {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config, clock: FrameClock::new(), fps: FpsCounter::new() }
    }

    /// Runs up to `frames` frames, stopping early on [`AppControl::Exit`].
    pub fn run<A: App>(
        &mut self,
        app: &mut A,
        frames: u64,
        script: &[ScriptedInput],
    ) -> Result<FrameOutput> {
        let viewport = self.config.viewport;
        let mut draw_list = DrawList::new();
        let mut pixels = match self.config.surface {
            SurfaceKind::Pixels => Some(
                PixelGrid::new(viewport)
                    .with_context(|| format!("failed to create surface for '{}'", self.config.title))?,
            ),
            SurfaceKind::Vector => None,
        };

        log::info!(
            "window '{}' ({}x{}, {:?}) starting",
            self.config.title,
            viewport.width,
            viewport.height,
            self.config.surface
        );
        app.setup(viewport);
        self.clock.reset();

        for frame in 0..frames {
            for input in script.iter().filter(|s| s.frame == frame) {
                deliver(app, &input.event);
            }

            let time = self.clock.tick();
            if let Some(fps) = self.fps.record(time.now) {
                app.on_fps_updated(fps);
            }

            draw_list.clear();
            let target = match pixels.as_mut() {
                Some(grid) => FrameTarget::Pixels(grid),
                None => FrameTarget::Vector(&mut draw_list),
            };
            let mut ctx = FrameCtx { time, viewport, target };

            if app.on_frame(&mut ctx) == AppControl::Exit {
                log::info!("window '{}' closed after frame {}", self.config.title, frame);
                break;
            }
        }

        Ok(match pixels {
            Some(grid) => FrameOutput::Pixels(grid),
            None => FrameOutput::Vector(draw_list),
        })
    }
}

fn deliver<A: App>(app: &mut A, event: &InputEvent) {
    log::trace!("input {:?}", event);
    match *event {
        InputEvent::PointerMoved(pos) => app.on_mouse_moved(pos),
        InputEvent::PointerButton { pos, button, action } => app.on_mouse_button(pos, button, action),
    }
}
