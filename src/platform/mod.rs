//=========================================================================
// Platform Subsystem
//
// Drives the app from a winit event loop on the main thread.
//
// Architecture:
// ```text
//  Winit Event Loop
//   │
//   ├─ resumed ──────────► create window, bind surface redraw hook
//   │
//   ├─ window_event
//   │    ├─ input ───────► InputProcessor ─► App::handle_input
//   │    ├─ RedrawRequested ─► App::render_frame
//   │    └─ CloseRequested ──► exit
//   │
//   └─ about_to_wait ───► App::update at fixed TPS, then WaitUntil
// ```
//
// Key Design Decisions:
// - **Single thread**: input, ticks and rendering run on the loop thread,
//   so navigation requested by an event is enacted before the next event.
// - **Lazy window**: the surface has no redraw hook until `resumed`, and
//   redraws requested earlier are counted and skipped.
// - **Sticky modifiers**: modifier state persists across events until
//   winit reports a change.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, error, info, trace};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::app::App;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Failure of the windowing event loop.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] winit::error::EventLoopError),

    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] winit::error::EventLoopError),
}

//=== Ticker ==============================================================

/// Fixed-rate tick scheduling.
///
/// Reports how many whole ticks have elapsed since the last poll and
/// carries the remainder forward.
#[derive(Debug)]
struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// Ticks that fall due in a single poll beyond this are dropped.
    const MAX_CATCH_UP: u32 = 5;

    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next: now + interval,
        }
    }

    fn poll(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next <= now {
            self.next += self.interval;
            due += 1;
        }

        if due > Self::MAX_CATCH_UP {
            debug!(target: "platform", "Dropping {} late ticks", due - Self::MAX_CATCH_UP);
            self.next = now + self.interval;
            due = Self::MAX_CATCH_UP;
        }

        due
    }

    fn deadline(&self) -> Instant {
        self.next
    }
}

//=== Platform ============================================================

pub(crate) struct Platform {
    app: App,

    window: Option<Arc<Window>>,

    input_processor: InputProcessor,

    ticker: Ticker,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(app: App) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let ticker = Ticker::new(app.tick_interval(), Instant::now());

        Self {
            app,
            window: None,
            input_processor: InputProcessor::new(),
            ticker,
        }
    }

    //--- Execution --------------------------------------------------------

    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        self.app.surface().unbind_redraw_hook();
        Ok(())
    }

    //--- Internal Helpers -------------------------------------------------

    fn create_window(&mut self, event_loop: &ActiveEventLoop) {
        let size = self.app.surface().size();
        let attrs = WindowAttributes::default()
            .with_title(self.app.title())
            .with_inner_size(LogicalSize::new(size.x, size.y));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let window = Arc::new(window);
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );

                self.input_processor.set_scale_factor(window.scale_factor());

                let hook_window = Arc::clone(&window);
                self.app
                    .surface()
                    .bind_redraw_hook(Box::new(move || hook_window.request_redraw()));

                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        self.create_window(event_loop);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                let drawn = self.app.render_frame();
                trace!(target: "platform", "Frame rendered ({} entities)", drawn);
            }

            _ => {
                if let Some(input) = self.input_processor.translate(&event) {
                    trace!(target: "platform::input", "{:?}", input);
                    self.app.handle_input(&input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.ticker.interval.as_secs_f32();
        for _ in 0..self.ticker.poll(Instant::now()) {
            self.app.update(dt);
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.ticker.deadline()));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!(target: "platform", "Event loop exiting");
        self.window = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(10);

    //=====================================================================
    // Ticker Tests
    //=====================================================================

    #[test]
    fn ticker_not_due_before_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(STEP, start);

        assert_eq!(ticker.poll(start), 0);
        assert_eq!(ticker.poll(start + Duration::from_millis(9)), 0);
    }

    #[test]
    fn ticker_counts_whole_intervals() {
        let start = Instant::now();
        let mut ticker = Ticker::new(STEP, start);

        assert_eq!(ticker.poll(start + Duration::from_millis(35)), 3);
        assert_eq!(ticker.deadline(), start + Duration::from_millis(40), "Remainder carries forward");
        assert_eq!(ticker.poll(start + Duration::from_millis(40)), 1);
    }

    #[test]
    fn ticker_caps_catch_up() {
        let start = Instant::now();
        let mut ticker = Ticker::new(STEP, start);
        let late = start + Duration::from_secs(1);

        assert_eq!(ticker.poll(late), Ticker::MAX_CATCH_UP);
        assert_eq!(ticker.deadline(), late + STEP, "Schedule restarts from now");
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_display() {
        let err = PlatformError::EventLoopCreation(winit::error::EventLoopError::RecreationAttempt);
        assert!(err.to_string().starts_with("Event loop creation failed"));
    }
}
