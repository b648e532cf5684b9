//=========================================================================
// Input Window
//=========================================================================
//
// Owns the winit event loop and window. Every window event goes through
// the `WinitInputBridge`; each redraw closes one input cycle.
//
// Lifecycle:
//   InputWindow::new(bridge) → run() → resumed() creates window
//     → window_event()* → CloseRequested → Closed sent → exit
//
// Winit requires the event loop on the main thread (macOS/iOS), so the
// pipeline runs on a separate thread behind a `ChannelPlatform`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info};
use thiserror::Error;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use super::winit_bridge::WinitInputBridge;

//=== WindowError =========================================================

/// Event loop failures. Both are fatal for window mode.
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    #[error("event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),
}

//=== InputWindow =========================================================

/// Winit application that feeds a `WinitInputBridge`.
///
/// # Lifecycle
///
/// 1. **Construction**: `InputWindow::new(title, bridge)`
/// 2. **Execution**: `run()` blocks until the window closes
/// 3. **Cycles**: every `RedrawRequested` sends a cycle boundary and
///    requests the next redraw
/// 4. **Shutdown**: close request or failed window creation sends `Closed`
///
/// # Thread Safety
///
/// Must run on the main thread (winit requirement on macOS/iOS).
pub struct InputWindow {
    title: String,
    window: Option<Window>,
    bridge: WinitInputBridge,
}

impl InputWindow {
    pub fn new(title: impl Into<String>, bridge: WinitInputBridge) -> Self {
        Self {
            title: title.into(),
            window: None,
            bridge,
        }
    }

    /// Runs the event loop on the calling thread until the window closes.
    pub fn run(mut self) -> Result<(), WindowError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(WindowError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(WindowError::EventLoopExecution)
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for InputWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(640, 480));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{}",
                    window.inner_size().width,
                    window.inner_size().height
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.bridge.close();
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.bridge.close();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.bridge.end_cycle();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => self.bridge.handle_window_event(&other),
        }
    }
}
