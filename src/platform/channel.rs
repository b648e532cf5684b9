//=========================================================================
// Channel Platform
//=========================================================================
//
// `PlatformInput` fed by device events arriving over a crossbeam channel.
//
// Architecture:
// ```text
//  Window Thread                        Pipeline Thread
//  ┌─────────────────────┐             ┌──────────────────────────┐
//  │ WinitInputBridge    │  Device(..) │ ChannelPlatform          │
//  │  WindowEvent → ─────┼────────────>│  wait_for_cycle()        │
//  │  RedrawRequested ───┼─Boundary───>│   └─ folds DeviceState   │
//  │  CloseRequested ────┼─Closed─────>│  InputPollAllStep        │
//  └─────────────────────┘             │  end_cycle()             │
//                                      └──────────────────────────┘
// ```
//
// A cycle ends at `CycleBoundary`; everything received before it is
// folded into the device state the poll steps see.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::input::device::{GamepadAxis, GamepadButton, GamepadId};
use crate::core::platform_bridge::{DeviceEvent, DeviceState, PlatformInput, PointerState};
use crate::error::PlatformError;

//=== PlatformEvent =======================================================

/// Message sent from a window thread to the pipeline thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// A single device change, applied in arrival order.
    Device(DeviceEvent),

    /// Everything sent so far belongs to the cycle that is about to run.
    CycleBoundary,

    /// The window is gone; no further events will arrive.
    Closed,
}

//=== TickControl =========================================================

/// Whether the pipeline loop should run another cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== ChannelPlatform =====================================================

/// `PlatformInput` fed by `PlatformEvent`s from another thread.
///
/// Owns the receiving end of the channel and folds everything it drains
/// into a `DeviceState`, which answers the pipeline's queries.
///
/// # Lifecycle
///
/// 1. **Construction**: `ChannelPlatform::with_capacity(n)` returns the
///    sender for the window thread
/// 2. **Drain**: `wait_for_cycle(timeout)` or `pump()` applies events up
///    to the next `CycleBoundary`
/// 3. **Poll**: the pipeline runs against the folded state
/// 4. **Reset**: `end_cycle()` clears per-cycle pointer motion
/// 5. **Shutdown**: `Closed` or a dropped sender yields `TickControl::Exit`
///
/// # Thread Safety
///
/// Lives on the pipeline thread. Only the `Sender` crosses threads.
pub struct ChannelPlatform {
    receiver: Receiver<PlatformEvent>,
    state: DeviceState,
}

impl ChannelPlatform {
    pub fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            state: DeviceState::new(),
        }
    }

    /// Creates a bounded channel and the platform reading from it.
    pub fn with_capacity(capacity: usize) -> (Sender<PlatformEvent>, Self) {
        let (sender, receiver) = bounded(capacity);
        (sender, Self::new(receiver))
    }

    //--- Event Intake -----------------------------------------------------

    /// Folds everything already queued without blocking.
    ///
    /// Stops early at a cycle boundary so events of the next cycle stay
    /// queued.
    pub fn pump(&mut self) -> TickControl {
        while let Ok(event) = self.receiver.try_recv() {
            match event {
                PlatformEvent::Device(device) => self.state.apply(&device),
                PlatformEvent::CycleBoundary => break,
                PlatformEvent::Closed => return TickControl::Exit,
            }
        }
        TickControl::Continue
    }

    /// Blocks until the next cycle boundary, folding device events as
    /// they arrive. A timeout also ends the wait so the caller can keep
    /// a fixed pace while the window is idle.
    pub fn wait_for_cycle(&mut self, timeout: Duration) -> TickControl {
        loop {
            match self.receiver.recv_timeout(timeout) {
                Ok(PlatformEvent::Device(device)) => self.state.apply(&device),
                Ok(PlatformEvent::CycleBoundary) => return TickControl::Continue,
                Ok(PlatformEvent::Closed) => return TickControl::Exit,
                Err(RecvTimeoutError::Timeout) => {
                    trace!(target: "platform::channel", "No cycle boundary within {:?}", timeout);
                    return TickControl::Continue;
                }
                Err(RecvTimeoutError::Disconnected) => return TickControl::Exit,
            }
        }
    }

    /// Resets per-cycle pointer motion. Call after each pipeline run.
    pub fn end_cycle(&mut self) {
        self.state.end_cycle();
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }
}

//=== PlatformInput =======================================================

impl PlatformInput for ChannelPlatform {
    fn keyboard_state(&self) -> Result<&[bool], PlatformError> {
        self.state.keyboard_state()
    }

    fn key_name(&self, scancode: usize) -> Option<&str> {
        self.state.key_name(scancode)
    }

    fn pointer_state(&self) -> Result<PointerState, PlatformError> {
        PlatformInput::pointer_state(&self.state)
    }

    fn first_gamepad(&self) -> Result<Option<GamepadId>, PlatformError> {
        PlatformInput::first_gamepad(&self.state)
    }

    fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> Result<i16, PlatformError> {
        PlatformInput::gamepad_axis(&self.state, id, axis)
    }

    fn gamepad_button(&self, id: GamepadId, button: GamepadButton) -> Result<bool, PlatformError> {
        PlatformInput::gamepad_button(&self.state, id, button)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::device::KeyCode;

    const WAIT: Duration = Duration::from_millis(10);

    #[test]
    fn pump_folds_queued_events() {
        let (tx, mut platform) = ChannelPlatform::with_capacity(8);
        tx.send(PlatformEvent::Device(DeviceEvent::KeyDown(KeyCode::KeyW)))
            .unwrap();

        assert_eq!(platform.pump(), TickControl::Continue);
        assert!(platform.state().is_key_down(KeyCode::KeyW));
    }

    #[test]
    fn pump_stops_at_cycle_boundary() {
        let (tx, mut platform) = ChannelPlatform::with_capacity(8);
        tx.send(PlatformEvent::Device(DeviceEvent::KeyDown(KeyCode::KeyW)))
            .unwrap();
        tx.send(PlatformEvent::CycleBoundary).unwrap();
        tx.send(PlatformEvent::Device(DeviceEvent::KeyDown(KeyCode::KeyS)))
            .unwrap();

        platform.pump();
        assert!(platform.state().is_key_down(KeyCode::KeyW));
        assert!(!platform.state().is_key_down(KeyCode::KeyS));

        platform.pump();
        assert!(platform.state().is_key_down(KeyCode::KeyS));
    }

    #[test]
    fn wait_returns_at_boundary() {
        let (tx, mut platform) = ChannelPlatform::with_capacity(8);
        tx.send(PlatformEvent::Device(DeviceEvent::PointerMoved { x: 0.0, y: 0.0 }))
            .unwrap();
        tx.send(PlatformEvent::Device(DeviceEvent::PointerMoved { x: 40.0, y: 0.0 }))
            .unwrap();
        tx.send(PlatformEvent::CycleBoundary).unwrap();

        assert_eq!(platform.wait_for_cycle(WAIT), TickControl::Continue);
        assert_eq!(platform.pointer_state().unwrap().delta_x, 40.0);

        platform.end_cycle();
        assert_eq!(platform.pointer_state().unwrap().delta_x, 0.0);
    }

    #[test]
    fn closed_or_disconnected_exits() {
        let (tx, mut platform) = ChannelPlatform::with_capacity(8);
        tx.send(PlatformEvent::Closed).unwrap();
        assert_eq!(platform.pump(), TickControl::Exit);

        drop(tx);
        assert_eq!(platform.wait_for_cycle(WAIT), TickControl::Exit);
    }

    #[test]
    fn idle_wait_times_out() {
        let (_tx, mut platform) = ChannelPlatform::with_capacity(8);
        assert_eq!(platform.wait_for_cycle(WAIT), TickControl::Continue);
    }
}
