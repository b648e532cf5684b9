//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges platform layers (winit, scripted replays, native APIs) with the
// poll steps.
//
// This module defines the contract between platform implementations and
// core logic, so platform backends can be swapped without changing the
// pipeline.
//
// Components:
// - `interface`: query trait, pointer reading, device events (the contract)
// - `device_state`: event-folded device state shared by platform backends
//
//=========================================================================

//=== Module Declarations =================================================

mod device_state;
mod interface;

//=== Public API ==========================================================

pub use device_state::DeviceState;
pub use interface::{DeviceEvent, PlatformInput, PointerState};
