//=========================================================================
// Well-Known Context Keys
//=========================================================================
//
// Dotted paths written by poll steps and the orchestrator.
// Gameplay code reads the binding output keys it configured itself;
// everything here is the raw snapshot and status contract.
//
//=========================================================================

//--- Keyboard ------------------------------------------------------------

/// Sparse `{ "<KeyName>": true }` map of pressed keys.
pub const KEYBOARD_STATE: &str = "input.keyboard.state";
/// Total number of queryable keys.
pub const KEYBOARD_NUM_KEYS: &str = "input.keyboard.num_keys";

//--- Pointer -------------------------------------------------------------

/// Per-cycle motion, normalized by the pointer poll's full scale.
pub const POINTER_X: &str = "input.pointer.x";
pub const POINTER_Y: &str = "input.pointer.y";
/// Absolute position in window pixels.
pub const POINTER_POSITION_X: &str = "input.pointer.position_x";
pub const POINTER_POSITION_Y: &str = "input.pointer.position_y";
pub const POINTER_LEFT: &str = "input.pointer.left";
pub const POINTER_MIDDLE: &str = "input.pointer.middle";
pub const POINTER_RIGHT: &str = "input.pointer.right";

//--- Gamepad -------------------------------------------------------------

pub const GAMEPAD_CONNECTED: &str = "input.gamepad.connected";

//--- Bindings & Status ---------------------------------------------------

/// Session override for the binding configuration document.
pub const BINDINGS_CACHE: &str = "input.aggregation.config";
pub const POLL_COMPLETE: &str = "input.poll_complete";
/// Present only after a failed cycle.
pub const POLL_ERROR: &str = "input.poll_error";
