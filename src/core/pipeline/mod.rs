//=========================================================================
// Input Pipeline
//
// Composite step that runs one complete input cycle.
//
// Order (fixed):
// ```text
//   input.keyboard.poll ─> input.pointer.poll ─> input.gamepad.poll
//        ─> input.axis.combine ─> input.button.combine
// ```
//
// Combine steps read what the poll steps just wrote, so the order is part
// of the contract. The first failure aborts the cycle.
//
//=========================================================================

//=== Submodules ==========================================================

mod orchestrator;

//=== Public Exports ======================================================

pub use orchestrator::InputPollAllStep;
