//=========================================================================
// Core
//
// Platform-independent half of the input pipeline.
//
// Modules:
// - `context`: shared key/value store a cycle reads and writes
// - `steps`: step contract, step definitions, logging seam
// - `bindings`: binding document schema and resolution
// - `input`: poll and combine steps, device identifiers
// - `pipeline`: the composite `input.poll.all` step
// - `platform_bridge`: what a platform backend must provide
//
//=========================================================================

//=== Module Declarations =================================================

pub mod bindings;
pub mod context;
pub mod input;
pub mod pipeline;
pub mod platform_bridge;
pub mod steps;
