//=========================================================================
// Deadzone Normalization
//=========================================================================
//
//   v ← clamp(v, -1, 1)
//   |v| <  d  →  0
//   |v| >= d  →  (v - sign(v)·d) / (1 - d)
//
// The post-deadzone range is linearly restored to [-1, 1].
//
//=========================================================================

/// Applies deadzone `deadzone` (in `[0, 1)`) to `value`.
///
/// Out-of-range deadzones are clamped into `[0, 1)` so the result is
/// always finite.
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    let clamped = value.clamp(-1.0, 1.0);
    let deadzone = deadzone.clamp(0.0, MAX_DEADZONE);

    if clamped.abs() < deadzone {
        return 0.0;
    }

    if clamped > 0.0 {
        (clamped - deadzone) / (1.0 - deadzone)
    } else {
        (clamped + deadzone) / (1.0 - deadzone)
    }
}

/// Largest usable deadzone; 1.0 would divide by zero.
const MAX_DEADZONE: f32 = 0.999;

//=========================================================================
// Unit Tests
//=========================================================================
