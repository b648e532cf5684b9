use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use input_aggregation::core::bindings::BindingResolver;
use input_aggregation::platform::{ChannelPlatform, PlatformEvent};
use input_aggregation::prelude::*;

//=== Helpers =============================================================

fn bindings() -> serde_json::Value {
    json!({ "inputBindings": {
        "axes": {
            "move_x": {
                "sources": [
                    { "type": "key", "key": "A", "scale": -1.0 },
                    { "type": "key", "key": "D", "scale": 1.0 },
                    { "type": "gamepad_axis", "axis": "left_stick_x", "deadzone": 0.2 }
                ],
                "outputs": ["player.move_x"]
            },
            "look_x": {
                "sources": [ { "type": "mouse", "axis": "x" } ],
                "outputs": ["camera.look_x"]
            }
        },
        "buttons": {
            "fire": {
                "sources": [
                    { "type": "mouse_button", "button": "left" },
                    { "type": "gamepad_button", "button": "trigger_right" }
                ],
                "outputs": ["player.fire"]
            }
        }
    } })
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("create temp file");
    std::fs::write(file.path(), contents).expect("write config");
    file
}

fn step_with_config(path: &Path) -> StepDefinition {
    StepDefinition::new("poll", InputPollAllStep::PLUGIN_ID).with_parameter(
        "config_path",
        ParameterValue::String(path.display().to_string()),
    )
}

fn run(platform: &dyn PlatformInput, step: &StepDefinition, context: &mut Context) -> Result<(), InputError> {
    InputPollAllStep::new(platform, Arc::new(LogFacade)).execute(step, context)
}

//=== File Configuration ==================================================

#[test]
fn keyboard_axis_from_config_file() {
    let file = write_config(&bindings().to_string());
    let mut platform = ScriptedPlatform::new();
    platform.press(KeyCode::KeyD);
    let mut context = Context::new();

    run(&platform, &step_with_config(file.path()), &mut context).expect("cycle succeeds");

    assert_eq!(context.get("player.move_x", 0.0f32), 1.0);
    assert_eq!(context.try_get::<bool>("player.fire"), Some(false));
    assert!(context.get(keys::POLL_COMPLETE, false));
}

#[test]
fn gamepad_stick_with_deadzone() {
    let file = write_config(&bindings().to_string());
    let mut platform = ScriptedPlatform::new();
    platform.connect_gamepad(GamepadId(0));
    platform.set_gamepad_axis(GamepadId(0), GamepadAxis::LeftStickX, -16384);
    let mut context = Context::new();

    run(&platform, &step_with_config(file.path()), &mut context).expect("cycle succeeds");

    let move_x = context.get("player.move_x", 0.0f32);
    assert!((move_x + 0.375).abs() < 1e-6, "got {move_x}");
}

#[test]
fn missing_config_reports_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("bindings.json");
    let platform = ScriptedPlatform::new();
    let mut context = Context::new();

    let err = run(&platform, &step_with_config(&missing), &mut context).unwrap_err();

    assert!(err.is_config_load());
    assert!(err.to_string().starts_with("input.axis.combine"));
    assert_eq!(context.try_get::<bool>(keys::POLL_COMPLETE), Some(false));
    let message: String = context.get(keys::POLL_ERROR, String::new());
    assert!(message.contains("bindings.json"), "got {message}");
}

#[test]
fn malformed_config_is_a_parse_error() {
    let file = write_config("{ \"inputBindings\": { \"axes\": ");
    let platform = ScriptedPlatform::new();
    let mut context = Context::new();

    let err = run(&platform, &step_with_config(file.path()), &mut context).unwrap_err();

    assert!(err.is_config_load());
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn session_override_wins_over_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("never_read.json");
    let mut platform = ScriptedPlatform::new();
    platform.press(KeyCode::KeyA);
    let mut context = Context::new();
    cache_bindings(&mut context, bindings());

    run(&platform, &step_with_config(&missing), &mut context).expect("cycle succeeds");

    assert_eq!(context.get("player.move_x", 0.0f32), -1.0);
}

#[test]
fn malformed_entries_do_not_block_sibling_bindings() {
    let mut platform = ScriptedPlatform::new();
    platform.press(KeyCode::KeyD);
    let mut context = Context::new();
    cache_bindings(
        &mut context,
        json!({ "inputBindings": {
            "axes": {
                "broken": "oops",
                "move_x": {
                    "sources": [ { "key": "A" }, { "type": "key", "key": "D" } ],
                    "outputs": ["player.move_x", 5]
                }
            },
            "buttons": {
                "jump": { "outputs": ["player.jump"] }
            }
        } }),
    );
    let step = StepDefinition::new("poll", InputPollAllStep::PLUGIN_ID);

    run(&platform, &step, &mut context).expect("cycle succeeds");

    assert_eq!(context.try_get::<f32>("player.move_x"), Some(1.0));
    assert_eq!(context.try_get::<bool>("player.jump"), None);
    assert!(context.get(keys::POLL_COMPLETE, false));
    assert!(!context.contains(keys::POLL_ERROR));
}

#[test]
fn shipped_default_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/input_aggregation.json");
    let context = Context::new();

    let resolved = BindingResolver::new(path)
        .resolve(AxisCombineStep::PLUGIN_ID, &context)
        .expect("default config loads");

    assert!(resolved.document.axes().is_some_and(|a| a.contains_key("move_x")));
    assert!(resolved.document.buttons().is_some_and(|b| b.contains_key("jump")));
}

//=== Event-Fed Platform ==================================================

#[test]
fn channel_platform_drives_full_cycles() {
    let (tx, mut platform) = ChannelPlatform::with_capacity(32);
    let send = |event: DeviceEvent| tx.send(PlatformEvent::Device(event)).expect("send event");
    let mut context = Context::new();
    cache_bindings(&mut context, bindings());
    let step = StepDefinition::new("poll", InputPollAllStep::PLUGIN_ID);

    //--- Cycle 1: pointer moves 50px, trigger pulled ----------------------
    send(DeviceEvent::PointerMoved { x: 100.0, y: 100.0 });
    send(DeviceEvent::PointerMoved { x: 150.0, y: 100.0 });
    send(DeviceEvent::GamepadConnected(GamepadId(4)));
    send(DeviceEvent::GamepadAxisMoved {
        id: GamepadId(4),
        axis: GamepadAxis::TriggerRight,
        value: i16::MAX,
    });
    tx.send(PlatformEvent::CycleBoundary).expect("send boundary");

    platform.pump();
    run(&platform, &step, &mut context).expect("cycle 1");
    platform.end_cycle();

    assert_eq!(context.get("camera.look_x", 0.0f32), 0.5);
    assert!(context.get("player.fire", false));

    //--- Cycle 2: no motion, trigger released ------------------------------
    send(DeviceEvent::GamepadAxisMoved {
        id: GamepadId(4),
        axis: GamepadAxis::TriggerRight,
        value: 0,
    });
    tx.send(PlatformEvent::CycleBoundary).expect("send boundary");

    platform.pump();
    run(&platform, &step, &mut context).expect("cycle 2");

    assert_eq!(context.get("camera.look_x", 1.0f32), 0.0);
    assert!(!context.get("player.fire", true));
    assert_eq!(context.get(keys::POINTER_POSITION_X, 0.0f32), 150.0);
}
