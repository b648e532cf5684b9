//=========================================================================
// input-probe
//
// Runs the input pipeline against a binding document and prints the
// resulting Context.
//
// Modes:
//   scripted (default)  devices come from the command line
//   --window            devices come from a real winit window; one
//                       pipeline cycle per redraw on a worker thread
//
// Example:
//   input-probe --config bindings.json --key D --stick-lx -16384
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context as _, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{error, info};

//=== Internal Dependencies ===============================================

use input_aggregation::core::bindings::DEFAULT_BINDINGS_PATH;
use input_aggregation::core::input::device::{GamepadAxis, GamepadButton, GamepadId, KeyCode};
use input_aggregation::platform::{
    ChannelPlatform, InputWindow, ScriptedPlatform, TickControl, WinitInputBridge,
};
use input_aggregation::prelude::*;

//=== Constants ===========================================================

const STICK_FLAGS: [(&str, GamepadAxis); 6] = [
    ("stick-lx", GamepadAxis::LeftStickX),
    ("stick-ly", GamepadAxis::LeftStickY),
    ("stick-rx", GamepadAxis::RightStickX),
    ("stick-ry", GamepadAxis::RightStickY),
    ("trigger-l", GamepadAxis::TriggerLeft),
    ("trigger-r", GamepadAxis::TriggerRight),
];

const WINDOW_FRAME: Duration = Duration::from_millis(16);

//=== Entry Point =========================================================

fn main() -> Result<()> {
    env_logger::init();

    let matches = command().get_matches();
    let step = step_definition(&matches);

    if matches.get_flag("window") {
        return run_window(step);
    }

    let platform = scripted_platform(&matches)?;
    let cycles = matches.get_one::<u32>("cycles").copied().unwrap_or(1);
    let show_raw = matches.get_flag("raw");

    let pipeline = InputPollAllStep::new(&platform, Arc::new(LogFacade));
    let mut context = Context::new();
    for cycle in 1..=cycles {
        begin_cycle(&mut context);
        pipeline
            .execute(&step, &mut context)
            .with_context(|| format!("cycle {} failed", cycle))?;

        if cycles > 1 {
            println!("# cycle {}", cycle);
        }
        print_context(&context, show_raw);
    }
    Ok(())
}

//=== Command Line ========================================================

fn command() -> Command {
    let mut cmd = Command::new("input-probe")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run input aggregation cycles and print the resulting context")
        .arg(
            Arg::new("config")
                .long("config")
                .help("Binding document (defaults to config/input_aggregation.json)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("pointer-full-scale")
                .long("pointer-full-scale")
                .help("Pixels of pointer motion per cycle that read as full deflection")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .help("Hold a key by display name (e.g. D, Space, \"Left Shift\")")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("button")
                .long("button")
                .help("Hold a gamepad button (a, b, x, y, lb, rb, back, start)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("cycles")
                .long("cycles")
                .help("Number of cycles to run")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Also print raw device keys (input.*)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .help("Read devices from a window instead of the command line")
                .action(ArgAction::SetTrue),
        );

    for (flag, axis) in STICK_FLAGS {
        cmd = cmd.arg(
            Arg::new(flag)
                .long(flag)
                .help(format!("Raw i16 reading for {}", axis.config_name()))
                .allow_hyphen_values(true)
                .value_parser(value_parser!(i16)),
        );
    }
    cmd
}

fn step_definition(matches: &ArgMatches) -> StepDefinition {
    let config = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BINDINGS_PATH));

    let mut step = StepDefinition::new("input-probe", InputPollAllStep::PLUGIN_ID)
        .with_parameter("config_path", ParameterValue::String(config.display().to_string()));
    if let Some(scale) = matches.get_one::<f64>("pointer-full-scale") {
        step = step.with_parameter("pointer_full_scale", ParameterValue::Number(*scale));
    }
    step
}

fn scripted_platform(matches: &ArgMatches) -> Result<ScriptedPlatform> {
    let mut platform = ScriptedPlatform::new();

    for name in matches.get_many::<String>("key").into_iter().flatten() {
        let key = KeyCode::from_name(name).ok_or_else(|| anyhow!("unknown key: {}", name))?;
        platform.press(key);
    }

    let pad = GamepadId(0);
    let mut connected = false;
    let mut connect = |platform: &mut ScriptedPlatform| {
        if !connected {
            platform.connect_gamepad(pad);
            connected = true;
        }
    };

    for (flag, axis) in STICK_FLAGS {
        if let Some(value) = matches.get_one::<i16>(flag) {
            connect(&mut platform);
            platform.set_gamepad_axis(pad, axis, *value);
        }
    }

    for name in matches.get_many::<String>("button").into_iter().flatten() {
        let Some(button) = GamepadButton::from_config_name(name) else {
            bail!("unknown gamepad button: {}", name);
        };
        connect(&mut platform);
        platform.set_gamepad_button(pad, button, true);
    }

    Ok(platform)
}

//=== Cycle Status ========================================================

/// Clears the previous cycle's failure so `input.poll_error` only shows
/// while the latest cycle failed. Everything else carries over, including
/// the gamepad connection flag used for connect/disconnect logging.
fn begin_cycle(context: &mut Context) {
    context.remove(keys::POLL_ERROR);
}

//=== Output ==============================================================

fn print_context(context: &Context, show_raw: bool) {
    let mut entries: Vec<(&str, &Value)> = context
        .iter()
        .filter(|(key, _)| show_raw || is_reported(key))
        .filter(|(key, _)| *key != keys::BINDINGS_CACHE)
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
}

fn is_reported(key: &str) -> bool {
    !key.starts_with("input.") || key == keys::POLL_COMPLETE || key == keys::POLL_ERROR
}

//=== Window Mode =========================================================

fn run_window(step: StepDefinition) -> Result<()> {
    let (sender, mut platform) = ChannelPlatform::with_capacity(256);

    let worker = thread::spawn(move || {
        let logger: Arc<dyn Logger> = Arc::new(LogFacade);
        let mut context = Context::new();

        while platform.wait_for_cycle(WINDOW_FRAME) == TickControl::Continue {
            begin_cycle(&mut context);
            let result = InputPollAllStep::new(&platform, Arc::clone(&logger))
                .execute(&step, &mut context);
            match result {
                Ok(()) => print_context(&context, false),
                Err(e) => error!(target: "input-probe", "{}", e),
            }
            platform.end_cycle();
        }
        info!(target: "input-probe", "Pipeline thread exiting");
    });

    InputWindow::new("input-probe", WinitInputBridge::new(sender))
        .run()
        .context("window event loop failed")?;

    if worker.join().is_err() {
        bail!("pipeline thread panicked");
    }
    Ok(())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        command().get_matches_from(std::iter::once("input-probe").chain(args.iter().copied()))
    }

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn config_flag_becomes_step_parameter() {
        let step = step_definition(&parse(&["--config", "bindings.json"]));
        assert_eq!(
            step.parameters.get("config_path"),
            Some(&ParameterValue::String("bindings.json".into()))
        );
    }

    #[test]
    fn scripted_devices_from_flags() {
        let matches = parse(&["--key", "D", "--stick-lx", "-16384", "--button", "a"]);
        let platform = scripted_platform(&matches).unwrap();

        assert!(platform.keyboard_state().unwrap()[KeyCode::KeyD.index()]);
        assert_eq!(platform.first_gamepad().unwrap(), Some(GamepadId(0)));
        assert_eq!(
            platform.gamepad_axis(GamepadId(0), GamepadAxis::LeftStickX).unwrap(),
            -16384
        );
        assert!(platform.gamepad_button(GamepadId(0), GamepadButton::South).unwrap());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let matches = parse(&["--key", "NotAKey"]);
        assert!(scripted_platform(&matches).is_err());
    }

    #[test]
    fn raw_keys_are_hidden_by_default() {
        assert!(is_reported("player.move_x"));
        assert!(is_reported(keys::POLL_COMPLETE));
        assert!(!is_reported(keys::KEYBOARD_STATE));
    }

    #[test]
    fn new_cycle_clears_previous_failure() {
        let mut platform = ScriptedPlatform::new();
        platform.fail_keyboard("keyboard unplugged");
        let step = StepDefinition::new("probe", InputPollAllStep::PLUGIN_ID);
        let mut context = Context::new();
        cache_bindings(&mut context, serde_json::json!({ "inputBindings": {} }));

        begin_cycle(&mut context);
        let failed = InputPollAllStep::new(&platform, Arc::new(LogFacade)).execute(&step, &mut context);
        assert!(failed.is_err());
        assert!(context.contains(keys::POLL_ERROR));

        let platform = ScriptedPlatform::new();
        begin_cycle(&mut context);
        InputPollAllStep::new(&platform, Arc::new(LogFacade))
            .execute(&step, &mut context)
            .unwrap();

        assert!(context.get(keys::POLL_COMPLETE, false));
        assert!(!context.contains(keys::POLL_ERROR));
    }
}
