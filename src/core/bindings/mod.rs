//=========================================================================
// Binding Configuration
//=========================================================================
//
// Declarative document mapping logical axis/button names to device
// sources and output keys.
//
// Shape:
// ```text
// { "inputBindings": {
//     "axes":    { "<name>": { "sources": [...], "outputs": [...] } },
//     "buttons": { "<name>": { "sources": [...], "outputs": [...] } } } }
// ```
//
// Sources are tagged by `type`. Unknown types deserialize to
// `Unsupported` and contribute nothing. Bindings are kept in `BTreeMap`s
// so every cycle processes them in the same (name-sorted) order.
//
// Malformed entries are skipped, not fatal:
//   binding without a `sources` array → dropped from its section
//   source without `type`             → dropped from its binding
//   non-string output                 → dropped from `outputs`
// Only an unreadable document or a non-object section fails the load.
//
//=========================================================================

//=== Module Declarations =================================================

mod resolver;

//=== Public API ==========================================================

pub use resolver::{
    cache_bindings, BindingResolver, BindingSource, ResolvedBindings, DEFAULT_BINDINGS_PATH,
};

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

//=== Defaults ============================================================

/// Trigger threshold for analog-as-digital gamepad buttons.
pub const DEFAULT_TRIGGER_THRESHOLD: f32 = 0.5;

fn default_scale() -> f32 {
    1.0
}

fn default_threshold() -> f32 {
    DEFAULT_TRIGGER_THRESHOLD
}

//=== Lenient Entries =====================================================

fn lenient_bindings<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Some(raw) = Option::<BTreeMap<String, Json>>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let bindings = raw
        .into_iter()
        .filter_map(|(name, value)| match serde_json::from_value(value) {
            Ok(binding) => Some((name, binding)),
            Err(e) => {
                debug!(target: "bindings", "Skipping binding '{}': {}", name, e);
                None
            }
        })
        .collect();
    Ok(Some(bindings))
}

fn lenient_sources<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Vec::<Json>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(source) => Some(source),
            Err(e) => {
                debug!(target: "bindings", "Skipping source: {}", e);
                None
            }
        })
        .collect())
}

fn string_outputs<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Json::Array(items) = Json::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Json::String(key) => Some(key),
            _ => None,
        })
        .collect())
}

//=== BindingDocument =====================================================

/// Root of a binding configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindingDocument {
    #[serde(rename = "inputBindings", default)]
    pub input_bindings: Option<InputBindings>,
}

impl BindingDocument {
    /// The `axes` section, if the document has one.
    pub fn axes(&self) -> Option<&BTreeMap<String, AxisBinding>> {
        self.input_bindings.as_ref()?.axes.as_ref()
    }

    /// The `buttons` section, if the document has one.
    pub fn buttons(&self) -> Option<&BTreeMap<String, ButtonBinding>> {
        self.input_bindings.as_ref()?.buttons.as_ref()
    }
}

/// The two binding collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputBindings {
    #[serde(default, deserialize_with = "lenient_bindings")]
    pub axes: Option<BTreeMap<String, AxisBinding>>,
    #[serde(default, deserialize_with = "lenient_bindings")]
    pub buttons: Option<BTreeMap<String, ButtonBinding>>,
}

//=== Axis Bindings =======================================================

/// One logical axis: weighted sum of its sources, fanned out to `outputs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisBinding {
    #[serde(deserialize_with = "lenient_sources")]
    pub sources: Vec<AxisSource>,
    #[serde(default, deserialize_with = "string_outputs")]
    pub outputs: Vec<String>,
}

/// A single contribution to an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSource {
    #[serde(flatten)]
    pub input: AxisInput,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub deadzone: f32,
}

impl AxisSource {
    /// Source with default shaping (scale 1, no invert, no deadzone).
    pub fn new(input: AxisInput) -> Self {
        Self {
            input,
            scale: default_scale(),
            invert: false,
            deadzone: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        self.deadzone = deadzone;
        self
    }
}

/// Device side of an axis source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AxisInput {
    /// Keyboard key: 1.0 while pressed.
    Key {
        #[serde(default)]
        key: String,
    },

    /// Pointer motion along `"x"` or `"y"`.
    #[serde(alias = "mouse")]
    Pointer {
        #[serde(default)]
        axis: String,
    },

    /// Normalized gamepad axis, 0 while disconnected.
    GamepadAxis {
        #[serde(default)]
        axis: String,
    },

    #[serde(other)]
    Unsupported,
}

//=== Button Bindings =====================================================

/// One logical button: OR of its sources, fanned out to `outputs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonBinding {
    #[serde(deserialize_with = "lenient_sources")]
    pub sources: Vec<ButtonSource>,
    #[serde(default, deserialize_with = "string_outputs")]
    pub outputs: Vec<String>,
}

/// A single candidate for a button press.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonSource {
    #[serde(flatten)]
    pub input: ButtonInput,
    /// Only consulted for trigger-as-button sources.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

impl ButtonSource {
    pub fn new(input: ButtonInput) -> Self {
        Self {
            input,
            threshold: default_threshold(),
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

/// Device side of a button source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonInput {
    Key {
        #[serde(default)]
        key: String,
    },

    #[serde(alias = "mouse_button")]
    PointerButton {
        #[serde(default)]
        button: String,
    },

    /// Digital button by name, or `trigger_left` / `trigger_right`
    /// compared against the source threshold.
    GamepadButton {
        #[serde(default)]
        button: String,
    },

    #[serde(other)]
    Unsupported,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "inputBindings": {
            "axes": {
                "move_x": {
                    "sources": [
                        { "type": "key", "key": "A", "scale": -1.0 },
                        { "type": "key", "key": "D" },
                        { "type": "gamepad_axis", "axis": "left_stick_x", "deadzone": 0.2 },
                        { "type": "mouse", "axis": "x", "invert": true }
                    ],
                    "outputs": ["player.move_x", "ui.cursor_x"]
                }
            },
            "buttons": {
                "fire": {
                    "sources": [
                        { "type": "pointer_button", "button": "left" },
                        { "type": "gamepad_button", "button": "trigger_right", "threshold": 0.3 },
                        { "type": "gamepad_button", "button": "a" }
                    ],
                    "outputs": ["player.fire"]
                }
            }
        }
    }"#;

    #[test]
    fn parses_axes_with_defaults() {
        let doc: BindingDocument = serde_json::from_str(SAMPLE).unwrap();
        let move_x = &doc.axes().unwrap()["move_x"];

        assert_eq!(move_x.outputs, vec!["player.move_x", "ui.cursor_x"]);
        assert_eq!(move_x.sources.len(), 4);

        let a = &move_x.sources[0];
        assert_eq!(a.input, AxisInput::Key { key: "A".into() });
        assert_eq!(a.scale, -1.0);
        assert!(!a.invert);
        assert_eq!(a.deadzone, 0.0);

        assert_eq!(move_x.sources[1].scale, 1.0);
        assert_eq!(move_x.sources[2].deadzone, 0.2);
        assert_eq!(move_x.sources[3].input, AxisInput::Pointer { axis: "x".into() });
        assert!(move_x.sources[3].invert);
    }

    #[test]
    fn parses_buttons_with_threshold_default() {
        let doc: BindingDocument = serde_json::from_str(SAMPLE).unwrap();
        let fire = &doc.buttons().unwrap()["fire"];

        assert_eq!(
            fire.sources[0].input,
            ButtonInput::PointerButton { button: "left".into() }
        );
        assert_eq!(fire.sources[1].threshold, 0.3);
        assert_eq!(fire.sources[2].threshold, DEFAULT_TRIGGER_THRESHOLD);
    }

    #[test]
    fn unknown_source_type_is_tolerated() {
        let doc: BindingDocument = serde_json::from_str(
            r#"{ "inputBindings": { "axes": { "zoom": {
                "sources": [ { "type": "touch_pinch", "finger": 2 } ],
                "outputs": ["camera.zoom"] } } } }"#,
        )
        .unwrap();

        assert_eq!(doc.axes().unwrap()["zoom"].sources[0].input, AxisInput::Unsupported);
    }

    #[test]
    fn source_without_type_is_skipped() {
        let doc: BindingDocument = serde_json::from_str(
            r#"{ "inputBindings": { "axes": { "move_x": {
                "sources": [ { "key": "A", "scale": -1.0 }, { "type": "key", "key": "D" } ],
                "outputs": ["player.move_x"] } } } }"#,
        )
        .unwrap();

        let sources = &doc.axes().unwrap()["move_x"].sources;
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].input, AxisInput::Key { key: "D".into() });
    }

    #[test]
    fn non_string_outputs_are_skipped() {
        let doc: BindingDocument = serde_json::from_str(
            r#"{ "inputBindings": { "buttons": { "jump": {
                "sources": [ { "type": "key", "key": "Space" } ],
                "outputs": ["player.jump", 5, null] } } } }"#,
        )
        .unwrap();

        assert_eq!(doc.buttons().unwrap()["jump"].outputs, vec!["player.jump"]);
    }

    #[test]
    fn binding_without_sources_is_dropped() {
        let doc: BindingDocument = serde_json::from_str(
            r#"{ "inputBindings": { "axes": {
                "broken": "oops",
                "no_sources": { "outputs": ["a"] },
                "scalar_sources": { "sources": 3, "outputs": ["b"] },
                "move_x": { "sources": [ { "type": "key", "key": "D" } ], "outputs": ["c"] }
            } } }"#,
        )
        .unwrap();

        let axes = doc.axes().unwrap();
        assert_eq!(axes.keys().collect::<Vec<_>>(), vec!["move_x"]);
    }

    #[test]
    fn non_object_section_still_fails() {
        let result = serde_json::from_str::<BindingDocument>(r#"{ "inputBindings": { "axes": 5 } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_sections_are_none() {
        let doc: BindingDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.axes().is_none());
        assert!(doc.buttons().is_none());

        let doc: BindingDocument =
            serde_json::from_str(r#"{ "inputBindings": { "buttons": {} } }"#).unwrap();
        assert!(doc.axes().is_none());
        assert!(doc.buttons().unwrap().is_empty());
    }
}
