use serde::Serialize;
use serde_json::{Map, Value};

/// Explicit size hints supplied by the host alongside the payload.
///
/// Values are CSS lengths. Numeric metadata is interpreted as pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl RenderOptions {
    #[must_use]
    pub fn new(width: Option<String>, height: Option<String>) -> Self {
        Self { width, height }
    }

    /// Reads `width`/`height` from host metadata, ignoring anything else.
    #[must_use]
    pub fn from_metadata(metadata: &Map<String, Value>) -> Self {
        Self {
            width: metadata.get("width").and_then(css_length),
            height: metadata.get("height").and_then(css_length),
        }
    }
}

fn css_length(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => number
            .as_f64()
            .filter(|value| value.is_finite() && *value != 0.0)
            .map(px),
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        _ => None,
    }
}

pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}
