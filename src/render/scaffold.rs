use serde::{Deserialize, Serialize};

/// Range input backing the zoom control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderSpec {
    fn default() -> Self {
        Self {
            min: 0.0001,
            max: 10.0,
            step: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleSpec {
    pub label: String,
    pub checked: bool,
}

/// Static DOM layout built once per widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaffold {
    pub root_class: String,
    pub graph_class: String,
    pub tools_class: String,
    pub zoom_label: String,
    pub zoom_slider: SliderSpec,
    pub center_toggle: ToggleSpec,
}

impl Scaffold {
    #[must_use]
    pub fn new(namespace: &str, zoom_slider: SliderSpec, auto_center: bool) -> Self {
        Self {
            root_class: namespace.to_owned(),
            graph_class: format!("{namespace}-graph"),
            tools_class: format!("{namespace}-tools"),
            zoom_label: "Zoom".to_owned(),
            zoom_slider,
            center_toggle: ToggleSpec {
                label: "Center".to_owned(),
                checked: auto_center,
            },
        }
    }
}
