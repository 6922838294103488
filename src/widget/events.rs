use serde::{Deserialize, Serialize};

/// `input` event of the zoom slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderInput {
    pub value: f64,
}

/// `change` event of the center toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleChange {
    pub checked: bool,
}
