use serde::{Deserialize, Serialize};

use crate::core::CENTER_PAD;
use crate::error::{ViewerError, ViewerResult};
use crate::render::SliderSpec;

/// Per-widget configuration.
///
/// Serializable so hosts can ship it alongside their own settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Prefix for scaffold classes and rewritten `node`/`edge`/`cluster` classes.
    #[serde(default = "default_class_namespace")]
    pub class_namespace: String,
    #[serde(default = "default_center_pad")]
    pub center_pad: f64,
    #[serde(default)]
    pub zoom_slider: SliderSpec,
    #[serde(default = "default_auto_center")]
    pub auto_center: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            class_namespace: default_class_namespace(),
            center_pad: default_center_pad(),
            zoom_slider: SliderSpec::default(),
            auto_center: default_auto_center(),
        }
    }
}

impl ViewerConfig {
    #[must_use]
    pub fn with_class_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.class_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_center_pad(mut self, center_pad: f64) -> Self {
        self.center_pad = center_pad;
        self
    }

    #[must_use]
    pub fn with_zoom_slider(mut self, zoom_slider: SliderSpec) -> Self {
        self.zoom_slider = zoom_slider;
        self
    }

    #[must_use]
    pub fn with_auto_center(mut self, auto_center: bool) -> Self {
        self.auto_center = auto_center;
        self
    }

    pub fn validate(&self) -> ViewerResult<()> {
        let namespace = &self.class_namespace;
        if namespace.is_empty()
            || !namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ViewerError::InvalidConfig(format!(
                "class namespace `{namespace}` must be non-empty ASCII alphanumerics, `-` or `_`"
            )));
        }
        if !self.center_pad.is_finite() || self.center_pad <= 0.0 || self.center_pad > 1.0 {
            return Err(ViewerError::InvalidConfig(
                "center pad must be finite and in (0, 1]".to_owned(),
            ));
        }
        let slider = self.zoom_slider;
        if !slider.min.is_finite() || !slider.max.is_finite() || !slider.step.is_finite() {
            return Err(ViewerError::InvalidConfig(
                "zoom slider bounds must be finite".to_owned(),
            ));
        }
        if slider.min <= 0.0 || slider.max <= slider.min || slider.step <= 0.0 {
            return Err(ViewerError::InvalidConfig(
                "zoom slider requires 0 < min < max and step > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_class_namespace() -> String {
    "graphviz-view".to_owned()
}

fn default_center_pad() -> f64 {
    CENTER_PAD
}

fn default_auto_center() -> bool {
    true
}
