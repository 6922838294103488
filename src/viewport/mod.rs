mod controller;

pub use controller::ViewportController;

use serde::{Deserialize, Serialize};

use crate::core::ViewportTransform;

/// One frame of the gesture recognizer (drag, wheel or pinch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub translate: (f64, f64),
    pub scale: f64,
}

impl GestureEvent {
    #[must_use]
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate: (translate_x, translate_y),
            scale,
        }
    }

    #[must_use]
    pub fn transform(self) -> ViewportTransform {
        ViewportTransform::new(self.translate.0, self.translate.1, self.scale)
    }
}
