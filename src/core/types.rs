use serde::{Deserialize, Serialize};

/// Intrinsic size of a rendered graphic, as declared by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `true` when both dimensions are finite and non-zero.
    #[must_use]
    pub fn is_measurable(self) -> bool {
        is_measurable_extent(self.width) && is_measurable_extent(self.height)
    }
}

/// Box a graphic is fitted into: a resize notification or the container's
/// measured client rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_measurable(self) -> bool {
        is_measurable_extent(self.width) && is_measurable_extent(self.height)
    }
}

fn is_measurable_extent(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

/// Affine transform applied to the rendered graphic's root group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewportTransform {
    #[must_use]
    pub fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate_x,
            translate_y,
            scale,
        }
    }

    #[must_use]
    pub fn translate(self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn has_translate(self) -> bool {
        self.translate_x != 0.0 || self.translate_y != 0.0
    }

    /// Translate must be finite and scale finite and strictly positive.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.translate_x.is_finite()
            && self.translate_y.is_finite()
            && self.scale.is_finite()
            && self.scale > 0.0
    }

    /// Value for the SVG `transform` attribute of the root group.
    #[must_use]
    pub fn to_svg_transform(self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}
