use tracing::{debug, trace};

use crate::core::{BoundingBox, CENTER_PAD, Size, ViewportTransform, fit_transform};
use crate::render::DisplaySurface;

use super::GestureEvent;

/// Owns the pan/zoom transform of the rendered graphic.
///
/// Gestures, slider input, fits and post-render restores all end in
/// `apply_transform`, which is the only place that records the applied
/// transform and pushes it to the surface and the slider.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    live: ViewportTransform,
    last_applied: Option<ViewportTransform>,
    auto_center: bool,
    intrinsic_size: Option<Size>,
    center_pad: f64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(true, CENTER_PAD)
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(auto_center: bool, center_pad: f64) -> Self {
        Self {
            live: ViewportTransform::default(),
            last_applied: None,
            auto_center,
            intrinsic_size: None,
            center_pad,
        }
    }

    /// Transform the gesture recognizer currently tracks.
    #[must_use]
    pub fn live_transform(&self) -> ViewportTransform {
        self.live
    }

    #[must_use]
    pub fn last_applied(&self) -> Option<ViewportTransform> {
        self.last_applied
    }

    #[must_use]
    pub fn intrinsic_size(&self) -> Option<Size> {
        self.intrinsic_size
    }

    /// Scale of the last applied transform.
    #[must_use]
    pub fn zoom_level(&self) -> Option<f64> {
        self.last_applied.map(|transform| transform.scale)
    }

    /// Zooms around the current translate. Returns `false` for a non-positive
    /// or non-finite level, leaving state untouched.
    pub fn set_zoom_level<S: DisplaySurface>(&mut self, value: f64, surface: &mut S) -> bool {
        self.apply_transform(self.live.with_scale(value), surface)
    }

    #[must_use]
    pub fn auto_center(&self) -> bool {
        self.auto_center
    }

    /// Enabling auto-center fits immediately, discarding manual pan/zoom.
    pub fn set_auto_center<S: DisplaySurface>(&mut self, auto_center: bool, surface: &mut S) {
        self.auto_center = auto_center;
        if auto_center {
            self.fit(None, surface);
        }
    }

    /// Reconciles the viewport after a new graphic was installed.
    pub fn on_render_complete<S: DisplaySurface>(&mut self, size: Option<Size>, surface: &mut S) {
        self.intrinsic_size = size;

        // The engine's output origin is the bottom-left corner, so an unset
        // translate starts one graphic height down.
        let translate = match self.last_applied {
            Some(applied) => applied.translate(),
            None if self.live.has_translate() => self.live.translate(),
            None => (0.0, size.map_or(0.0, |size| size.height)),
        };
        let scale = self
            .last_applied
            .map_or(self.live.scale, |applied| applied.scale);
        let restored = ViewportTransform::new(translate.0, translate.1, scale);

        if restored.is_valid() {
            self.live = restored;
            surface.set_group_transform(&restored.to_svg_transform());
        }

        if self.auto_center {
            self.fit(None, surface);
        } else {
            self.apply_transform(self.live, surface);
        }
    }

    /// Centers the graphic in `explicit` (a resize notification) or, when
    /// absent, in the container's measured box. Returns `false` when nothing
    /// was applied because the geometry is unknown or degenerate.
    pub fn fit<S: DisplaySurface>(
        &mut self,
        explicit: Option<BoundingBox>,
        surface: &mut S,
    ) -> bool {
        let Some(size) = self.intrinsic_size else {
            return false;
        };
        let container = explicit.unwrap_or_else(|| surface.container_box());
        let Some(transform) = fit_transform(container, size, self.center_pad) else {
            return false;
        };

        debug!(
            container_width = container.width,
            container_height = container.height,
            scale = transform.scale,
            "fit graphic to container"
        );
        self.apply_transform(transform, surface)
    }

    /// Handles one gesture frame. Frames with a NaN translate or a zero scale
    /// are transient recognizer noise and are dropped without side effects.
    pub fn on_gesture<S: DisplaySurface>(
        &mut self,
        event: GestureEvent,
        surface: &mut S,
    ) -> bool {
        self.apply_transform(event.transform(), surface)
    }

    fn apply_transform<S: DisplaySurface>(
        &mut self,
        transform: ViewportTransform,
        surface: &mut S,
    ) -> bool {
        if !transform.is_valid() {
            return false;
        }

        self.live = transform;
        self.last_applied = Some(transform);
        surface.set_group_transform(&transform.to_svg_transform());
        surface.set_slider_value(transform.scale);
        trace!(
            translate_x = transform.translate_x,
            translate_y = transform.translate_y,
            scale = transform.scale,
            "viewport transform applied"
        );
        true
    }
}
