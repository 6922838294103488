mod recording_surface;
mod scaffold;

pub use recording_surface::RecordingSurface;
pub use scaffold::{Scaffold, SliderSpec, ToggleSpec};

use crate::core::BoundingBox;

/// DOM/SVG capabilities the widget drives.
///
/// Implementations own the widget's subtree: a graphic container holding the
/// installed `<svg>`, and a toolbar with the zoom slider and center toggle.
/// Writes that target the root group are no-ops while no graphic is installed.
pub trait DisplaySurface {
    fn build_scaffold(&mut self, scaffold: &Scaffold);

    /// (Re)binds gesture recognition to the graphic container.
    fn bind_gestures(&mut self);

    /// Replaces the container's content with post-processed SVG markup.
    fn install_markup(&mut self, markup: &str);

    /// Applies CSS `min-width`/`min-height` to the installed `<svg>`; `None` unsets.
    fn set_min_size(&mut self, width: Option<&str>, height: Option<&str>);

    /// Writes the `transform` attribute of the `<svg>` root group.
    fn set_group_transform(&mut self, transform: &str);

    /// Updates the slider's displayed value without emitting an input event.
    fn set_slider_value(&mut self, value: f64);

    /// Current client rect of the graphic container.
    fn container_box(&self) -> BoundingBox;
}
