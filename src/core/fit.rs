use crate::core::{BoundingBox, Size, ViewportTransform};

/// Fraction of the container a fitted graphic occupies along its limiting axis.
pub const CENTER_PAD: f64 = 0.9;

/// Scale and translate that center `graphic` inside `container`.
///
/// The y translate is additive because the layout engine's output places its
/// origin at the bottom-left corner. Returns `None` when either extent is
/// degenerate.
#[must_use]
pub fn fit_transform(
    container: BoundingBox,
    graphic: Size,
    pad: f64,
) -> Option<ViewportTransform> {
    if !container.is_measurable() || !graphic.is_measurable() {
        return None;
    }

    let scale = (container.width / graphic.width).min(container.height / graphic.height) * pad;
    let transform = ViewportTransform::new(
        container.width / 2.0 - scale * (graphic.width / 2.0),
        container.height / 2.0 + scale * (graphic.height / 2.0),
        scale,
    );
    transform.is_valid().then_some(transform)
}
