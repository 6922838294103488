use crate::core::BoundingBox;
use crate::render::{DisplaySurface, Scaffold};

/// Headless surface used by tests and non-browser hosts.
///
/// Every mutation is recorded so callers can assert on what a real DOM would
/// have received.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub scaffold: Option<Scaffold>,
    pub gesture_bindings: usize,
    pub markup: Option<String>,
    pub install_count: usize,
    pub min_width: Option<String>,
    pub min_height: Option<String>,
    pub transforms: Vec<String>,
    pub slider_value: Option<f64>,
    pub container: BoundingBox,
}

impl RecordingSurface {
    #[must_use]
    pub fn with_container(width: f64, height: f64) -> Self {
        Self {
            container: BoundingBox::new(width, height),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn last_transform(&self) -> Option<&str> {
        self.transforms.last().map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn build_scaffold(&mut self, scaffold: &Scaffold) {
        self.scaffold = Some(scaffold.clone());
    }

    fn bind_gestures(&mut self) {
        self.gesture_bindings += 1;
    }

    fn install_markup(&mut self, markup: &str) {
        self.markup = Some(markup.to_owned());
        self.install_count += 1;
    }

    fn set_min_size(&mut self, width: Option<&str>, height: Option<&str>) {
        if self.markup.is_none() {
            return;
        }
        self.min_width = width.map(str::to_owned);
        self.min_height = height.map(str::to_owned);
    }

    fn set_group_transform(&mut self, transform: &str) {
        if self.markup.is_none() {
            return;
        }
        self.transforms.push(transform.to_owned());
    }

    fn set_slider_value(&mut self, value: f64) {
        self.slider_value = Some(value);
    }

    fn container_box(&self) -> BoundingBox {
        self.container
    }
}
