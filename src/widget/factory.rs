use crate::error::ViewerResult;
use crate::pipeline::LayoutEngine;
use crate::registry;
use crate::render::DisplaySurface;

use super::{GraphvizWidget, ViewerConfig};

/// Creates one widget per rendered payload for the host's MIME dispatcher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RendererFactory {
    config: ViewerConfig,
}

impl RendererFactory {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Engine output is installed as-is, so hosts must treat it as untrusted.
    #[must_use]
    pub fn safe(&self) -> bool {
        false
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &'static str> {
        registry::mime_types()
    }

    pub fn create_renderer<E: LayoutEngine, S: DisplaySurface>(
        &self,
        mime_type: &str,
        engine: E,
        surface: S,
    ) -> ViewerResult<GraphvizWidget<E, S>> {
        GraphvizWidget::new(mime_type, engine, surface, self.config.clone())
    }
}
