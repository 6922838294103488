//! graphviz-view: headless core of an embeddable Graphviz viewer.
//!
//! Graph source is laid out by an external engine, post-processed, installed
//! on a host-provided display surface and kept under a pan/zoom viewport that
//! stays consistent across gestures, re-renders and resizes.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod render;
pub mod syntax;
pub mod telemetry;
pub mod viewport;
pub mod widget;

pub use error::{EngineError, ViewerError, ViewerResult};
pub use pipeline::{LayoutEngine, RenderOptions, RenderOutcome};
pub use widget::{GraphvizWidget, RendererFactory, ViewerConfig};
