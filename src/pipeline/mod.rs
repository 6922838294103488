mod options;
pub mod postprocess;
mod render_pipeline;

pub use options::RenderOptions;
pub use render_pipeline::{
    GraphSource, RenderOutcome, RenderPipeline, RenderRequest, RenderedGraphic,
};

use std::future::Future;

use crate::error::EngineError;
use crate::registry::EngineId;

/// External layout engine turning graph description text into SVG markup.
///
/// The call is the pipeline's only suspension point. No timeout is applied;
/// a call that never resolves leaves that render pending forever.
pub trait LayoutEngine {
    fn layout(
        &self,
        source: &str,
        engine: EngineId,
    ) -> impl Future<Output = Result<String, EngineError>>;
}
