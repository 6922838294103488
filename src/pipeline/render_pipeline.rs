use tracing::{debug, warn, warn_span};

use crate::core::Size;
use crate::error::EngineError;
use crate::registry::EngineId;
use crate::render::DisplaySurface;
use crate::viewport::ViewportController;

use super::options::px;
use super::postprocess::{intrinsic_size, postprocess, strip_root_dimensions};
use super::{LayoutEngine, RenderOptions};

/// Memoization key for the render pipeline.
///
/// Both fields change together, and only after a successful render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphSource {
    last_raw: Option<String>,
    last_render: Option<String>,
}

impl GraphSource {
    /// Source text of the last successful render.
    #[must_use]
    pub fn last_raw(&self) -> Option<&str> {
        self.last_raw.as_deref()
    }

    /// Source text whose graphic is currently installed.
    #[must_use]
    pub fn last_render(&self) -> Option<&str> {
        self.last_render.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGraphic {
    pub markup: String,
    pub size: Option<Size>,
    pub min_width: Option<String>,
    pub min_height: Option<String>,
}

/// A layout engine invocation that has been issued but not yet completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    generation: u64,
    source: String,
    engine: EngineId,
    options: RenderOptions,
}

impl RenderRequest {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn engine(&self) -> EngineId {
        self.engine
    }

    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

/// Result of a render call as seen by the host. None of these is an error
/// from the host's perspective.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// No source, or source identical to the installed graphic.
    Skipped,
    /// The engine rejected the source; the previous graphic stays installed.
    Failed(EngineError),
    /// A newer request was issued while this one was in flight.
    Stale,
    Rendered,
}

/// Turns graph source into an installed, post-processed SVG graphic.
///
/// Overlapping requests resolve as "latest issued wins": completing a request
/// older than the most recently issued one discards its result. Explicitly
/// asking for the graphic already on screen also supersedes pending requests.
#[derive(Debug)]
pub struct RenderPipeline {
    engine: EngineId,
    namespace: String,
    source: GraphSource,
    graphic: Option<RenderedGraphic>,
    issued: u64,
    settled: u64,
}

impl RenderPipeline {
    #[must_use]
    pub fn new(engine: EngineId, namespace: impl Into<String>) -> Self {
        Self {
            engine,
            namespace: namespace.into(),
            source: GraphSource::default(),
            graphic: None,
            issued: 0,
            settled: 0,
        }
    }

    #[must_use]
    pub fn engine(&self) -> EngineId {
        self.engine
    }

    #[must_use]
    pub fn source(&self) -> &GraphSource {
        &self.source
    }

    #[must_use]
    pub fn graphic(&self) -> Option<&RenderedGraphic> {
        self.graphic.as_ref()
    }

    /// Issues a request, or returns `None` when rendering would be a no-op.
    ///
    /// An omitted or empty `source` reuses the last rendered source, which
    /// makes reflow-only calls cheap and leaves pending requests alone.
    pub fn begin(
        &mut self,
        source: Option<&str>,
        options: RenderOptions,
    ) -> Option<RenderRequest> {
        let explicit = source.is_some_and(|text| !text.is_empty());
        let source = match source.filter(|text| !text.is_empty()) {
            Some(text) => text.to_owned(),
            None => match self.source.last_raw() {
                Some(raw) => raw.to_owned(),
                None => {
                    debug!("render skipped: no source");
                    return None;
                }
            },
        };

        if self.source.last_render() == Some(source.as_str()) {
            if explicit && self.has_pending() {
                self.issued += 1;
                self.settled = self.issued;
                debug!(
                    generation = self.issued,
                    "pending render superseded by installed source"
                );
            } else {
                debug!(bytes = source.len(), "render skipped: source unchanged");
            }
            return None;
        }

        self.issued += 1;
        debug!(
            generation = self.issued,
            engine = %self.engine,
            bytes = source.len(),
            "render issued"
        );
        Some(RenderRequest {
            generation: self.issued,
            source,
            engine: self.engine,
            options,
        })
    }

    /// `true` while the most recently issued request has not completed.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.issued > self.settled
    }

    /// Installs the engine's result for `request` and reconciles the viewport.
    pub fn complete<S: DisplaySurface>(
        &mut self,
        request: RenderRequest,
        result: Result<String, EngineError>,
        surface: &mut S,
        viewport: &mut ViewportController,
    ) -> RenderOutcome {
        if request.generation < self.issued {
            debug!(
                generation = request.generation,
                latest = self.issued,
                "render result discarded: superseded"
            );
            return RenderOutcome::Stale;
        }
        self.settled = request.generation;

        let raw = match result {
            Ok(markup) => markup,
            Err(err) => {
                let span = warn_span!("graphviz_error", engine = %request.engine);
                let _entered = span.enter();
                warn!(error = %err, "layout engine failed; keeping previous graphic");
                return RenderOutcome::Failed(err);
            }
        };

        let processed = postprocess(&raw, &self.namespace);
        let size = intrinsic_size(&processed);
        let markup = strip_root_dimensions(&processed);
        let fallback_size =
            size.or_else(|| self.graphic.as_ref().and_then(|graphic| graphic.size));
        surface.install_markup(&markup);

        let RenderRequest {
            generation,
            source,
            options,
            ..
        } = request;
        self.source.last_raw = Some(source.clone());
        self.source.last_render = Some(source);

        let min_width = options
            .width
            .or_else(|| fallback_size.map(|size| px(size.width)));
        let min_height = options
            .height
            .or_else(|| fallback_size.map(|size| px(size.height)));
        surface.set_min_size(min_width.as_deref(), min_height.as_deref());
        self.graphic = Some(RenderedGraphic {
            markup,
            size,
            min_width,
            min_height,
        });

        viewport.on_render_complete(size, surface);
        debug!(generation, ?size, "render installed");
        RenderOutcome::Rendered
    }

    /// Issues and completes a request in one step.
    pub async fn render<E: LayoutEngine, S: DisplaySurface>(
        &mut self,
        engine: &E,
        source: Option<&str>,
        options: RenderOptions,
        surface: &mut S,
        viewport: &mut ViewportController,
    ) -> RenderOutcome {
        let Some(request) = self.begin(source, options) else {
            return RenderOutcome::Skipped;
        };
        let result = engine.layout(request.source(), request.engine()).await;
        self.complete(request, result, surface, viewport)
    }
}
