use serde_json::{Map, Value};
use tracing::debug;

use crate::core::{BoundingBox, ViewportTransform};
use crate::error::{EngineError, ViewerError, ViewerResult};
use crate::pipeline::{
    GraphSource, LayoutEngine, RenderOptions, RenderOutcome, RenderPipeline, RenderRequest,
};
use crate::registry::{self, GraphFileType};
use crate::render::{DisplaySurface, Scaffold};
use crate::viewport::{GestureEvent, ViewportController};

use super::{SliderInput, ToggleChange, ViewerConfig};

/// Host data payload: MIME type to value.
pub type MimeBundle = Map<String, Value>;

/// Host-facing viewer bound to one graph MIME type.
///
/// Wires host lifecycle callbacks and toolbar events into the render pipeline
/// and the viewport controller.
pub struct GraphvizWidget<E: LayoutEngine, S: DisplaySurface> {
    file_type: &'static GraphFileType,
    engine: E,
    surface: S,
    scaffold: Scaffold,
    pipeline: RenderPipeline,
    viewport: ViewportController,
}

impl<E: LayoutEngine, S: DisplaySurface> GraphvizWidget<E, S> {
    /// Builds the scaffold on `surface` and binds gestures to it.
    pub fn new(
        mime_type: &str,
        engine: E,
        mut surface: S,
        config: ViewerConfig,
    ) -> ViewerResult<Self> {
        config.validate()?;
        let file_type = registry::lookup(mime_type)
            .ok_or_else(|| ViewerError::UnknownMimeType(mime_type.to_owned()))?;

        let scaffold = Scaffold::new(
            &config.class_namespace,
            config.zoom_slider,
            config.auto_center,
        );
        surface.build_scaffold(&scaffold);
        surface.bind_gestures();
        debug!(mime_type, engine = %file_type.engine, "graphviz widget created");

        Ok(Self {
            file_type,
            engine,
            surface,
            scaffold,
            pipeline: RenderPipeline::new(file_type.engine, config.class_namespace),
            viewport: ViewportController::new(config.auto_center, config.center_pad),
        })
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.file_type.mime_type
    }

    #[must_use]
    pub fn file_type(&self) -> &'static GraphFileType {
        self.file_type
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn source(&self) -> &GraphSource {
        self.pipeline.source()
    }

    #[must_use]
    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn last_transform(&self) -> Option<ViewportTransform> {
        self.viewport.last_applied()
    }

    /// Renders this widget's payload from `bundle`; `metadata` supplies size hints.
    pub async fn render(
        &mut self,
        bundle: &MimeBundle,
        metadata: &Map<String, Value>,
    ) -> RenderOutcome {
        let Some(request) = self.begin_render(bundle, metadata) else {
            return RenderOutcome::Skipped;
        };
        let result = self.engine.layout(request.source(), request.engine()).await;
        self.finish_render(request, result)
    }

    /// First half of [`Self::render`] for hosts that drive the engine call
    /// themselves and keep handling events while it is pending.
    pub fn begin_render(
        &mut self,
        bundle: &MimeBundle,
        metadata: &Map<String, Value>,
    ) -> Option<RenderRequest> {
        let source = bundle.get(self.file_type.mime_type).and_then(Value::as_str);
        self.pipeline
            .begin(source, RenderOptions::from_metadata(metadata))
    }

    pub fn finish_render(
        &mut self,
        request: RenderRequest,
        result: Result<String, EngineError>,
    ) -> RenderOutcome {
        self.pipeline
            .complete(request, result, &mut self.surface, &mut self.viewport)
    }

    /// Moves the widget onto a new host node and returns the previous one.
    ///
    /// The scaffold, the installed graphic and the applied transform are
    /// replayed onto `surface` before the usual after-attach fit.
    pub fn attach(&mut self, surface: S) -> S {
        let previous = std::mem::replace(&mut self.surface, surface);
        self.surface.build_scaffold(&self.scaffold);
        if let Some(graphic) = self.pipeline.graphic() {
            self.surface.install_markup(&graphic.markup);
            self.surface
                .set_min_size(graphic.min_width.as_deref(), graphic.min_height.as_deref());
        }
        if let Some(transform) = self.viewport.last_applied() {
            self.surface.set_group_transform(&transform.to_svg_transform());
            self.surface.set_slider_value(transform.scale);
        }
        self.on_after_attach();
        previous
    }

    /// The node is now part of the live layout tree and can be measured.
    pub fn on_after_attach(&mut self) {
        self.surface.bind_gestures();
        self.viewport.fit(None, &mut self.surface);
    }

    /// Manual viewports survive resizes; auto-centered ones are refitted.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        if self.viewport.auto_center() {
            self.viewport
                .fit(Some(BoundingBox::new(width, height)), &mut self.surface);
        }
    }

    pub fn on_gesture(&mut self, event: GestureEvent) -> bool {
        self.viewport.on_gesture(event, &mut self.surface)
    }

    pub fn on_slider_input(&mut self, event: SliderInput) -> bool {
        self.set_zoom_level(event.value)
    }

    pub fn on_center_toggle(&mut self, event: ToggleChange) {
        self.set_auto_center(event.checked);
    }

    #[must_use]
    pub fn zoom_level(&self) -> Option<f64> {
        self.viewport.zoom_level()
    }

    pub fn set_zoom_level(&mut self, value: f64) -> bool {
        self.viewport.set_zoom_level(value, &mut self.surface)
    }

    #[must_use]
    pub fn auto_center(&self) -> bool {
        self.viewport.auto_center()
    }

    pub fn set_auto_center(&mut self, auto_center: bool) {
        self.viewport.set_auto_center(auto_center, &mut self.surface);
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
