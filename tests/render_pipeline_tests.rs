use std::cell::{Cell, RefCell};

use futures::executor::block_on;
use graphviz_view::core::Size;
use graphviz_view::error::EngineError;
use graphviz_view::pipeline::{LayoutEngine, RenderOptions, RenderOutcome, RenderPipeline};
use graphviz_view::registry::EngineId;
use graphviz_view::render::RecordingSurface;
use graphviz_view::viewport::ViewportController;

#[derive(Default)]
struct CountingEngine {
    calls: Cell<usize>,
    engines: RefCell<Vec<EngineId>>,
}

impl LayoutEngine for CountingEngine {
    async fn layout(&self, source: &str, engine: EngineId) -> Result<String, EngineError> {
        self.calls.set(self.calls.get() + 1);
        self.engines.borrow_mut().push(engine);
        if source.contains("syntax error") {
            return Err(EngineError::Layout("syntax error in line 1".to_owned()));
        }
        Ok(format!(
            r#"<svg width="200pt" height="100pt" viewBox="0.00 0.00 200.00 100.00"><g id="graph0" class="graph"><title>{}</title><g id="node1" class="node"></g><g id="clust1" class="cluster"></g></g></svg>"#,
            source.len()
        ))
    }
}

fn build_parts() -> (RenderPipeline, RecordingSurface, ViewportController) {
    (
        RenderPipeline::new(EngineId::Dot, "gv"),
        RecordingSurface::with_container(400.0, 300.0),
        ViewportController::default(),
    )
}

#[test]
fn identical_source_invokes_engine_once() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    let first = block_on(pipeline.render(
        &engine,
        Some("digraph { a -> b }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));
    let second = block_on(pipeline.render(
        &engine,
        Some("digraph { a -> b }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    assert_eq!(first, RenderOutcome::Rendered);
    assert_eq!(second, RenderOutcome::Skipped);
    assert_eq!(engine.calls.get(), 1);
    assert_eq!(surface.install_count, 1);
    assert_eq!(engine.engines.borrow().as_slice(), &[EngineId::Dot]);
}

#[test]
fn omitted_source_without_history_is_noop() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    let outcome = block_on(pipeline.render(
        &engine,
        None,
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(engine.calls.get(), 0);
    assert!(surface.markup.is_none());
    assert!(surface.transforms.is_empty());
}

#[test]
fn omitted_source_reuses_last_render_and_skips() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();
    block_on(pipeline.render(
        &engine,
        Some("graph { a -- b }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    let outcome = block_on(pipeline.render(
        &engine,
        Some(""),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    assert_eq!(outcome, RenderOutcome::Skipped);
    assert_eq!(engine.calls.get(), 1);
}

#[test]
fn installed_markup_is_postprocessed() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    block_on(pipeline.render(
        &engine,
        Some("digraph { a }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    let markup = surface.markup.as_deref().expect("installed markup");
    assert!(!markup.contains("id=\""));
    assert!(!markup.contains("viewBox"));
    assert!(markup.starts_with("<svg>"));
    assert!(markup.contains(r#"class="gv-node""#));
    assert!(markup.contains(r#"class="gv-cluster""#));
    assert!(markup.contains(r#"class="graph""#));
    assert_eq!(
        pipeline.graphic().and_then(|graphic| graphic.size),
        Some(Size::new(200.0, 100.0))
    );
}

#[test]
fn min_size_prefers_options_then_intrinsic_size() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    block_on(pipeline.render(
        &engine,
        Some("digraph { a }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));
    assert_eq!(surface.min_width.as_deref(), Some("200px"));
    assert_eq!(surface.min_height.as_deref(), Some("100px"));

    block_on(pipeline.render(
        &engine,
        Some("digraph { b }"),
        RenderOptions::new(Some("640px".to_owned()), None),
        &mut surface,
        &mut viewport,
    ));
    assert_eq!(surface.min_width.as_deref(), Some("640px"));
    assert_eq!(surface.min_height.as_deref(), Some("100px"));
}

#[test]
fn engine_failure_keeps_previous_state() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();
    block_on(pipeline.render(
        &engine,
        Some("digraph { a }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));
    let source_before = pipeline.source().clone();
    let markup_before = surface.markup.clone();
    let transforms_before = surface.transforms.len();
    let applied_before = viewport.last_applied();

    let outcome = block_on(pipeline.render(
        &engine,
        Some("digraph { syntax error"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    assert!(matches!(outcome, RenderOutcome::Failed(EngineError::Layout(_))));
    assert_eq!(pipeline.source(), &source_before);
    assert_eq!(pipeline.source().last_raw(), Some("digraph { a }"));
    assert_eq!(pipeline.source().last_render(), Some("digraph { a }"));
    assert_eq!(surface.markup, markup_before);
    assert_eq!(surface.install_count, 1);
    assert_eq!(surface.transforms.len(), transforms_before);
    assert_eq!(viewport.last_applied(), applied_before);
}

#[test]
fn failed_source_is_retried_on_next_call() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    for _ in 0..2 {
        block_on(pipeline.render(
            &engine,
            Some("syntax error"),
            RenderOptions::default(),
            &mut surface,
            &mut viewport,
        ));
    }

    assert_eq!(engine.calls.get(), 2);
    assert!(pipeline.source().last_raw().is_none());
}

#[test]
fn superseded_request_is_discarded() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    let older = pipeline
        .begin(Some("digraph { old }"), RenderOptions::default())
        .expect("older request");
    let newer = pipeline
        .begin(Some("digraph { new }"), RenderOptions::default())
        .expect("newer request");
    assert!(newer.generation() > older.generation());

    let newer_markup = block_on(engine.layout(newer.source(), newer.engine()));
    let outcome = pipeline.complete(newer, newer_markup, &mut surface, &mut viewport);
    assert_eq!(outcome, RenderOutcome::Rendered);

    let older_markup = block_on(engine.layout(older.source(), older.engine()));
    let outcome = pipeline.complete(older, older_markup, &mut surface, &mut viewport);
    assert_eq!(outcome, RenderOutcome::Stale);

    assert_eq!(pipeline.source().last_render(), Some("digraph { new }"));
    assert_eq!(surface.install_count, 1);
}

#[test]
fn older_request_finishing_first_does_not_install() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();

    let older = pipeline
        .begin(Some("digraph { old }"), RenderOptions::default())
        .expect("older request");
    let newer = pipeline
        .begin(Some("digraph { new }"), RenderOptions::default())
        .expect("newer request");

    let older_markup = block_on(engine.layout(older.source(), older.engine()));
    assert_eq!(
        pipeline.complete(older, older_markup, &mut surface, &mut viewport),
        RenderOutcome::Stale
    );
    assert!(surface.markup.is_none());

    let newer_markup = block_on(engine.layout(newer.source(), newer.engine()));
    assert_eq!(
        pipeline.complete(newer, newer_markup, &mut surface, &mut viewport),
        RenderOutcome::Rendered
    );
    assert_eq!(pipeline.source().last_raw(), Some("digraph { new }"));
}

#[test]
fn reverting_to_installed_source_supersedes_pending_request() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();
    block_on(pipeline.render(
        &engine,
        Some("digraph { shown }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    let pending = pipeline
        .begin(Some("digraph { edited }"), RenderOptions::default())
        .expect("pending request");
    assert!(pipeline.has_pending());
    assert!(
        pipeline
            .begin(Some("digraph { shown }"), RenderOptions::default())
            .is_none()
    );
    assert!(!pipeline.has_pending());

    let markup = block_on(engine.layout(pending.source(), pending.engine()));
    let outcome = pipeline.complete(pending, markup, &mut surface, &mut viewport);

    assert_eq!(outcome, RenderOutcome::Stale);
    assert_eq!(pipeline.source().last_render(), Some("digraph { shown }"));
    assert_eq!(surface.install_count, 1);
}

#[test]
fn reflow_call_keeps_pending_request_alive() {
    let engine = CountingEngine::default();
    let (mut pipeline, mut surface, mut viewport) = build_parts();
    block_on(pipeline.render(
        &engine,
        Some("digraph { shown }"),
        RenderOptions::default(),
        &mut surface,
        &mut viewport,
    ));

    let pending = pipeline
        .begin(Some("digraph { edited }"), RenderOptions::default())
        .expect("pending request");
    assert!(pipeline.begin(None, RenderOptions::default()).is_none());

    let markup = block_on(engine.layout(pending.source(), pending.engine()));
    let outcome = pipeline.complete(pending, markup, &mut surface, &mut viewport);

    assert_eq!(outcome, RenderOutcome::Rendered);
    assert_eq!(pipeline.source().last_render(), Some("digraph { edited }"));
    assert!(!pipeline.has_pending());
}
