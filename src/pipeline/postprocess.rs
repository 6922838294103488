//! Pure text passes applied to engine output before installation.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::Size;

static ID_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s+id="[^"]*""#).expect("valid id attribute regex"));

static GRAPH_CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)class="(node|edge|cluster)""#).expect("valid class attribute regex")
});

static SVG_ROOT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("valid svg root regex"));

static ROOT_DIMENSION_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+(width|height|viewBox)="[^"]*""#).expect("valid dimension regex")
});

static ROOT_SIZE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(width|height)="([^"]*)""#).expect("valid size attribute regex")
});

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("valid float regex")
});

/// Removes every `id` attribute. Engine ids are unstable across renders and
/// collide when several widgets show the same graph.
#[must_use]
pub fn strip_ids(markup: &str) -> String {
    ID_ATTRIBUTE.replace_all(markup, "").into_owned()
}

/// Rewrites bare `node`, `edge` and `cluster` classes into `<namespace>-<class>`.
#[must_use]
pub fn namespace_classes(markup: &str, namespace: &str) -> String {
    let replacement = format!("${{1}}class=\"{namespace}-${{2}}\"");
    GRAPH_CLASS_ATTRIBUTE
        .replace_all(markup, replacement.as_str())
        .into_owned()
}

/// Both passes, ids first.
#[must_use]
pub fn postprocess(markup: &str, namespace: &str) -> String {
    namespace_classes(&strip_ids(markup), namespace)
}

/// Size declared by the root `<svg>` `width`/`height` attributes.
///
/// Units are ignored (`"62pt"` reads as `62`).
#[must_use]
pub fn intrinsic_size(markup: &str) -> Option<Size> {
    let root = SVG_ROOT_TAG.find(markup)?.as_str();
    let width = root_attribute(root, "width").and_then(leading_float)?;
    let height = root_attribute(root, "height").and_then(leading_float)?;
    Some(Size::new(width, height))
}

/// Clears the fixed `width`, `height` and `viewBox` of the root `<svg>` so the
/// viewport transform alone decides placement.
#[must_use]
pub fn strip_root_dimensions(markup: &str) -> String {
    let Some(root) = SVG_ROOT_TAG.find(markup) else {
        return markup.to_owned();
    };
    let cleaned = ROOT_DIMENSION_ATTRIBUTE.replace_all(root.as_str(), "");
    let mut out = String::with_capacity(markup.len());
    out.push_str(&markup[..root.start()]);
    out.push_str(&cleaned);
    out.push_str(&markup[root.end()..]);
    out
}

fn root_attribute<'a>(root: &'a str, name: &str) -> Option<&'a str> {
    ROOT_SIZE_ATTRIBUTE
        .captures_iter(root)
        .find(|captures| &captures[1] == name)
        .and_then(|captures| captures.get(2))
        .map(|value| value.as_str())
}

fn leading_float(value: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(value)
        .and_then(|found| found.as_str().trim().parse::<f64>().ok())
}
