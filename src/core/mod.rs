pub mod fit;
pub mod types;

pub use fit::{CENTER_PAD, fit_transform};
pub use types::{BoundingBox, Size, ViewportTransform};
