mod config;
mod events;
mod factory;
mod graphviz_widget;

pub use config::ViewerConfig;
pub use events::{SliderInput, ToggleChange};
pub use factory::RendererFactory;
pub use graphviz_widget::{GraphvizWidget, MimeBundle};
