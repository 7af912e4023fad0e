mod chart_widget;
mod config;
mod props;

pub use chart_widget::{ChartWidget, WidgetState};
pub use config::{DEFAULT_CHILD_CLASS, DEFAULT_CHILD_TAG, DEFAULT_CONTAINER_ID, WidgetConfig};
pub use props::{PropValidationError, WidgetProps};
