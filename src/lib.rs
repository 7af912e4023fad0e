//! horizon-widget: a headless horizon chart widget.
//!
//! The widget owns one container element and delegates drawing to a
//! `HorizonRenderer` and element creation to a `DomBinder`, both injected by
//! the host so either can be swapped for an in-memory fake.

pub mod core;
pub mod dom;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod widget;

pub use error::{WidgetError, WidgetResult};
pub use widget::{ChartWidget, WidgetConfig, WidgetProps};
