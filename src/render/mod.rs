mod horizon_chart;
mod recording_renderer;

pub use horizon_chart::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_TITLE, HorizonChart, HorizonChartBuilder,
    HorizonChartConfig,
};
pub use recording_renderer::{RecordingRenderer, RenderCall};

use crate::dom::ElementId;
use crate::error::WidgetResult;

/// Contract implemented by any horizon chart backend.
///
/// Backends receive the element to draw into, a validated chart handle and
/// the raw series, so banding and drawing stay entirely on their side.
pub trait HorizonRenderer {
    fn render(
        &mut self,
        element: &ElementId,
        chart: &HorizonChart,
        series: &[f64],
    ) -> WidgetResult<()>;
}
