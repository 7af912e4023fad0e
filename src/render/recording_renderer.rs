use crate::dom::ElementId;
use crate::error::WidgetResult;
use crate::render::{HorizonChart, HorizonRenderer};

/// One renderer invocation captured by `RecordingRenderer`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub element: ElementId,
    pub chart: HorizonChart,
    pub series: Vec<f64>,
}

/// Headless renderer used by tests and hosts without a drawing surface.
///
/// It draws nothing and keeps every call so callers can assert on what would
/// have been drawn.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    #[must_use]
    pub fn last_call(&self) -> Option<&RenderCall> {
        self.calls.last()
    }
}

impl HorizonRenderer for RecordingRenderer {
    fn render(
        &mut self,
        element: &ElementId,
        chart: &HorizonChart,
        series: &[f64],
    ) -> WidgetResult<()> {
        self.calls.push(RenderCall {
            element: *element,
            chart: chart.clone(),
            series: series.to_vec(),
        });
        Ok(())
    }
}
