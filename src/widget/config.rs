use serde::{Deserialize, Serialize};

use crate::core::RandomWalkCosine;
use crate::error::{WidgetError, WidgetResult};
use crate::render::{HorizonChart, HorizonChartConfig};

pub const DEFAULT_CONTAINER_ID: &str = "d3-horizon-chart-container";
pub const DEFAULT_CHILD_TAG: &str = "div";
pub const DEFAULT_CHILD_CLASS: &str = "horizon";

/// Public widget bootstrap configuration.
///
/// Serializable so hosts can persist or ship widget setup as JSON. Every
/// field is optional on input and falls back to the stock 4-band chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default = "default_child_tag")]
    pub child_tag: String,
    #[serde(default = "default_child_class")]
    pub child_class: String,
    #[serde(default)]
    pub chart: HorizonChartConfig,
    #[serde(default)]
    pub demo_series: RandomWalkCosine,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            child_tag: default_child_tag(),
            child_class: default_child_class(),
            chart: HorizonChartConfig::default(),
            demo_series: RandomWalkCosine::default(),
        }
    }
}

impl WidgetConfig {
    #[must_use]
    pub fn with_container_id(mut self, container_id: impl Into<String>) -> Self {
        self.container_id = container_id.into();
        self
    }

    #[must_use]
    pub fn with_chart(mut self, chart: HorizonChartConfig) -> Self {
        self.chart = chart;
        self
    }

    #[must_use]
    pub fn with_demo_series(mut self, demo_series: RandomWalkCosine) -> Self {
        self.demo_series = demo_series;
        self
    }

    pub fn from_json_str(input: &str) -> WidgetResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> WidgetResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.container_id.trim().is_empty() {
            return Err(WidgetError::InvalidConfig(
                "container id must not be empty".to_owned(),
            ));
        }
        if self.child_tag.trim().is_empty() {
            return Err(WidgetError::InvalidConfig(
                "child tag must not be empty".to_owned(),
            ));
        }
        if self.child_class.trim().is_empty() {
            return Err(WidgetError::InvalidConfig(
                "child class must not be empty".to_owned(),
            ));
        }
        HorizonChart::from_config(&self.chart)?;
        self.demo_series.validate()
    }
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_owned()
}

fn default_child_tag() -> String {
    DEFAULT_CHILD_TAG.to_owned()
}

fn default_child_class() -> String {
    DEFAULT_CHILD_CLASS.to_owned()
}
