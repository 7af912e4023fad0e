use serde::{Deserialize, Serialize};

use crate::core::{Color, DIVERGING_4_BAND_HEX, default_palette_hex, parse_palette};
use crate::error::{WidgetError, WidgetResult};

pub const DEFAULT_CHART_HEIGHT: u32 = 100;
pub const DEFAULT_CHART_TITLE: &str = "Horizon, 4-band";

/// Serializable description of a horizon chart handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizonChartConfig {
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_palette_hex")]
    pub colors: Vec<String>,
}

impl Default for HorizonChartConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            title: default_title(),
            colors: default_palette_hex(),
        }
    }
}

/// Configuration bundle handed to the chart renderer.
///
/// Built fresh for each mount and never mutated once handed out. The palette
/// is split evenly into negative and positive bands, so its length must be
/// even and non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizonChart {
    height: u32,
    title: String,
    colors: Vec<Color>,
}

impl Default for HorizonChart {
    fn default() -> Self {
        Self {
            height: DEFAULT_CHART_HEIGHT,
            title: DEFAULT_CHART_TITLE.to_owned(),
            colors: parse_palette(&DIVERGING_4_BAND_HEX).unwrap_or_default(),
        }
    }
}

impl HorizonChart {
    #[must_use]
    pub fn builder() -> HorizonChartBuilder {
        HorizonChartBuilder::default()
    }

    pub fn from_config(config: &HorizonChartConfig) -> WidgetResult<Self> {
        Self::builder()
            .height(config.height)
            .title(config.title.clone())
            .colors(&config.colors)
            .build()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[must_use]
    pub fn bands(&self) -> usize {
        self.colors.len() / 2
    }
}

/// Chained setters mirroring the `height(..).title(..).colors(..)` style of
/// horizon chart libraries. Validation is deferred to `build`.
#[derive(Debug, Clone, Default)]
pub struct HorizonChartBuilder {
    height: Option<u32>,
    title: Option<String>,
    colors: Option<Vec<String>>,
}

impl HorizonChartBuilder {
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn colors<S: AsRef<str>>(mut self, colors: &[S]) -> Self {
        self.colors = Some(colors.iter().map(|c| c.as_ref().to_owned()).collect());
        self
    }

    pub fn build(self) -> WidgetResult<HorizonChart> {
        let height = self.height.unwrap_or(DEFAULT_CHART_HEIGHT);
        if height == 0 {
            return Err(WidgetError::InvalidConfig(
                "horizon chart height must be > 0".to_owned(),
            ));
        }

        let colors = match self.colors {
            Some(hexes) => parse_palette(&hexes)?,
            None => parse_palette(&DIVERGING_4_BAND_HEX)?,
        };
        if colors.is_empty() || colors.len() % 2 != 0 {
            return Err(WidgetError::InvalidConfig(format!(
                "horizon chart palette must hold an even, non-zero number of colors, got {}",
                colors.len()
            )));
        }
        for color in &colors {
            color.validate()?;
        }

        Ok(HorizonChart {
            height,
            title: self.title.unwrap_or_else(default_title),
            colors,
        })
    }
}

fn default_height() -> u32 {
    DEFAULT_CHART_HEIGHT
}

fn default_title() -> String {
    DEFAULT_CHART_TITLE.to_owned()
}
