use serde::{Deserialize, Serialize};

use crate::error::{WidgetError, WidgetResult};

/// Diverging blue-to-red palette used by the 4-band horizon chart.
pub const DIVERGING_4_BAND_HEX: [&str; 8] = [
    "#313695", "#4575b4", "#74add1", "#abd9e9", "#fee090", "#fdae61", "#f46d43", "#d73027",
];

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` or `#rgb` notation.
    pub fn from_hex(hex: &str) -> WidgetResult<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| WidgetError::InvalidColor(format!("`{hex}` must start with `#`")))?;

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => {
                return Err(WidgetError::InvalidColor(format!(
                    "`{hex}` must have 3 or 6 hex digits"
                )));
            }
        };

        let channel = |offset: usize| -> WidgetResult<f64> {
            let raw = expanded
                .get(offset..offset + 2)
                .ok_or_else(|| WidgetError::InvalidColor(format!("`{hex}` is not ASCII hex")))?;
            u8::from_str_radix(raw, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| WidgetError::InvalidColor(format!("`{hex}` is not valid hex")))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as lowercase `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        )
    }

    pub fn validate(self) -> WidgetResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WidgetError::InvalidColor(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Parses a palette, failing on the first malformed entry.
pub fn parse_palette<S: AsRef<str>>(hexes: &[S]) -> WidgetResult<Vec<Color>> {
    hexes.iter().map(|hex| Color::from_hex(hex.as_ref())).collect()
}

#[must_use]
pub fn default_palette_hex() -> Vec<String> {
    DIVERGING_4_BAND_HEX.iter().map(|hex| (*hex).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        let long = Color::from_hex("#ff0000").expect("long hex");
        assert_eq!(long, Color::rgb(1.0, 0.0, 0.0));

        let short = Color::from_hex("#0f0").expect("short hex");
        assert_eq!(short, Color::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("313695").is_err());
        assert!(Color::from_hex("#31369").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
        assert!(Color::from_hex("#éé").is_err());
    }

    #[test]
    fn default_palette_round_trips_through_hex() {
        let palette = parse_palette(&DIVERGING_4_BAND_HEX).expect("palette");
        let back: Vec<String> = palette.iter().map(|color| color.to_hex()).collect();
        assert_eq!(back, default_palette_hex());
    }

    #[test]
    fn validate_rejects_out_of_range_channel() {
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
        assert!(Color::rgba(0.0, f64::NAN, 0.0, 1.0).validate().is_err());
        assert!(Color::rgb(0.5, 0.5, 0.5).validate().is_ok());
    }
}
