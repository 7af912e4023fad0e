pub mod color;
pub mod series;
pub mod series_input;

pub use color::{Color, DIVERGING_4_BAND_HEX, default_palette_hex, parse_palette};
pub use series::RandomWalkCosine;
pub use series_input::{SeriesInput, same_input};
