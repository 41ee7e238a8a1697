//! Value extraction and quantile choropleth classification.

mod breaks;
mod color;
mod extract;
pub(crate) mod palette;

pub use breaks::{Breaks, compute_breaks};
pub use color::{Rgb, bucket_index, classify};
pub use extract::{extract_value, percent_of};
pub use palette::{NO_DATA_COLOR, Palette};
