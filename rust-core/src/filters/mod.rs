//! Ideal frequency-domain filters

pub mod design;
pub mod frequency;
pub mod pipeline;

pub use design::{create_filter, FilterSpec};
pub use frequency::bin_frequency;
pub use pipeline::{apply_filter, filter_channel};
