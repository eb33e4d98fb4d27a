//! Text post-processing for recognized content.

pub mod spacing;

pub use spacing::repair_spacing;
