//! Complex signal vectors and checked complex arithmetic

pub mod complex;
pub mod vector;

pub use complex::try_div;
pub use vector::Signal;
