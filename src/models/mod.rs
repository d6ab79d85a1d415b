pub mod professional;

pub use professional::*;
