pub mod benchmark;
pub mod footprint;
pub mod frozen;
pub mod report;
pub mod timing;
pub mod trial;

pub use anyhow::{Context, Result};
pub use benchmark::{run, BenchmarkConfig};
pub use footprint::*;
pub use frozen::*;
pub use report::*;
pub use timing::*;
pub use trial::*;

pub use fxhash::FxHashSet;

pub trait SetItem: PartialEq + Eq + std::hash::Hash + Clone {}
impl<T: PartialEq + Eq + std::hash::Hash + Clone> SetItem for T {}
