pub mod cheapest_arc;
pub mod engine;
pub mod exact;
pub mod matrix;
pub mod pipeline;

pub use crate::domain::model::{
    DistanceMatrix, Landmark, PairKey, Reachability, SolveOutcome, TourSolution,
};
pub use crate::domain::ports::{
    ConfigProvider, DistanceOracle, LandmarkSource, Pipeline, Storage, TourSolver,
};
pub use crate::utils::error::Result;
