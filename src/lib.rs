pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::gmaps::GoogleMapsOracle;
pub use adapters::landmarks::CsvLandmarkSource;
pub use adapters::storage::LocalStorage;
pub use config::{CliConfig, SolverKind};
pub use crate::core::{engine::TourEngine, pipeline::TourPipeline};
pub use domain::model::{SolveOutcome, TourSolution};
pub use utils::error::{Result, TourError};
