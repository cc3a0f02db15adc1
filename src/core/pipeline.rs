use crate::core::matrix::MatrixBuilder;
use crate::domain::model::{DistanceMatrix, Landmark, SolveOutcome};
use crate::domain::ports::{
    ConfigProvider, DistanceOracle, LandmarkSource, Pipeline, Storage, TourSolver,
};
use crate::utils::error::Result;

/// Default pipeline wiring: a landmark source, a distance oracle behind
/// the cache, and a tour solver.
pub struct TourPipeline<L, S, C, O, T>
where
    L: LandmarkSource,
    S: Storage,
    C: ConfigProvider,
    O: DistanceOracle,
    T: TourSolver,
{
    source: L,
    storage: S,
    config: C,
    oracle: O,
    solver: T,
}

impl<L, S, C, O, T> TourPipeline<L, S, C, O, T>
where
    L: LandmarkSource,
    S: Storage,
    C: ConfigProvider,
    O: DistanceOracle,
    T: TourSolver,
{
    pub fn new(source: L, storage: S, config: C, oracle: O, solver: T) -> Self {
        Self {
            source,
            storage,
            config,
            oracle,
            solver,
        }
    }
}

#[async_trait::async_trait]
impl<L, S, C, O, T> Pipeline for TourPipeline<L, S, C, O, T>
where
    L: LandmarkSource,
    S: Storage,
    C: ConfigProvider,
    O: DistanceOracle,
    T: TourSolver,
{
    async fn extract(&self) -> Result<Vec<Landmark>> {
        self.source.load()
    }

    async fn build(&self, landmarks: &[Landmark]) -> Result<DistanceMatrix> {
        MatrixBuilder::new(
            &self.storage,
            &self.oracle,
            self.config.cache_file(),
            self.config.concurrent_requests(),
        )
        .build(landmarks)
        .await
    }

    fn optimize(&self, locations: &[String], matrix: &DistanceMatrix) -> SolveOutcome {
        self.solver.solve(locations, matrix)
    }
}
