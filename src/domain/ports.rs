use crate::domain::model::{DistanceMatrix, Landmark, Reachability, SolveOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable byte storage for the distance cache file.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn landmarks_file(&self) -> &str;
    fn cache_file(&self) -> &str;
    fn concurrent_requests(&self) -> usize;
}

/// Supplies the landmark set, preserving source order (the first entry
/// is the depot).
pub trait LandmarkSource: Send + Sync {
    fn load(&self) -> Result<Vec<Landmark>>;
}

/// Remote driving-distance lookup. Infallible by contract: transport and
/// service failures degrade to [`Reachability::Unreachable`].
#[async_trait]
pub trait DistanceOracle: Send + Sync {
    async fn driving_distance(&self, origin: &Landmark, dest: &Landmark) -> Reachability;
}

/// Tour search over a completed distance matrix. Pure CPU work, no I/O.
pub trait TourSolver: Send + Sync {
    fn solve(&self, locations: &[String], matrix: &DistanceMatrix) -> SolveOutcome;
}

impl TourSolver for Box<dyn TourSolver> {
    fn solve(&self, locations: &[String], matrix: &DistanceMatrix) -> SolveOutcome {
        self.as_ref().solve(locations, matrix)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Landmark>>;
    async fn build(&self, landmarks: &[Landmark]) -> Result<DistanceMatrix>;
    fn optimize(&self, locations: &[String], matrix: &DistanceMatrix) -> SolveOutcome;
}
