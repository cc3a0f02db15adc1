use crate::domain::model::SolveOutcome;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Staged orchestrator: extract landmarks, build the distance matrix,
/// then run the tour search.
pub struct TourEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TourEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SolveOutcome> {
        tracing::info!("Reading landmarks...");
        let landmarks = self.pipeline.extract().await?;
        tracing::info!("Loaded {} landmarks", landmarks.len());

        tracing::info!("Building distance matrix...");
        let matrix = self.pipeline.build(&landmarks).await?;
        tracing::info!("Distance matrix has {} entries", matrix.len());

        let locations: Vec<String> = landmarks.iter().map(|l| l.name.clone()).collect();

        tracing::info!("Searching for the shortest tour...");
        let started = Instant::now();
        let outcome = self.pipeline.optimize(&locations, &matrix);
        match &outcome {
            SolveOutcome::Solved(solution) => tracing::info!(
                "Found a {:.2} km tour in {:.2?}",
                solution.total_km,
                started.elapsed()
            ),
            SolveOutcome::NoSolution => {
                tracing::warn!("No tour found after {:.2?}", started.elapsed())
            }
        }

        Ok(outcome)
    }
}
