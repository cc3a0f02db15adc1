use crate::domain::model::{DistanceMatrix, Landmark, PairKey};
use crate::domain::ports::{DistanceOracle, Storage};
use crate::utils::error::Result;
use futures::StreamExt;
use std::collections::HashMap;

/// Builds the pairwise distance matrix, preferring the on-disk cache over
/// the network. A well-formed cache is authoritative: on a hit, zero
/// oracle calls are made.
pub struct MatrixBuilder<'a, S: Storage, O: DistanceOracle> {
    storage: &'a S,
    oracle: &'a O,
    cache_file: &'a str,
    concurrent_requests: usize,
}

impl<'a, S: Storage, O: DistanceOracle> MatrixBuilder<'a, S, O> {
    pub fn new(
        storage: &'a S,
        oracle: &'a O,
        cache_file: &'a str,
        concurrent_requests: usize,
    ) -> Self {
        Self {
            storage,
            oracle,
            cache_file,
            concurrent_requests,
        }
    }

    pub async fn build(&self, landmarks: &[Landmark]) -> Result<DistanceMatrix> {
        if let Some(matrix) = self.load_cached().await {
            tracing::info!(
                "Loaded {} cached distances from {}",
                matrix.len(),
                self.cache_file
            );
            return Ok(matrix);
        }

        let pairs: Vec<(&Landmark, &Landmark)> = landmarks
            .iter()
            .flat_map(|origin| {
                landmarks
                    .iter()
                    .filter(move |dest| dest.name != origin.name)
                    .map(move |dest| (origin, dest))
            })
            .collect();

        tracing::info!(
            "Fetching {} landmark pairs ({} concurrent requests)",
            pairs.len(),
            self.concurrent_requests
        );

        // Each lookup is independent; results merge only after completion,
        // so the fan-out shares no mutable state.
        let lookups: Vec<_> = pairs
            .into_iter()
            .map(|(origin, dest)| async move {
                let reach = self.oracle.driving_distance(origin, dest).await;
                tracing::debug!("{} -> {}: {} km", origin.name, dest.name, reach.km());
                (
                    PairKey::new(origin.name.as_str(), dest.name.as_str()),
                    reach.km(),
                )
            })
            .collect();
        let matrix: DistanceMatrix = futures::stream::iter(lookups)
            .buffer_unordered(self.concurrent_requests.max(1))
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect();

        self.persist(&matrix).await;

        Ok(matrix)
    }

    /// Returns `None` when the cache is absent, unreadable, or corrupt;
    /// corruption is logged and the caller rebuilds from scratch.
    async fn load_cached(&self) -> Option<DistanceMatrix> {
        let bytes = match self.storage.read_file(self.cache_file).await {
            Ok(bytes) => bytes,
            Err(_) => {
                tracing::debug!("No distance cache at {}", self.cache_file);
                return None;
            }
        };

        // Unreachable pairs are stored as null: serde_json cannot
        // represent IEEE infinities.
        let raw: HashMap<String, Option<f64>> = match serde_json::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Distance cache is corrupted, regenerating: {}", e);
                return None;
            }
        };

        let mut matrix = DistanceMatrix::new();
        for (key, value) in raw {
            let Some(pair) = PairKey::decode(&key) else {
                tracing::warn!("Bad cache key '{}', regenerating", key);
                return None;
            };
            matrix.insert(pair, value.unwrap_or(f64::INFINITY));
        }
        Some(matrix)
    }

    /// Cache write failures are logged and non-fatal; the in-memory
    /// matrix is still returned to the caller.
    async fn persist(&self, matrix: &DistanceMatrix) {
        let raw: HashMap<String, Option<f64>> = matrix
            .iter()
            .map(|(key, km)| (key.encode(), km.is_finite().then_some(*km)))
            .collect();

        let result: Result<()> = async {
            let bytes = serde_json::to_vec(&raw)?;
            self.storage.write_file(self.cache_file, &bytes).await
        }
        .await;

        if let Err(e) = result {
            tracing::warn!("Error saving distance cache: {}", e);
        }
    }
}
