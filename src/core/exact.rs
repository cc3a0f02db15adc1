use crate::domain::model::{DistanceMatrix, SolveOutcome, TourSolution};
use crate::domain::ports::TourSolver;

/// Exhaustive permutation search. Factorial cost, so anything past
/// `max_locations` is refused up front instead of silently hanging.
pub struct BruteForceSolver {
    round_trip: bool,
    max_locations: usize,
}

impl BruteForceSolver {
    pub fn new(round_trip: bool) -> Self {
        Self {
            round_trip,
            max_locations: 10,
        }
    }

    fn tour_length(&self, perm: &[usize], locations: &[String], matrix: &DistanceMatrix) -> f64 {
        let mut total = 0.0;
        for pair in perm.windows(2) {
            total += matrix.distance(&locations[pair[0]], &locations[pair[1]]);
        }
        if self.round_trip && perm.len() > 1 {
            total += matrix.distance(&locations[perm[perm.len() - 1]], &locations[perm[0]]);
        }
        total
    }
}

impl Default for BruteForceSolver {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TourSolver for BruteForceSolver {
    fn solve(&self, locations: &[String], matrix: &DistanceMatrix) -> SolveOutcome {
        if locations.is_empty() {
            tracing::warn!("No locations to tour");
            return SolveOutcome::NoSolution;
        }
        if locations.len() > self.max_locations {
            tracing::warn!(
                "Brute force is impractical for {} locations (limit {})",
                locations.len(),
                self.max_locations
            );
            return SolveOutcome::NoSolution;
        }

        // Lexicographic enumeration over input indices; on equal length
        // the first permutation seen wins, which makes results
        // reproducible across platforms.
        let mut perm: Vec<usize> = (0..locations.len()).collect();
        let mut best_perm = perm.clone();
        let mut best_length = self.tour_length(&perm, locations, matrix);
        while next_permutation(&mut perm) {
            let length = self.tour_length(&perm, locations, matrix);
            if length < best_length {
                best_length = length;
                best_perm.copy_from_slice(&perm);
            }
        }

        if !best_length.is_finite() {
            tracing::warn!("No finite tour exists");
            return SolveOutcome::NoSolution;
        }

        SolveOutcome::Solved(TourSolution {
            route: best_perm.iter().map(|&i| locations[i].clone()).collect(),
            total_km: best_length,
        })
    }
}

/// Advances `perm` to its lexicographic successor; `false` once the last
/// permutation has been reached.
fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }
    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}
