use crate::domain::model::{DistanceMatrix, SolveOutcome, TourSolution};
use crate::domain::ports::TourSolver;

/// Meter-level quantization: the greedy construction works on integer
/// costs, mirroring solver engines that require them.
const COST_SCALE: f64 = 1000.0;

fn quantize(km: f64) -> Option<i64> {
    km.is_finite().then(|| (km * COST_SCALE).round() as i64)
}

/// Constructive cheapest-arc heuristic: starting from the depot (first
/// location), repeatedly extend the tour with the cheapest arc to an
/// unvisited node, then close the walk back to the depot. No
/// local-search refinement.
#[derive(Debug, Default)]
pub struct CheapestArcSolver;

impl TourSolver for CheapestArcSolver {
    fn solve(&self, locations: &[String], matrix: &DistanceMatrix) -> SolveOutcome {
        if locations.is_empty() {
            tracing::warn!("No locations to tour");
            return SolveOutcome::NoSolution;
        }

        let n = locations.len();
        let mut visited = vec![false; n];
        visited[0] = true;
        let mut order = vec![0usize];
        let mut current = 0usize;
        let mut total_units: i64 = 0;

        for _ in 1..n {
            let mut cheapest: Option<(usize, i64)> = None;
            for (candidate, seen) in visited.iter().enumerate() {
                if *seen {
                    continue;
                }
                let Some(cost) = quantize(matrix.distance(&locations[current], &locations[candidate]))
                else {
                    continue;
                };
                // Strict comparison keeps the lowest index on ties.
                if cheapest.map_or(true, |(_, best)| cost < best) {
                    cheapest = Some((candidate, cost));
                }
            }

            let Some((next, cost)) = cheapest else {
                tracing::warn!(
                    "No solution found: no finite arc out of {}",
                    locations[current]
                );
                return SolveOutcome::NoSolution;
            };
            visited[next] = true;
            order.push(next);
            total_units += cost;
            current = next;
        }

        let Some(return_cost) = quantize(matrix.distance(&locations[current], &locations[0])) else {
            tracing::warn!(
                "No solution found: cannot return from {} to the depot",
                locations[current]
            );
            return SolveOutcome::NoSolution;
        };
        total_units += return_cost;

        let mut route: Vec<String> = order.iter().map(|&i| locations[i].clone()).collect();
        route.push(locations[0].clone());

        SolveOutcome::Solved(TourSolution {
            route,
            total_km: total_units as f64 / COST_SCALE,
        })
    }
}
