use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named point of interest with a fixed geographic coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Landmark {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Coordinate in the `"lat,lon"` form the remote API expects.
    pub fn coordinate(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Ordered pair of landmark names. Direction matters: driving A→B need
/// not cost the same as B→A.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairKey {
    pub origin: String,
    pub dest: String,
}

impl PairKey {
    pub fn new(origin: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            dest: dest.into(),
        }
    }

    /// Canonical cache-file encoding.
    pub fn encode(&self) -> String {
        format!("{}|{}", self.origin, self.dest)
    }

    /// Inverse of [`encode`](Self::encode). `None` marks a malformed key,
    /// which callers treat as cache corruption.
    pub fn decode(raw: &str) -> Option<Self> {
        let (origin, dest) = raw.split_once('|')?;
        if origin.is_empty() || dest.is_empty() {
            return None;
        }
        Some(Self::new(origin, dest))
    }
}

/// Outcome of a single oracle lookup. Failures degrade to `Unreachable`
/// instead of propagating, so one bad pair never aborts a matrix build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reachability {
    Reachable(f64),
    Unreachable,
}

impl Reachability {
    pub fn km(&self) -> f64 {
        match self {
            Reachability::Reachable(km) => *km,
            Reachability::Unreachable => f64::INFINITY,
        }
    }
}

/// Complete set of pairwise directed driving distances, in kilometers.
/// Missing entries read as the unreachable sentinel (+∞).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMatrix {
    entries: HashMap<PairKey, f64>,
}

impl DistanceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: PairKey, km: f64) {
        self.entries.insert(key, km);
    }

    pub fn distance(&self, origin: &str, dest: &str) -> f64 {
        if origin == dest {
            return 0.0;
        }
        self.entries
            .get(&PairKey::new(origin, dest))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, &f64)> {
        self.entries.iter()
    }
}

impl FromIterator<(PairKey, f64)> for DistanceMatrix {
    fn from_iter<I: IntoIterator<Item = (PairKey, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A finished tour: visiting order plus total length in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct TourSolution {
    pub route: Vec<String>,
    pub total_km: f64,
}

/// Result of a solver run. `NoSolution` is a distinct "no answer"
/// outcome, never to be confused with a zero-length tour.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Solved(TourSolution),
    NoSolution,
}

impl SolveOutcome {
    pub fn route(&self) -> &[String] {
        match self {
            SolveOutcome::Solved(solution) => &solution.route,
            SolveOutcome::NoSolution => &[],
        }
    }

    pub fn total_km(&self) -> f64 {
        match self {
            SolveOutcome::Solved(solution) => solution.total_km,
            SolveOutcome::NoSolution => f64::INFINITY,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}
