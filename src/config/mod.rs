use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TourError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::env;

pub const GOOGLE_MAPS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SolverKind {
    /// Exhaustive permutation search; exact but factorial.
    Exact,
    /// Greedy cheapest-arc construction from the depot.
    CheapestArc,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "landmark-tour")]
#[command(about = "Shortest driving tour over a set of named landmarks")]
pub struct CliConfig {
    /// CSV file with "Landmark Name", "Latitude", "Longitude" columns.
    #[arg(long, default_value = "landmarks.csv")]
    pub landmarks_file: String,

    #[arg(long, default_value = "cached_distances.json")]
    pub cache_file: String,

    #[arg(long, default_value = GOOGLE_MAPS_ENDPOINT)]
    pub api_endpoint: String,

    /// Worker bound for the pairwise distance fan-out; a rate-limit
    /// tunable, not a correctness knob.
    #[arg(long, default_value = "10")]
    pub concurrent_requests: usize,

    #[arg(long, value_enum, default_value = "cheapest-arc")]
    pub solver: SolverKind,

    /// Leave the tour open instead of returning to the first landmark
    /// (exact solver only).
    #[arg(long)]
    pub open_tour: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn landmarks_file(&self) -> &str {
        &self.landmarks_file
    }

    fn cache_file(&self) -> &str {
        &self.cache_file
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_non_empty_string("landmarks_file", &self.landmarks_file)?;
        validate_non_empty_string("cache_file", &self.cache_file)?;
        validate_range("concurrent_requests", self.concurrent_requests, 1, 100)?;
        Ok(())
    }
}

/// The mapping-service credential comes from the process environment;
/// absence is fatal before any network work starts.
pub fn api_key() -> Result<String> {
    api_key_from("API_KEY")
}

fn api_key_from(var: &str) -> Result<String> {
    match env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(TourError::MissingConfigError {
            field: var.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            landmarks_file: "landmarks.csv".to_string(),
            cache_file: "cached_distances.json".to_string(),
            api_endpoint: GOOGLE_MAPS_ENDPOINT.to_string(),
            concurrent_requests: 10,
            solver: SolverKind::CheapestArc,
            open_tour: false,
            verbose: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let mut config = base_config();
        config.api_endpoint = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let mut config = base_config();
        config.concurrent_requests = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_present() {
        env::set_var("LANDMARK_TOUR_TEST_KEY", "abc123");
        assert_eq!(api_key_from("LANDMARK_TOUR_TEST_KEY").unwrap(), "abc123");
    }

    #[test]
    fn test_api_key_missing_is_config_error() {
        let err = api_key_from("LANDMARK_TOUR_UNSET_KEY").unwrap_err();
        assert!(matches!(err, TourError::MissingConfigError { .. }));
    }
}
