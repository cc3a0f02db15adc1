use httpmock::prelude::*;
use landmark_tour::core::cheapest_arc::CheapestArcSolver;
use landmark_tour::core::exact::BruteForceSolver;
use landmark_tour::domain::model::SolveOutcome;
use landmark_tour::domain::ports::TourSolver;
use landmark_tour::{
    CliConfig, CsvLandmarkSource, GoogleMapsOracle, LocalStorage, SolverKind, TourEngine,
    TourPipeline,
};
use std::io::Write;
use tempfile::TempDir;

const NAMES: [&str; 5] = ["Hotel", "Mall", "Hospital", "Temple", "Station"];

/// Landmarks on a line: landmark i sits at latitude 10+i, so the mocked
/// driving distance between i and j is |i - j| kilometers.
fn coordinate(i: usize) -> String {
    format!("{},70", 10 + i)
}

fn write_landmarks_csv(dir: &TempDir, names: &[&str]) {
    let path = dir.path().join("landmarks.csv");
    let mut file = std::fs::File::create(path).unwrap();
    writeln!(file, "Landmark Name,Latitude,Longitude").unwrap();
    for (i, name) in names.iter().enumerate() {
        writeln!(file, "{},{},70", name, 10 + i).unwrap();
    }
}

fn test_config(dir: &TempDir, server: &MockServer, solver: SolverKind) -> CliConfig {
    CliConfig {
        landmarks_file: dir
            .path()
            .join("landmarks.csv")
            .to_str()
            .unwrap()
            .to_string(),
        cache_file: "cached_distances.json".to_string(),
        api_endpoint: server.url("/"),
        concurrent_requests: 10,
        solver,
        open_tour: false,
        verbose: false,
    }
}

fn build_engine(
    dir: &TempDir,
    server: &MockServer,
    solver: Box<dyn TourSolver>,
) -> TourEngine<
    TourPipeline<CsvLandmarkSource, LocalStorage, CliConfig, GoogleMapsOracle, Box<dyn TourSolver>>,
> {
    let config = test_config(dir, server, SolverKind::Exact);
    let source = CsvLandmarkSource::new(config.landmarks_file.clone());
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    let oracle = GoogleMapsOracle::new(config.api_endpoint.clone(), "test-key").unwrap();
    TourEngine::new(TourPipeline::new(source, storage, config, oracle, solver))
}

/// One mock per ordered landmark pair, keyed on the origins/destinations
/// query parameters.
fn mock_line_distances(server: &MockServer, n: usize) -> Vec<httpmock::Mock<'_>> {
    let mut mocks = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let meters = 1000 * i.abs_diff(j);
            mocks.push(server.mock(|when, then| {
                when.method(GET)
                    .path("/")
                    .query_param("origins", coordinate(i))
                    .query_param("destinations", coordinate(j))
                    .query_param("mode", "driving")
                    .query_param("units", "metric")
                    .query_param("key", "test-key");
                then.status(200).json_body(serde_json::json!({
                    "status": "OK",
                    "rows": [{"elements": [{
                        "status": "OK",
                        "distance": {"value": meters}
                    }]}]
                }));
            }));
        }
    }
    mocks
}

#[tokio::test]
async fn test_exact_tour_matches_hand_computed_scenario() {
    let dir = TempDir::new().unwrap();
    write_landmarks_csv(&dir, &NAMES);
    let server = MockServer::start();
    let mocks = mock_line_distances(&server, 5);

    let engine = build_engine(&dir, &server, Box::new(BruteForceSolver::default()));
    let outcome = engine.run().await.unwrap();

    // All 20 ordered pairs fetched exactly once.
    for mock in &mocks {
        mock.assert();
    }

    // On a line the cheapest closed tour walks out and back: 4 km out,
    // 4 km home. The identity permutation reaches it first.
    assert_eq!(
        outcome.route().join(" → "),
        "Hotel → Mall → Hospital → Temple → Station"
    );
    assert_eq!(format!("{:.2}", outcome.total_km()), "8.00");
}

#[tokio::test]
async fn test_cheapest_arc_agrees_on_line_scenario() {
    let dir = TempDir::new().unwrap();
    write_landmarks_csv(&dir, &NAMES);
    let server = MockServer::start();
    mock_line_distances(&server, 5);

    let engine = build_engine(&dir, &server, Box::new(CheapestArcSolver));
    let outcome = engine.run().await.unwrap();

    // The heuristic's closed walk repeats the depot at the end.
    assert_eq!(
        outcome.route().join(" → "),
        "Hotel → Mall → Hospital → Temple → Station → Hotel"
    );
    assert_eq!(format!("{:.2}", outcome.total_km()), "8.00");
}

#[tokio::test]
async fn test_second_run_is_served_from_cache() {
    let dir = TempDir::new().unwrap();
    write_landmarks_csv(&dir, &NAMES);
    let server = MockServer::start();

    // Catch-all: every pair is 2 km away.
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "rows": [{"elements": [{"status": "OK", "distance": {"value": 2000}}]}]
        }));
    });

    let engine = build_engine(&dir, &server, Box::new(BruteForceSolver::default()));
    let first = engine.run().await.unwrap();
    assert_eq!(api_mock.hits(), 20);

    // A valid cache file now exists and is authoritative: the rerun
    // makes zero network calls and reproduces the result.
    let cache_path = dir.path().join("cached_distances.json");
    assert!(cache_path.exists());

    let engine = build_engine(&dir, &server, Box::new(BruteForceSolver::default()));
    let second = engine.run().await.unwrap();
    assert_eq!(api_mock.hits(), 20);
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_corrupt_cache_is_rebuilt_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_landmarks_csv(&dir, &["Hotel", "Mall", "Hospital"]);
    std::fs::write(dir.path().join("cached_distances.json"), "{{{ not json").unwrap();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(serde_json::json!({
            "status": "OK",
            "rows": [{"elements": [{"status": "OK", "distance": {"value": 1500}}]}]
        }));
    });

    let engine = build_engine(&dir, &server, Box::new(BruteForceSolver::default()));
    let outcome = engine.run().await.unwrap();

    assert_eq!(api_mock.hits(), 6);
    assert!(outcome.is_solved());

    // The rebuilt cache parses again.
    let cache = std::fs::read(dir.path().join("cached_distances.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&cache).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn test_stranded_landmark_reports_no_solution_in_both_solvers() {
    let dir = TempDir::new().unwrap();
    write_landmarks_csv(&dir, &["Hotel", "Mall", "Hospital"]);
    let server = MockServer::start();

    // Every arc out of Hospital (index 2) fails; everything else is 1 km.
    for i in 0..3usize {
        for j in 0..3usize {
            if i == j {
                continue;
            }
            let body = if i == 2 {
                serde_json::json!({
                    "status": "OK",
                    "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}]
                })
            } else {
                serde_json::json!({
                    "status": "OK",
                    "rows": [{"elements": [{"status": "OK", "distance": {"value": 1000}}]}]
                })
            };
            server.mock(|when, then| {
                when.method(GET)
                    .path("/")
                    .query_param("origins", coordinate(i))
                    .query_param("destinations", coordinate(j));
                then.status(200).json_body(body.clone());
            });
        }
    }

    for solver in [
        Box::new(BruteForceSolver::default()) as Box<dyn TourSolver>,
        Box::new(CheapestArcSolver) as Box<dyn TourSolver>,
    ] {
        // Separate cache dirs so each run fetches its own matrix.
        let run_dir = TempDir::new().unwrap();
        write_landmarks_csv(&run_dir, &["Hotel", "Mall", "Hospital"]);
        let engine = build_engine(&run_dir, &server, solver);
        let outcome = engine.run().await.unwrap();
        assert_eq!(outcome, SolveOutcome::NoSolution);
        assert!(outcome.route().is_empty());
        assert!(outcome.total_km().is_infinite());
    }
}

#[tokio::test]
async fn test_missing_landmark_file_fails_before_any_network_work() {
    let dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).json_body(serde_json::json!({"status": "OK", "rows": []}));
    });

    let engine = build_engine(&dir, &server, Box::new(CheapestArcSolver));
    let result = engine.run().await;

    assert!(result.is_err());
    assert_eq!(api_mock.hits(), 0);
}
