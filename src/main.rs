use clap::Parser;
use landmark_tour::core::cheapest_arc::CheapestArcSolver;
use landmark_tour::core::exact::BruteForceSolver;
use landmark_tour::domain::ports::TourSolver;
use landmark_tour::utils::{logger, validation::Validate};
use landmark_tour::{
    config, CliConfig, CsvLandmarkSource, GoogleMapsOracle, LocalStorage, SolverKind, TourEngine,
    TourPipeline,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting landmark-tour");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let api_key = match config::api_key() {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {} (set it in the environment)", e);
            std::process::exit(1);
        }
    };

    let oracle = match GoogleMapsOracle::new(config.api_endpoint.clone(), api_key) {
        Ok(oracle) => oracle,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let source = CsvLandmarkSource::new(config.landmarks_file.clone());
    let storage = LocalStorage::new(".".to_string());
    let solver: Box<dyn TourSolver> = match config.solver {
        SolverKind::Exact => Box::new(BruteForceSolver::new(!config.open_tour)),
        SolverKind::CheapestArc => Box::new(CheapestArcSolver),
    };

    let pipeline = TourPipeline::new(source, storage, config, oracle, solver);
    let engine = TourEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            // Best-effort output even without a solution: empty path,
            // infinite distance.
            println!("\nShortest Path: {}", outcome.route().join(" → "));
            println!("Total Distance: {:.2} km", outcome.total_km());
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
