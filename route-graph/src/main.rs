use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use route_graph::agglomeration::Agglomerations;
use route_graph::config::RunConfig;
use route_graph::graph::GraphBuilder;
use route_graph::input::{load_directions, load_trips};
use route_graph::planner::search_directions;
use route_graph::report::{FoundRoute, RunSummary};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let agglomerations = match &config.agglomerations_path {
        Some(path) => match Agglomerations::load(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => Agglomerations::new(),
    };

    let trips = match load_trips(&config.trips_path) {
        Ok(trips) => trips,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let directions = match load_directions(&config.directions_path) {
        Ok(directions) => directions,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Shortest alternative paths");
    println!();

    let start = Instant::now();

    let mut builder = GraphBuilder::new(&agglomerations);
    builder.extend(&trips.records);
    let (graph, stats) = builder.finish();
    if stats.clamped_weights > 0 {
        info!(clamped = stats.clamped_weights, "Negative trip weights clamped to zero");
    }

    let summary = RunSummary {
        trips: trips.len(),
        skipped_trips: trips.skipped,
        skipped_directions: directions.skipped,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        ..RunSummary::default()
    };

    let batch = search_directions(
        Arc::new(graph),
        Arc::new(agglomerations),
        directions.records,
        &config.search,
    )
    .await;

    let summary = RunSummary {
        elapsed: start.elapsed(),
        ..summary
    }
    .with_batch(&batch);

    if config.verbose {
        for (query, route) in batch.found() {
            println!("{}", FoundRoute { query, summary: route });
        }
        println!();
    }

    println!("{summary}");
    ExitCode::SUCCESS
}
