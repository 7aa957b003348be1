//! Cluster the stickers of a cube by color.
//!
//! Reads cube data (default `cube_data.txt` in the working directory), fits a
//! six-cluster k-means model and prints each record's cluster and its distance
//! to every centroid.
//!
//! Usage: `cube-kmeans [input.txt]`

use cube_kmeans::{assemble, load_records, report, KMeans, KMeansConfig, CUBE_FACES, DEFAULT_INPUT};
use env_logger::Env;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn run(input_path: &Path) -> Result<(), String> {
    let records = load_records(input_path)
        .map_err(|e| format!("failed to load {}: {}", input_path.display(), e))?;
    let data = assemble(&records);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let sink_err = |e: io::Error| format!("failed to write report: {}", e);

    writeln!(out, "Start training model....").map_err(sink_err)?;
    let mut kmeans = KMeans::with_config(KMeansConfig::new(CUBE_FACES));
    kmeans
        .train(&data.view())
        .map_err(|e| format!("failed to fit model: {}", e))?;
    writeln!(out, "Model training complete!").map_err(sink_err)?;

    log::info!(
        "Fitted {} clusters in {} iterations (seed {}, inertia {:.4})",
        kmeans.k(),
        kmeans.n_iterations(),
        kmeans.config().seed,
        kmeans.inertia()
    );

    report(&mut out, &kmeans, &records).map_err(|e| format!("failed to write report: {}", e))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = env::args_os().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [input.txt]", Path::new(&args[0]).display());
        return ExitCode::FAILURE;
    }
    let input_path = args
        .get(1)
        .map(Path::new)
        .unwrap_or_else(|| Path::new(DEFAULT_INPUT));

    match run(input_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}
