use std::path::Path;

use tracing::info;

use crate::{
    args::ProbeArgs,
    charts::plot_run,
    domain::run::{ArtifactPaths, RunId},
    error::{AppError, AppResult, SinkError},
    http::{self, ClientSettings, DriverSettings, ReqwestTransport},
    metrics::{SuccessfulSubset, summarize},
};

use super::export::{JsonExport, export_csv, export_json};
use super::summary::{NO_PLOT_NOTE, print_summary};

/// Runs one probe loop and writes every artifact for it.
///
/// # Errors
///
/// Returns an error when the target is invalid, the output directory cannot
/// be created, or any artifact fails to write.
pub(crate) async fn run_probe(args: &ProbeArgs, run_id: &RunId) -> AppResult<()> {
    let url = http::compose_url(&args.host, args.port, &args.path)?;
    let output_dir = Path::new(&args.output_dir);
    tokio::fs::create_dir_all(output_dir).await.map_err(|err| {
        AppError::sink(SinkError::CreateOutputDir {
            path: output_dir.to_path_buf(),
            source: err,
        })
    })?;
    let paths = ArtifactPaths::new(output_dir, run_id);

    let client = http::build_client(&ClientSettings::from(args))?;
    let transport = ReqwestTransport::new(client);
    let settings = DriverSettings {
        duration: args.target_duration.as_secs(),
        sleep: args.sleep(),
    };
    info!("Run {} targeting {}", run_id, url);

    let record = http::run_loop(&transport, &url, &settings).await;
    let observations = record.observations();

    export_csv(&paths.csv, observations).await?;
    println!();
    println!("Saved raw data: {}", paths.csv.display());

    let subset = SuccessfulSubset::from_observations(observations);
    let summary = summarize(observations, &subset);
    print_summary(&summary);

    if let Some(json_path) = args.export_json.as_deref() {
        let export = JsonExport {
            run_id,
            url: &url,
            summary: &summary,
            observations,
        };
        export_json(Path::new(json_path), &export).await?;
        println!("Saved JSON export: {}", json_path);
    }

    if args.no_charts {
        info!("Chart generation disabled.");
        return Ok(());
    }

    if plot_run(&subset, &paths)? {
        println!(
            "Saved plots: {}, {}",
            paths.histogram.display(),
            paths.scatter.display()
        );
    } else {
        println!("{}", NO_PLOT_NOTE);
    }

    Ok(())
}
