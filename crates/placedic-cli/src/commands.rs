use anyhow::{Context, Result};
use tracing::{debug, info_span};

use placedic_cli::pipeline::{BuildRequest, BuildResult, run_build};
use placedic_model::{CombinationMode, InputFailurePolicy, PipelineConfig};

use crate::cli::{Cli, CombinationArg};

pub fn run(cli: &Cli) -> Result<BuildResult> {
    let request = build_request(cli)?;
    let span = info_span!(
        "build",
        output = %request.output.display(),
        combinations = %request.options.combinations,
    );
    let _guard = span.enter();
    debug!(?request, "Resolved build request");
    run_build(&request)
}

/// Merge defaults, the optional config file, and command-line flags, in that order.
fn build_request(cli: &Cli) -> Result<BuildRequest> {
    let config = match &cli.config {
        Some(path) => PipelineConfig::load(path).context("load config")?,
        None => PipelineConfig::default(),
    };
    let PipelineConfig {
        mut dictionary,
        mut pipeline,
        output,
    } = config;

    if let Some(pos_id) = cli.pos_id {
        dictionary = dictionary.with_pos_id(pos_id);
    }
    if let Some(cost) = cli.cost {
        dictionary = dictionary.with_cost(cost);
    }
    if let Some(mode) = cli.combinations {
        pipeline = pipeline.with_combinations(combination_mode(mode));
    }
    if cli.no_validate {
        pipeline = pipeline.with_validation(false);
    }
    if cli.lenient_inputs {
        pipeline = pipeline.with_input_failure(InputFailurePolicy::Lenient);
    }
    if let Some(min) = cli.min_surface_chars {
        pipeline = pipeline.with_min_surface_chars(min);
    }

    Ok(BuildRequest {
        address_csv: cli.address_csv.clone(),
        business_csv: cli.business_csv.clone(),
        output: cli.output.clone().unwrap_or(output.path),
        dictionary,
        options: pipeline,
        dry_run: cli.dry_run,
    })
}

fn combination_mode(arg: CombinationArg) -> CombinationMode {
    match arg {
        CombinationArg::Full => CombinationMode::Full,
        CombinationArg::CityTown => CombinationMode::CityTown,
        CombinationArg::Hierarchical => CombinationMode::Hierarchical,
    }
}
