//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs logging
//! - resolves configuration and loads the chi2 profile
//! - evaluates / scans / plots
//! - prints reports and writes optional exports

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Command, EvalArgs, InfoArgs, PlotArgs, ProfileArgs, ScanArgs};
use crate::error::AppError;
use crate::io::curve::{DistanceCurve, read_distance_curve};
use crate::likelihood::{AlphaLikelihood, Likelihood, TabulatedTheory};

pub mod config;

/// Entry point for the `bao` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Info(args) => handle_info(args),
        Command::Eval(args) => handle_eval(args),
        Command::Scan(args) => handle_scan(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_likelihood(profile: &ProfileArgs) -> Result<AlphaLikelihood, AppError> {
    let env = config::EnvOverrides::from_env()?;
    let config = config::resolve_config(&env, profile);
    Ok(AlphaLikelihood::initialize(config)?)
}

fn handle_info(args: InfoArgs) -> Result<(), AppError> {
    let like = load_likelihood(&args.profile)?;
    let requirements = serde_json::to_string_pretty(&like.get_requirements())
        .map_err(|e| AppError::new(4, format!("Failed to serialize requirements: {e}")))?;

    if !args.json {
        println!("{}", crate::report::format_summary(&like));
        println!("Requirements:");
    }
    println!("{requirements}");
    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let like = load_likelihood(&args.profile)?;
    let (z_min, z_max) = (like.config().grid.z_min, like.config().grid.z_max);

    let curve = match (&args.curve, args.dm) {
        (Some(path), _) => read_distance_curve(path)?,
        (None, Some(dm)) => DistanceCurve::constant(dm, z_min, z_max),
        (None, None) => return Err(AppError::new(2, "Provide either --dm or --curve.")),
    };

    let theory = TabulatedTheory::new(curve).with_param(like.config().rdrag_param.clone(), args.rdrag);
    let request = like.request_from(&theory)?;
    let eval = like.evaluate(&request);

    if args.json {
        let json = serde_json::to_string_pretty(&eval)
            .map_err(|e| AppError::new(4, format!("Failed to serialize evaluation: {e}")))?;
        println!("{json}");
    } else {
        print!("{}", crate::report::format_evaluation(&eval, args.rdrag));
    }
    Ok(())
}

fn handle_scan(args: ScanArgs) -> Result<(), AppError> {
    let like = load_likelihood(&args.profile)?;
    let points = crate::scan::scan_rdrag(&like, args.dm, args.rdrag_min, args.rdrag_max, args.steps)?;
    let best = crate::scan::best_point(&points);

    print!("{}", crate::report::format_scan(&points, best.as_ref()));
    if let Some(best) = &best {
        println!("\nBest: rdrag={:.4} alpha={:.6} logp={:.4}", best.rdrag, best.alpha, best.logp);
    }

    if let Some(path) = &args.export {
        crate::io::export::write_scan(path, &like, args.dm, &points)?;
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let like = load_likelihood(&args.profile)?;
    let marker = match (args.dm, args.rdrag) {
        (Some(dm), Some(rdrag)) => Some(like.predict_alpha(dm, rdrag)),
        _ => None,
    };

    let plot = crate::plot::render_profile_plot(like.table(), marker, args.width, args.height);
    println!("{plot}");
    Ok(())
}
