//! CLI entrypoint for roster
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod settings;

use anyhow::{Result, anyhow};
use chrono::Local;
use clap::Parser;
use roster_application::{
    FetchOutcome, FetchPeopleInput, FetchPeopleUseCase, NoProgress, NoRunLogger, PeopleSource,
    ProgressNotifier, RunLogger,
};
use roster_domain::PersonId;
use roster_infrastructure::{ConfigLoader, HttpPeopleSource, JsonlRunLogger, StaticPeopleSource};
use roster_presentation::{
    Cli, ConsoleFormatter, KeyControls, OutputFormatter, ProgressReporter, RunReport,
    SimpleProgress,
};
use settings::RunSettings;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let (settings, warnings) = RunSettings::resolve(&cli, file_config)?;
    for issue in &warnings {
        eprintln!("{}", issue);
    }
    if !settings.color {
        colored::control::set_override(false);
    }

    info!("Starting roster. {}", settings.mode.description());

    // === Cancellation sources ===
    let cancel = CancellationToken::new();

    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, cancelling");
            ctrl_c.cancel();
        }
    });

    if let Some(ms) = cli.cancel_after {
        let timer = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            info!("Cancelling after {}ms", ms);
            timer.cancel();
        });
    }

    let quit = if cli.no_keys {
        CancellationToken::new()
    } else {
        if settings.show_progress {
            eprintln!("One moment please ('x' + Enter to cancel, 'q' + Enter to quit)");
        }
        KeyControls::new(cancel.clone()).spawn()
    };

    // === Dependency Injection ===
    let run_logger: Arc<dyn RunLogger> = match &cli.event_log {
        Some(path) => match JsonlRunLogger::new(path) {
            Some(logger) => Arc::new(logger),
            None => {
                warn!("Event log disabled");
                Arc::new(NoRunLogger)
            }
        },
        None => Arc::new(NoRunLogger),
    };

    let progress: Box<dyn ProgressNotifier> = if !settings.show_progress {
        Box::new(NoProgress)
    } else if settings.simple_progress {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let started = Local::now();
    let outcome = if cli.offline {
        let mut source = StaticPeopleSource::sample()
            .with_failures(cli.fail.iter().copied().map(PersonId::new));
        if let Some(ms) = cli.delay_ms {
            source = source.with_delay(Duration::from_millis(ms));
        }
        run(Arc::new(source), &settings, run_logger, &cancel, progress.as_ref(), &quit).await
    } else {
        let source = HttpPeopleSource::new(&settings.source)?;
        info!("Using people service at {}", source.base_url());
        run(Arc::new(source), &settings, run_logger, &cancel, progress.as_ref(), &quit).await
    };
    let finished = Local::now();

    let Some(outcome) = outcome else {
        info!("Quit requested");
        return Ok(ExitCode::SUCCESS);
    };

    let report = RunReport {
        mode: settings.mode,
        outcome: &outcome,
        started,
        finished,
    };
    let formatter: Box<dyn OutputFormatter> = Box::new(ConsoleFormatter);
    println!("{}", formatter.render(&report, settings.format));

    Ok(match outcome {
        FetchOutcome::Failed { .. } => ExitCode::FAILURE,
        FetchOutcome::Succeeded(_) | FetchOutcome::Canceled => ExitCode::SUCCESS,
    })
}

/// Run the use case until it finishes or the user quits (`None`).
async fn run<S: PeopleSource + 'static>(
    source: Arc<S>,
    settings: &RunSettings,
    run_logger: Arc<dyn RunLogger>,
    cancel: &CancellationToken,
    progress: &dyn ProgressNotifier,
    quit: &CancellationToken,
) -> Option<FetchOutcome> {
    let use_case = FetchPeopleUseCase::new(source)
        .with_params(settings.params.clone())
        .with_run_logger(run_logger);

    tokio::select! {
        outcome = use_case.execute_with_progress(FetchPeopleInput::new(settings.mode), cancel, progress) => Some(outcome),
        _ = quit.cancelled() => None,
    }
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` takes precedence over `-v`. With `log_dir`, a second
/// daily-rotated plain-text layer is added; keep the guard alive until exit.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|e| anyhow!("Cannot create log directory {}: {}", dir.display(), e))?;
            let appender = tracing_appender::rolling::daily(dir, "roster.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}
