//! Command dispatch: maps parsed CLI arguments onto services

use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::report;
use crate::application::{Session, SessionOptions, SessionSummary};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{self, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Commands::Completion { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let config_dir = cli.config_dir.clone().or_else(|| std::env::current_dir().ok());
    let settings = Settings::load(config_dir.as_deref())?;
    if !settings.color {
        output::disable_colors();
    }
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Commands::Play { layout } => cmd_play(&container, layout.as_deref()),
        Commands::Run { layout, script } => cmd_run(&container, layout, script),
        Commands::Show { layout } => cmd_show(&container, layout),
        Commands::Check { layout } => cmd_check(&container, layout),
        Commands::Config { command } => cmd_config(&container, command, config_dir.as_deref()),
        Commands::Completion { .. } => Ok(()),
    }
}

#[instrument(skip(container))]
fn cmd_play(container: &ServiceContainer, layout: Option<&Path>) -> CliResult<()> {
    let layout: PathBuf = layout
        .map(Path::to_path_buf)
        .or_else(|| container.settings.default_layout.clone())
        .ok_or_else(|| {
            CliError::Usage("no layout given and no default_layout configured".into())
        })?;
    debug!("cmd_play: layout={}", layout.display());

    let mut yard = container.yard_service.load(&layout)?;
    let options = SessionOptions::from(container.settings.as_ref());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = Session::new(&mut yard, options)
        .run(stdin.lock(), &mut stdout)
        .map_err(|e| InfraError::io("interactive session", e))?;
    report_summary(&summary);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_run(container: &ServiceContainer, layout: &Path, script: &Path) -> CliResult<()> {
    let mut yard = container.yard_service.load(layout)?;
    let commands = container.yard_service.read_script(script)?;
    debug!("cmd_run: {} commands", commands.len());

    let options = SessionOptions {
        echo: true,
        ..SessionOptions::from(container.settings.as_ref())
    };
    let input = Cursor::new(commands.join("\n"));
    let mut stdout = io::stdout();
    let summary = Session::new(&mut yard, options)
        .run(input, &mut stdout)
        .map_err(|e| InfraError::io("scripted session", e))?;
    report_summary(&summary);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, layout: &Path) -> CliResult<()> {
    let yard = container.yard_service.load(layout)?;
    output::info(&report::render_yard(&yard));
    output::info(&report::summary(&yard));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_check(container: &ServiceContainer, layout: &Path) -> CliResult<()> {
    let yard = container.yard_service.load(layout)?;
    output::success(&format!(
        "{}: {} tracks, {} cars, {} locomotives, {} destinations",
        layout.display(),
        yard.len(),
        yard.total_cars(),
        yard.locomotive_count(),
        yard.destination_count()
    ));
    if !yard.should_continue() {
        output::warning("layout has no locomotive at the front of any track");
    }
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    config_dir: Option<&Path>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match config::global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            if let Some(dir) = config_dir {
                output::action("local", &config::local_config_path(dir).display());
            }
        }
    }
    Ok(())
}

fn report_summary(summary: &SessionSummary) {
    debug!(
        "session: commands={} rejected={} departures={} quit={}",
        summary.commands, summary.rejected, summary.departures, summary.quit
    );
}
