//! Command dispatch and handlers

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::ExportService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { file, leaves }) => _show(file, *leaves),
        Some(Commands::Layout { file }) => _layout(file),
        Some(Commands::Leaves { file }) => _leaves(file),
        Some(Commands::Scan { dir }) => _scan(dir.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "rstree", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

fn service() -> CliResult<ExportService> {
    let settings = Settings::load()?;
    Ok(ExportService::from_settings(&settings)?)
}

#[instrument]
fn _show(file: &Path, leaves: bool) -> CliResult<()> {
    debug!("file: {:?}", file);
    let export = service()?.parse_file(file)?;
    output::info(&output::tree_display(&export.tree, leaves));
    Ok(())
}

#[instrument]
fn _layout(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let service = service()?;
    let export = service.parse_file(file)?;
    match service.layout(&export.tree) {
        Some(layout) => {
            for line in output::layout_lines(&layout) {
                output::info(&line);
            }
        }
        // a bare-leaf export has no decision boxes to place
        None => output::warning("export has no decision nodes, nothing to lay out"),
    }
    Ok(())
}

#[instrument]
fn _leaves(file: &Path) -> CliResult<()> {
    debug!("file: {:?}", file);
    let export = service()?.parse_file(file)?;
    let classes = export.tree.leaf_classes();
    if classes.is_empty() {
        output::info("no leaves");
        return Ok(());
    }
    let counts = classes.iter().counts();
    for (class_id, count) in counts.into_iter().sorted() {
        output::info(&format!("class {}: {} leaves", class_id, count));
    }
    Ok(())
}

#[instrument]
fn _scan(dir: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load()?;
    let directory: PathBuf = match dir {
        Some(d) => d.to_path_buf(),
        None => settings.resolved_default_dir().ok_or_else(|| {
            CliError::Usage("no directory given and no default_dir configured".into())
        })?,
    };
    debug!("directory: {:?}", directory);

    let service = ExportService::from_settings(&settings)?;
    let exports = service.scan_directory(&directory)?;
    if exports.is_empty() {
        output::warning(&format!(
            "no .{} exports found in {}",
            settings.export_extension,
            directory.display()
        ));
        return Ok(());
    }
    for export in &exports {
        output::header(&export.path.display());
        output::info(&output::tree_display(&export.tree, false));
    }
    output::success(&format!("{} exports parsed", exports.len()));
    Ok(())
}

#[instrument]
fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}

#[instrument]
fn _config_init() -> CliResult<()> {
    let Some(path) = global_config_path() else {
        return Err(CliError::Usage("cannot determine config directory".into()));
    };
    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| {
            CliError::App(crate::application::ApplicationError::Io {
                context: format!("create config dir: {}", dir.display()),
                source: e,
            })
        })?;
    }
    std::fs::write(&path, Settings::template()).map_err(|e| {
        CliError::App(crate::application::ApplicationError::Io {
            context: format!("write config: {}", path.display()),
            source: e,
        })
    })?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

#[instrument]
fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "(exists)" } else { "(absent)" };
            output::info(&format!("{} {}", path.display(), marker));
        }
        None => output::warning("cannot determine config directory"),
    }
    Ok(())
}
