use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use engine_logging::{engine_debug, engine_error, engine_info, LogDestination};
use log::LevelFilter;
use upload_core::{Msg, SelectedFile, UploadController, UploadPhase};
use upload_engine::EngineHandle;

use super::cli::{Cli, Selection};
use super::config::AppConfig;
use super::effects::EffectRunner;
use super::terminal_view::TerminalView;

pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    init_logging(cli.verbose, config.log_file.as_deref());
    engine_debug!("Effective settings: {:?}", config);

    let selection = cli
        .selection()
        .context("no file given; pass a path or --drop <PATH>")?;

    let engine = EngineHandle::new(config.engine_config()).context("starting upload engine")?;
    let runner = EffectRunner::new(engine);
    let mut controller = UploadController::new(TerminalView::stdout());

    let select_msg = match &selection {
        Selection::Dropped(path) => {
            let file = read_selection(path)?;
            controller.dispatch(Msg::DragEntered);
            Msg::FileDropped(Some(file))
        }
        Selection::Picked(path) => Msg::FilePicked(Some(read_selection(path)?)),
    };
    controller.dispatch(select_msg);

    let effects = controller.dispatch(Msg::SubmitClicked);
    for reply in runner.run(effects) {
        controller.dispatch(reply);
    }

    let view = controller.view_model();
    match (view.phase, view.downloads, &config.download_dir) {
        (UploadPhase::Success, Some(downloads), Some(dir)) => {
            let locators = [downloads.docx_href.as_str(), downloads.md_href.as_str()];
            let mut all_saved = true;
            for (locator, outcome) in runner.download_all(&locators, dir) {
                match outcome {
                    Ok(path) => println!("Saved {}", path.display()),
                    Err(err) => {
                        all_saved = false;
                        engine_error!("Download of {} failed ({}): {}", locator, err.kind, err);
                        println!("[!!] Could not download {locator}: {err}");
                    }
                }
            }
            Ok(exit_code(all_saved))
        }
        (UploadPhase::Success, _, _) => Ok(ExitCode::SUCCESS),
        (phase, _, _) => {
            engine_info!("Upload finished in phase {:?}", phase);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = match log_file {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    engine_logging::initialize(level, destination);
}

/// Reads the chosen file into memory; its name is the last path component.
fn read_selection(path: &Path) -> Result<SelectedFile> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} does not name a file", path.display()))?;
    let content = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(SelectedFile::new(name, content))
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
