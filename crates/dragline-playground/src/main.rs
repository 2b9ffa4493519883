//! `dragline-playground [--config FILE] strip | replay SCRIPT`
//!
//! Writes an SVG document to stdout. Set `RUST_LOG=debug` to trace endpoint
//! state changes during a replay.

use dragline_core::config::DragConfig;
use dragline_core::error::ConfigError;
use dragline_playground::script::{GestureScript, ScriptError, replay};
use dragline_playground::strip::barbell_strip;
use dragline_playground::svg::{SvgScene, render_svg};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

const USAGE: &str = "usage: dragline-playground [--config FILE] strip | replay SCRIPT";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}\n{usage}", usage = USAGE)]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

enum Command {
    Strip,
    Replay(PathBuf),
}

struct Args {
    config: Option<PathBuf>,
    command: Command,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, CliError> {
    let mut config = None;
    let mut command = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("--config needs a file".into()))?;
                config = Some(PathBuf::from(path));
            }
            "strip" if command.is_none() => command = Some(Command::Strip),
            "replay" if command.is_none() => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage("replay needs a script".into()))?;
                command = Some(Command::Replay(PathBuf::from(path)));
            }
            other => return Err(CliError::Usage(format!("unexpected argument `{other}`"))),
        }
    }

    let command = command.ok_or_else(|| CliError::Usage("missing command".into()))?;
    Ok(Args { config, command })
}

fn run(args: Args) -> Result<String, CliError> {
    let config = match &args.config {
        Some(path) => DragConfig::load(path)?,
        None => DragConfig::default(),
    };

    match args.command {
        Command::Strip => {
            let strip = barbell_strip(&config.connection);
            log::info!("rendering {} barbells", strip.len());
            let scene = SvgScene {
                barbells: &strip,
                ..Default::default()
            };
            Ok(render_svg(&scene, &config))
        }
        Command::Replay(path) => {
            let script = GestureScript::load(&path)?;
            let result = replay(&script);
            log::info!(
                "{} connection(s), {} error(s)",
                result.connections.len(),
                result.errors.len()
            );
            let scene = SvgScene {
                board: Some(&result.board),
                connections: &result.connections,
                drag_line: result.overlay.line(),
                ..Default::default()
            };
            Ok(render_svg(&scene, &config))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match parse_args(std::env::args().skip(1)).and_then(run) {
        Ok(svg) => {
            print!("{svg}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
