//! Entry point: argument handling, the interactive step loop, and the
//! headless export commands.

use std::env;
use std::path::PathBuf;

use lifewheel_config::{Config, ConfigManager};
use lifewheel_core::NullSink;
use lifewheel_domain::Locale;
use lifewheel_storage_json::JsonSnapshotStorage;

use crate::build_info;

use super::{
    error::CliError,
    export, output,
    shell_context::{ShellContext, TracingSink},
    steps::{run_current_step, StepOutcome},
    strings::ui,
};

const USAGE: &str =
    "lifewheel_cli [--lang en|zh] | export <plan|calendar|data> [--out <file>] [--data-dir <dir>] [--lang en|zh] | version";

#[derive(Debug, Default)]
struct CliArgs {
    positional: Vec<String>,
    lang: Option<Locale>,
    out: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

pub fn run_cli() -> Result<(), CliError> {
    let args = parse_args(env::args().skip(1))?;

    match args.positional.first().map(String::as_str) {
        None => run_interactive(args.lang),
        Some("export") => run_export(args),
        Some("version") => {
            print_version();
            Ok(())
        }
        Some(other) => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Result<CliArgs, CliError> {
    let mut args = CliArgs::default();
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--lang" => {
                let value = raw.next().ok_or(CliError::Usage(USAGE))?;
                // Unrecognized tags fall back to the configured default.
                args.lang = Locale::from_tag(&value);
            }
            "--out" => {
                args.out = Some(PathBuf::from(raw.next().ok_or(CliError::Usage(USAGE))?));
            }
            "--data-dir" => {
                args.data_dir = Some(PathBuf::from(raw.next().ok_or(CliError::Usage(USAGE))?));
            }
            flag if flag.starts_with("--") => return Err(CliError::Usage(USAGE)),
            _ => args.positional.push(arg),
        }
    }
    Ok(args)
}

fn run_interactive(lang: Option<Locale>) -> Result<(), CliError> {
    let mut context = ShellContext::new(Box::new(TracingSink))?;
    if let Some(locale) = lang {
        context.set_initial_locale(locale);
    }

    while context.running {
        match run_current_step(&mut context)? {
            StepOutcome::Continue => {}
            StepOutcome::Quit => context.running = false,
        }
    }

    context.flush_now();
    output::info(ui(context.locale()).goodbye);
    Ok(())
}

/// Renders one export from the persisted snapshot without a terminal
/// session; used for scripting and by the integration tests.
fn run_export(args: CliArgs) -> Result<(), CliError> {
    let kind = args
        .positional
        .get(1)
        .ok_or(CliError::Usage(USAGE))?
        .clone();

    let (config_manager, config) = match args.data_dir {
        Some(dir) => {
            let manager = ConfigManager::with_base_dir(dir.clone())?;
            let mut config = load_config(&manager);
            config.data_root = Some(dir.clone());
            config.export_root = Some(dir);
            (manager, config)
        }
        None => {
            let manager = ConfigManager::with_base_dir(Config::default().resolve_data_root())?;
            let config = load_config(&manager);
            (manager, config)
        }
    };
    let storage = JsonSnapshotStorage::new(config.resolve_data_root())?;
    let mut context = ShellContext::with_parts(storage, config_manager, config, Box::new(NullSink));
    if let Some(locale) = args.lang {
        context.set_initial_locale(locale);
    }

    let path = match (kind.as_str(), args.out) {
        ("plan", Some(path)) => {
            export::write_plan(&context, &path)?;
            path
        }
        ("plan", None) => export::export_plan(&context)?,
        ("calendar", Some(path)) => {
            export::write_calendar(&context, &path)?;
            path
        }
        ("calendar", None) => export::export_calendar(&context)?,
        ("data", Some(path)) => {
            export::write_data(&context, &path)?;
            path
        }
        ("data", None) => export::export_data(&context)?,
        (other, _) => return Err(CliError::UnknownCommand(other.to_string())),
    };
    output::info(path.display());
    Ok(())
}

fn load_config(manager: &ConfigManager) -> Config {
    match manager.load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to load config, using defaults: {err}");
            Config::default()
        }
    }
}

fn print_version() {
    let build = build_info::current();
    output::info(format!(
        "lifewheel {} ({}-{}, {}) {}/{}",
        build.version, build.git_hash, build.git_status, build.timestamp, build.target, build.profile
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        parse_args(args.iter().map(|arg| arg.to_string())).expect("parse")
    }

    #[test]
    fn lang_flag_recognizes_supported_tags_only() {
        assert_eq!(parse(&["--lang", "en"]).lang, Some(Locale::En));
        assert_eq!(parse(&["--lang", "zh"]).lang, Some(Locale::Zh));
        // Unrecognized tags fall back to the configured default later on.
        assert_eq!(parse(&["--lang", "fr"]).lang, None);
    }

    #[test]
    fn flags_and_positionals_separate() {
        let args = parse(&["export", "plan", "--out", "/tmp/plan.md"]);
        assert_eq!(args.positional, ["export", "plan"]);
        assert_eq!(args.out.as_deref(), Some(std::path::Path::new("/tmp/plan.md")));
    }

    #[test]
    fn dangling_flags_report_usage() {
        let result = parse_args(["--lang".to_string()].into_iter());
        assert!(matches!(result, Err(CliError::Usage(_))));
        let result = parse_args(["--frobnicate".to_string()].into_iter());
        assert!(matches!(result, Err(CliError::Usage(_))));
    }
}
