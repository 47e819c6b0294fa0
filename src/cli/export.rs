//! File export/import plumbing around the pure formatters.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Local;
use lifewheel_core::{CalendarService, PlanService, SnapshotStorage, WizardAction, WizardEvent};

use super::{error::CliError, shell_context::ShellContext};

pub fn export_plan(context: &ShellContext) -> Result<PathBuf, CliError> {
    let path = export_root(context)?.join(format!("lifewheel-plan-{}.md", context.plan_year()));
    write_plan(context, &path)?;
    Ok(path)
}

pub fn write_plan(context: &ShellContext, path: &Path) -> Result<(), CliError> {
    let markdown = PlanService::markdown(context.state(), context.plan_year());
    fs::write(path, markdown)?;
    context.record(&WizardEvent::PlanExported);
    Ok(())
}

pub fn export_calendar(context: &ShellContext) -> Result<PathBuf, CliError> {
    let path = export_root(context)?.join(format!("lifewheel-{}-reviews.ics", context.plan_year()));
    write_calendar(context, &path)?;
    Ok(path)
}

pub fn write_calendar(context: &ShellContext, path: &Path) -> Result<(), CliError> {
    let ics = CalendarService::ics(context.locale(), context.plan_year());
    fs::write(path, ics)?;
    context.record(&WizardEvent::CalendarExported);
    Ok(())
}

/// Writes the raw snapshot for the user to keep; named with today's date
/// like the in-app download.
pub fn export_data(context: &ShellContext) -> Result<PathBuf, CliError> {
    let path = export_root(context)?.join(format!(
        "lifewheel-{}.json",
        Local::now().format("%Y-%m-%d")
    ));
    write_data(context, &path)?;
    Ok(path)
}

pub fn write_data(context: &ShellContext, path: &Path) -> Result<(), CliError> {
    context.storage().export_to_path(context.state(), path)?;
    context.record(&WizardEvent::DataExported);
    Ok(())
}

/// Replaces the whole state from a user-supplied file. Fails without
/// touching the current state; the caller surfaces the error.
pub fn import_data(context: &mut ShellContext, path: &Path) -> Result<(), CliError> {
    let snapshot = context.storage().import_from_path(path)?;
    context.dispatch(WizardAction::Load(Box::new(snapshot)));
    context.record(&WizardEvent::DataImported);
    Ok(())
}

fn export_root(context: &ShellContext) -> Result<PathBuf, CliError> {
    let root = context.config.resolve_export_root();
    fs::create_dir_all(&root)?;
    Ok(root)
}
