//! CapyGreeter - Session catalog driver for the greeter
//!
//! Scans the configured session directories once, prints the sessions and
//! optionally records the user's choice for the next start.

mod config;
mod error;
mod session_model;
mod state;

use capy_sessions::{CatalogConfig, SessionCatalog};
use config::GreeterConfig;
use error::GreeterError;
use log::info;
use session_model::{SessionModel, SessionRole};
use state::LastSession;
use std::error::Error;
use std::path::PathBuf;

const USAGE: &str = "capy-greeter [--config PATH] [--state PATH] [--select FILE] [--json]";

#[derive(Debug, Default, PartialEq)]
struct Args {
    config: Option<PathBuf>,
    state: Option<PathBuf>,
    select: Option<String>,
    json: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, GreeterError> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(value_for(&arg, args.next())?.into()),
            "--state" => parsed.state = Some(value_for(&arg, args.next())?.into()),
            "--select" => parsed.select = Some(value_for(&arg, args.next())?),
            "--json" => parsed.json = true,
            "-h" | "--help" => return Err(GreeterError::Usage(USAGE.to_string())),
            other => {
                return Err(GreeterError::Usage(format!(
                    "unexpected argument '{}'\n{}",
                    other, USAGE
                )));
            }
        }
    }

    Ok(parsed)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, GreeterError> {
    value.ok_or_else(|| GreeterError::Usage(format!("{} needs a value\n{}", flag, USAGE)))
}

/// Record `file` as the last session if the catalog offers it.
fn select_session(
    catalog: &SessionCatalog,
    file: &str,
    state_path: &std::path::Path,
) -> Result<(), GreeterError> {
    if catalog.position(file).is_none() {
        return Err(GreeterError::UnknownSession(file.to_string()));
    }

    LastSession {
        session: file.to_string(),
    }
    .save(state_path)?;

    info!("Saved last session {} to {}", file, state_path.display());
    Ok(())
}

fn print_sessions(model: &SessionModel) {
    let roles = SessionModel::role_names();
    println!(
        "  {:<24} {:<28} {}",
        roles[&SessionRole::File],
        roles[&SessionRole::Name],
        roles[&SessionRole::Exec]
    );

    for row in 0..model.row_count() {
        let marker = if row == model.last_index() { '*' } else { ' ' };
        let field = |role| model.data(row, role).unwrap_or_default();
        println!(
            "{} {:<24} {:<28} {}",
            marker,
            field(SessionRole::File),
            field(SessionRole::Name),
            field(SessionRole::Exec)
        );
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = args
        .config
        .or_else(GreeterConfig::default_path)
        .map(|path| GreeterConfig::load(&path))
        .unwrap_or_default();

    let state_path = args.state.or_else(LastSession::default_path);
    let last = state_path
        .as_deref()
        .map(LastSession::load)
        .unwrap_or_default();

    let catalog = SessionCatalog::build(&CatalogConfig {
        sources: config.to_sources(),
        last_session: last.session,
        search_paths: None,
    });

    if args.json {
        let output = serde_json::json!({
            "last_index": catalog.last_index(),
            "sessions": catalog.entries(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_sessions(&SessionModel::new(&catalog));
    }

    if let Some(file) = args.select {
        let path = state_path.ok_or_else(|| {
            GreeterError::Usage(format!(
                "no state directory available, pass --state\n{}",
                USAGE
            ))
        })?;
        select_session(&catalog, &file, &path)?;
    }

    Ok(())
}
