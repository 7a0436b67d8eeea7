// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, ffi::OsString, path::PathBuf};

use crate::core::{CollectionRegistry, RunOutcome};
use crate::infra::t;

pub mod commands {
    pub mod run;
}

/// Arguments of a runner invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunArgs {
    /// Collection to run; falls back to the configured default.
    pub collection: Option<String>,
    pub config: Option<PathBuf>,
    pub lang: Option<String>,
    pub json_out: Option<PathBuf>,
    pub list: bool,
}

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|arg| arg.into().to_string_lossy().into_owned())
        .collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("capture-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("collection")
                .help(t!("cli.collection", locale = locale).to_string())
                .value_name("COLLECTION")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("cli.config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("json-out")
                .long("json-out")
                .help(t!("cli.json_out", locale = locale).to_string())
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help(t!("cli.list", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

fn args_from_matches(matches: &ArgMatches) -> RunArgs {
    RunArgs {
        collection: matches.get_one::<String>("collection").cloned(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        lang: matches.get_one::<String>("lang").cloned(),
        json_out: matches.get_one::<PathBuf>("json-out").cloned(),
        list: matches.get_flag("list"),
    }
}

/// Parses an argument list (including the program name) into [`RunArgs`].
pub fn parse_args_from<I, T>(args: I) -> Result<RunArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let locale = crate::resolve_locale(pre_parse_language(args.clone()).as_deref());
    let matches = build_cli(&locale).try_get_matches_from(args)?;
    Ok(args_from_matches(&matches))
}

/// Parses the process arguments and runs the requested collection against
/// `registry`, writing everything to stdout. Returns `None` for `--list`.
pub fn run(registry: &CollectionRegistry) -> Result<Option<RunOutcome>> {
    // Pre-parse language and initialize i18n first.
    let language = crate::resolve_locale(pre_parse_language(env::args_os()).as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();
    let args = args_from_matches(&matches);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run::execute(registry, &args, &mut out)
}
