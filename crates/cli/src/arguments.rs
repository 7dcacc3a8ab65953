//! crates/cli/src/arguments.rs
//! Command definition and argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};
use grouped_logger::{CLOCK_TIME_DESCRIPTION, Group, Level};

/// Program name used when the argument list is empty and in diagnostics.
pub(crate) const PROGRAM_NAME: &str = "grouped-log";

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) show_help: bool,
    pub(crate) show_version: bool,
    pub(crate) level: Level,
    pub(crate) group: Option<Group>,
    pub(crate) timestamp: Option<String>,
    pub(crate) no_symbols: bool,
    pub(crate) config: Option<PathBuf>,
    pub(crate) trace: bool,
    pub(crate) message: Vec<String>,
}

impl ParsedArgs {
    /// Joins the message words with single spaces; `None` selects stdin mode.
    pub(crate) fn message(&self) -> Option<String> {
        (!self.message.is_empty()).then(|| self.message.join(" "))
    }
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    let command = Command::new(PROGRAM_NAME)
        .about("Print leveled, grouped and optionally timestamped log lines.")
        .override_usage("grouped-log [OPTIONS] [MESSAGE]...")
        .after_help(
            "With no MESSAGE, each line read from standard input is printed as one log line.\n\
             GROUPED_LOGGER_TIMESTAMP and GROUPED_LOGGER_SYMBOLS supply defaults that\n\
             --config replaces and the flags above override.",
        )
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Severity of the printed lines (debug, info, notice, warning, error, critical, alert, emergency, success).")
                .value_parser(|value: &str| value.parse::<Level>())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("group")
                .long("group")
                .short('g')
                .value_name("NAME")
                .help("Group tag rendered after the level, e.g. Network.")
                .value_parser(|value: &str| value.parse::<Group>())
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("timestamp")
                .long("timestamp")
                .short('t')
                .value_name("FORMAT")
                .help("Prefix a timestamp; FORMAT is a time format description (default [hour]:[minute]:[second]).")
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value(CLOCK_TIME_DESCRIPTION)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("no-symbols")
                .long("no-symbols")
                .help("Render bracketed level tags instead of glyphs.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Load settings from a JSON file instead of the environment.")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        );

    #[cfg(feature = "tracing")]
    let command = command.arg(
        Arg::new("trace")
            .long("trace")
            .help("Print the front-end's own diagnostics on standard error.")
            .action(ArgAction::SetTrue),
    );

    command.arg(
        Arg::new("message")
            .value_name("MESSAGE")
            .action(ArgAction::Append)
            .num_args(0..)
            .trailing_var_arg(true),
    )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    #[cfg(feature = "tracing")]
    let trace = matches.get_flag("trace");
    #[cfg(not(feature = "tracing"))]
    let trace = false;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        level: matches.remove_one::<Level>("level").unwrap_or_default(),
        group: matches.remove_one::<Group>("group"),
        timestamp: matches.remove_one::<String>("timestamp"),
        no_symbols: matches.get_flag("no-symbols"),
        config: matches.remove_one::<PathBuf>("config"),
        trace,
        message: matches
            .remove_many::<String>("message")
            .map(|values| values.collect())
            .unwrap_or_default(),
    })
}

/// Renders the help text generated from [`clap_command`].
pub(crate) fn render_help() -> String {
    clap_command().render_help().to_string()
}

/// Renders the version banner.
pub(crate) fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}
