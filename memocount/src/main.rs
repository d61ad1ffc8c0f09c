//! # memocount
//!
//! A monitoring-agent plugin that reports how many Markdown memos a
//! directory holds and how many lines they add up to.
//!
//! ## Usage
//!
//! ```bash
//! # Print current values
//! memocount /path/to/memo_dir
//!
//! # Label the graph "Diary Count" instead of "Memo Count"
//! memocount --metric-key-prefix Diary /path/to/memo_dir
//!
//! # Print graph metadata, as the agent does on startup
//! MACKEREL_AGENT_PLUGIN_META=1 memocount /path/to/memo_dir
//!
//! # Single-dash long flags from existing agent configs are accepted too
//! memocount -metric-key-prefix=Diary /path/to/memo_dir
//! ```
//!
//! Logs go to stderr; stdout carries only agent output.

mod render;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use memocountlib::{MemoCountPlugin, Plugin, PluginOptions, DEFAULT_PREFIX};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Reports the number of Markdown memos in a directory and their total lines.
#[derive(Parser, Debug)]
#[command(
    name = "memocount",
    version,
    override_usage = "memocount [OPTION] /path/to/memo_dir"
)]
struct Args {
    /// Directory holding the memos.
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Metric key prefix, used for the graph label.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    metric_key_prefix: String,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Long flags that agent configs pass with a single dash.
const SINGLE_DASH_FLAGS: &[&str] = &["-metric-key-prefix"];

fn is_single_dash_flag(arg: &str) -> bool {
    SINGLE_DASH_FLAGS.iter().any(|flag| {
        arg == *flag
            || arg
                .strip_prefix(flag)
                .is_some_and(|rest| rest.starts_with('='))
    })
}

/// Rewrite `-metric-key-prefix[=X]` into the `--` form clap expects.
///
/// Arguments after a `--` terminator are left alone.
fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    let mut end_of_flags = false;

    args.into_iter()
        .map(|arg| {
            if end_of_flags {
                return arg;
            }
            if arg == "--" {
                end_of_flags = true;
                return arg;
            }
            let rewritten = arg
                .to_str()
                .filter(|s| is_single_dash_flag(s))
                .map(|s| OsString::from(format!("-{s}")));
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("memocount={level},memocountlib={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let options = PluginOptions::new(&args.dir).prefix(args.metric_key_prefix);
    let plugin = MemoCountPlugin::new(options);
    let graphs = plugin.graph_definition();

    if render::meta_requested() {
        debug!("printing graph metadata");
        print!("{}", render::render_meta(&graphs)?);
        return Ok(());
    }

    let metrics = plugin
        .fetch_metrics()
        .with_context(|| format!("fetching metrics for {}", plugin.directory().display()))?;
    let timestamp = chrono::Utc::now().timestamp();

    print!("{}", render::render_metrics(&graphs, &metrics, timestamp));
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // Usage errors exit with 1; --help and --version succeed
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(args.verbose, args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
