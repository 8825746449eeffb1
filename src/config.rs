//! Run configuration: command-line arguments with environment fallbacks.
//!
//! | Variable         | Default              | Description                              |
//! |------------------|----------------------|------------------------------------------|
//! | `ARTWORKS_INPUT` | `input-artworks.txt` | command file, when no path is given      |
//! | `ARTWORKS_LOG`   | `warn`               | tracing filter (trace/debug/info/warn/error) |

use argh::FromArgs;
use std::env as stdenv;
use std::path::PathBuf;

pub const INPUT_ENV: &str = "ARTWORKS_INPUT";
pub const LOG_ENV: &str = "ARTWORKS_LOG";
pub const DEFAULT_INPUT: &str = "input-artworks.txt";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(FromArgs, Debug, Default)]
/// Manage paintings and sculptures with ADD, REM and PRINT commands read from a file.
pub struct Args {
    #[argh(positional)]
    /// command file to run. Defaults to $ARTWORKS_INPUT, then input-artworks.txt.
    pub input: Option<PathBuf>,

    #[argh(switch)]
    /// skip the startup listing and the demonstration removal.
    pub no_prelude: bool,

    #[argh(switch, short = 'i')]
    /// keep reading commands from the terminal after the file.
    pub interactive: bool,
}

/// Settings the binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File whose lines are run as commands.
    pub input: PathBuf,
    /// Print the seeded store, remove `Мрамор`, print again.
    pub prelude: bool,
    pub interactive: bool,
    /// Tracing filter string, e.g. `"artworks=debug"`.
    pub log_filter: String,
}

impl Config {
    /// Resolve arguments against the process environment.
    pub fn from_args(args: Args) -> Self {
        Self::resolve(args, |key| stdenv::var(key).ok())
    }

    /// Resolve arguments, looking variables up with `get_var`.
    pub fn resolve(args: Args, get_var: impl Fn(&str) -> Option<String>) -> Self {
        let input = args
            .input
            .or_else(|| non_empty(get_var(INPUT_ENV)).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        let log_filter =
            non_empty(get_var(LOG_ENV)).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            input,
            prelude: !args.no_prelude,
            interactive: args.interactive,
            log_filter,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(Args::default(), |_| None)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
