//! CLI argument definitions for the `gk` command.
//!
//! Defines all subcommands, their arguments, and long help text
//! using the `clap` derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::grade::DEFAULT_POINTS_PER_INCORRECT;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(name = "gk", version, about = "Assignment unit-test harness")]
pub struct Cli {
    /// Increase log verbosity on stderr (-v: info, -vv: debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the bundled test sets and compute the assignment grade
    #[command(long_about = "\
Run the bundled test sets and compute the assignment grade.

Each test set declares how many assertions it runs. After it finishes, the
harness compares that number with the assertions that actually passed or
failed:

  ran == declared           consistent
  ran == 0, declared > 0    disabled: every declared test counts as SKIPPED
  anything else             authoring error: reported loudly, never fatal

Grade:
  100 - (graded failures + graded skips) x penalty, floored at 0

Non-graded test sets (performance timings) are reported but never affect
the grade. The command always exits 0 once the grade is printed.

Examples:
  gk run                                      # all groups
  gk run --group vec2                         # only the Vec2 group
  gk run --disable \"AABB2 - Mutator Methods\"  # skip one test set
  gk run --penalty 5                          # 5 points per incorrect test
  gk run --json                               # machine-readable output")]
    Run {
        /// Output as JSON (suppresses console text)
        #[arg(long)]
        json: bool,

        /// Points deducted per failed or skipped graded test (default: 2)
        #[arg(long, default_value_t = DEFAULT_POINTS_PER_INCORRECT)]
        penalty: u32,

        /// Disable a test set by label; its declared tests count as skipped (repeatable)
        #[arg(long, value_name = "LABEL")]
        disable: Vec<String>,

        /// Run only the named group (repeatable, case-insensitive)
        #[arg(long, value_name = "NAME")]
        group: Vec<String>,
    },

    /// List bundled groups and test sets with their declared test counts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
