use std::error::Error;
use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::Cli;
use crate::error::HarnessError;
use crate::grade::{GradePolicy, GradeSummary};
use crate::grade::report::{JsonRun, final_report};
use crate::report_helpers::{self, max_label_width, pad_right, print_json_stdout};
use crate::runner::Session;
use crate::suites::{self, Group};

/// Options for `gk run`.
pub struct RunOptions {
    pub json: bool,
    pub penalty: u32,
    pub disable: Vec<String>,
    pub groups: Vec<String>,
}

/// Run the selected groups on stdout, then print the grade (or the JSON
/// report).
pub fn run(opts: &RunOptions) -> Result<(), Box<dyn Error>> {
    let mut session = if opts.json {
        Session::quiet()
    } else {
        Session::stdout()
    };
    let summary = run_into(&mut session, opts)?;
    if opts.json {
        print_json_stdout(&JsonRun::new(
            session.accumulator(),
            session.history(),
            summary,
        ))?;
    }
    Ok(())
}

/// Run the selected groups through `session`, starting from zeroed
/// counters, and grade the result. Unless `opts.json` is set, the final
/// results block is written to the session's console.
pub fn run_into(session: &mut Session, opts: &RunOptions) -> Result<GradeSummary, HarnessError> {
    let groups = suites::builtin();
    suites::check_labels(&groups, &opts.disable)?;
    let selected = suites::select(&groups, &opts.groups)?;

    session.reset();
    session.disable(opts.disable.iter().cloned());
    execute(session, &selected);

    let summary = GradePolicy::new(opts.penalty).summarize(session.accumulator());
    if !opts.json {
        let report = final_report(session.accumulator(), &summary);
        session.emit(report);
    }
    Ok(summary)
}

/// Drive `groups` in order through `session`.
pub fn execute(session: &mut Session, groups: &[&Group]) {
    for group in groups {
        suites::run_group(session, group);
    }
}

/// JSON-serializable representation of one bundled test set.
#[derive(Serialize)]
struct JsonSet {
    group: &'static str,
    name: &'static str,
    graded: bool,
    declared: usize,
}

fn list_rows(groups: &[Group]) -> Vec<JsonSet> {
    groups
        .iter()
        .flat_map(|g| {
            g.sets.iter().map(move |s| JsonSet {
                group: g.name,
                name: s.name,
                graded: s.graded,
                declared: suites::declared_count(s),
            })
        })
        .collect()
}

pub fn list(json: bool) -> Result<(), Box<dyn Error>> {
    let rows = list_rows(&suites::builtin());
    if json {
        return print_json_stdout(&rows);
    }
    write_list(&mut io::stdout().lock(), &rows)?;
    Ok(())
}

fn write_list(out: &mut impl Write, rows: &[JsonSet]) -> io::Result<()> {
    let width = max_label_width(rows.iter().map(|r| r.name), 8);
    let separator = report_helpers::separator(width + 26);

    writeln!(out, "{separator}")?;
    writeln!(
        out,
        " {} {:<8} {:<10} {:>8}",
        pad_right("Test set", width),
        "Group",
        "Graded",
        "Declared"
    )?;
    writeln!(out, "{separator}")?;
    for r in rows {
        writeln!(
            out,
            " {} {:<8} {:<10} {:>8}",
            pad_right(r.name, width),
            r.group,
            if r.graded { "graded" } else { "non-graded" },
            r.declared
        )?;
    }
    writeln!(out, "{separator}")?;
    let total: usize = rows.iter().filter(|r| r.graded).map(|r| r.declared).sum();
    writeln!(out, " {total} graded tests declared")
}

pub fn completions(shell: Shell) {
    write_completions(shell, &mut io::stdout());
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "gk", out);
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
