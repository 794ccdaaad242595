use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use skill_assign::config::{InputBounds, SchedulerConfig};
use skill_assign::scheduler::{
    AssignmentInput, AssignmentKpi, AssignmentOutcome, LedgerReport, SkillScheduler, TaskSpec,
    WorkerSpec,
};

#[derive(Parser, Debug)]
#[command(name = "skill-assign")]
#[command(version)]
#[command(about = "Assign tasks to workers by priority and best-fit skill")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Assign tasks read from a JSON document
    Run {
        /// Input file with `workers` and `tasks` arrays ("-" for stdin)
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[command(flatten)]
        bounds: BoundsArgs,
    },

    /// Enter employees and tasks interactively
    Prompt {
        #[command(flatten)]
        bounds: BoundsArgs,
    },
}

#[derive(Parser, Debug)]
struct BoundsArgs {
    /// Reject skill, difficulty or priority values outside --min..=--max
    #[arg(long)]
    strict: bool,

    /// Lowest accepted value with --strict
    #[arg(long, default_value_t = 1)]
    min: i32,

    /// Highest accepted value with --strict
    #[arg(long, default_value_t = 10)]
    max: i32,
}

impl BoundsArgs {
    fn config(&self) -> SchedulerConfig {
        if self.strict {
            SchedulerConfig::new().with_bounds(InputBounds::uniform(self.min, self.max))
        } else {
            SchedulerConfig::default()
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct RunSummary<'a> {
    outcomes: &'a [AssignmentOutcome],
    ledger: LedgerReport,
    kpi: AssignmentKpi,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Run {
            input,
            format,
            bounds,
        } => {
            let input = read_input(&input)?;
            execute(&input, bounds.config(), format, &mut out)
        }
        Commands::Prompt { bounds } => {
            let stdin = io::stdin();
            let input = prompt_input(&mut stdin.lock(), &mut out)?;
            execute(&input, bounds.config(), OutputFormat::Text, &mut out)
        }
    }
}

fn read_input(path: &Path) -> Result<AssignmentInput> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?
    };
    serde_json::from_str(&raw).context("Failed to parse assignment input")
}

fn execute<W: Write>(
    input: &AssignmentInput,
    config: SchedulerConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let mut scheduler = SkillScheduler::try_from_input(input, config)?;
    tracing::info!(
        workers = input.workers.len(),
        tasks = input.tasks.len(),
        "Starting assignment"
    );

    match format {
        OutputFormat::Text => {
            writeln!(out, "\nAssigning Tasks...")?;
            let outcomes = scheduler.assign_all();
            for outcome in &outcomes {
                writeln!(out, "{outcome}")?;
            }
            write!(out, "\n{}", scheduler.report())?;
        }
        OutputFormat::Json => {
            let outcomes = scheduler.assign_all();
            let summary = RunSummary {
                kpi: AssignmentKpi::calculate(&outcomes, scheduler.workers()),
                ledger: scheduler.report(),
                outcomes: &outcomes,
            };
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn prompt_input<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<AssignmentInput> {
    let mut records = AssignmentInput::new();

    let employees = ask_count(input, out, "Enter the number of employees: ")?;
    for _ in 0..employees {
        let name = ask(input, out, "Enter the Employee Name: ")?;
        let skill = ask_int(input, out, "Enter the Skill Level (1-10): ")?;
        records.workers.push(WorkerSpec::new(name, skill));
    }

    let tasks = ask_count(input, out, "\nEnter the number of tasks: ")?;
    for _ in 0..tasks {
        let title = ask(input, out, "Enter Task Title: ")?;
        let difficulty = ask_int(input, out, "Enter Task Difficulty (1-10): ")?;
        let priority = ask_int(input, out, "Enter Task Priority (1-10): ")?;
        records.tasks.push(TaskSpec::new(title, difficulty, priority));
    }

    Ok(records)
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn ask_int<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<i32> {
    let answer = ask(input, out, prompt)?;
    let answer = answer.trim();
    answer
        .parse()
        .with_context(|| format!("Expected an integer, got '{answer}'"))
}

fn ask_count<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<usize> {
    let answer = ask(input, out, prompt)?;
    let answer = answer.trim();
    answer
        .parse()
        .with_context(|| format!("Expected a non-negative count, got '{answer}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_collects_records() {
        let script = "2\nAlice\n5\nBob\n8\n1\nDeploy\n5\n1\n";
        let mut out = Vec::new();
        let input = prompt_input(&mut Cursor::new(script), &mut out).unwrap();

        assert_eq!(
            input.workers,
            vec![WorkerSpec::new("Alice", 5), WorkerSpec::new("Bob", 8)]
        );
        assert_eq!(input.tasks, vec![TaskSpec::new("Deploy", 5, 1)]);
        assert!(String::from_utf8(out)
            .unwrap()
            .starts_with("Enter the number of employees: "));
    }

    #[test]
    fn test_prompt_keeps_names_as_typed() {
        let script = "1\r\n  Ann Lee \r\n 7 \r\n1\n Ship it\n3\n 2\n";
        let mut out = Vec::new();
        let input = prompt_input(&mut Cursor::new(script), &mut out).unwrap();

        assert_eq!(input.workers, vec![WorkerSpec::new("  Ann Lee ", 7)]);
        assert_eq!(input.tasks, vec![TaskSpec::new(" Ship it", 3, 2)]);
    }

    #[test]
    fn test_prompt_rejects_bad_integer() {
        let script = "1\nAlice\nhigh\n";
        let mut out = Vec::new();
        let err = prompt_input(&mut Cursor::new(script), &mut out).unwrap_err();
        assert!(err.to_string().contains("high"));
    }

    #[test]
    fn test_prompt_truncated_input() {
        let mut out = Vec::new();
        assert!(prompt_input(&mut Cursor::new("3\nAlice\n"), &mut out).is_err());
    }

    #[test]
    fn test_execute_text_output() {
        let input = AssignmentInput::new()
            .with_worker(WorkerSpec::new("A", 5))
            .with_task(TaskSpec::new("T1", 3, 5))
            .with_task(TaskSpec::new("T2", 3, 1));
        let mut out = Vec::new();
        execute(&input, SchedulerConfig::default(), OutputFormat::Text, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\nAssigning Tasks...\n\
             Task 'T2' assigned to A\n\
             No available employee for task: T1\n\
             \nTask Assignments:\n\
             A (Skill 5) - [ T2 ] \n"
        );
    }

    #[test]
    fn test_execute_json_output() {
        let input = AssignmentInput::new()
            .with_worker(WorkerSpec::new("A", 5))
            .with_task(TaskSpec::new("T1", 8, 1));
        let mut out = Vec::new();
        execute(&input, SchedulerConfig::default(), OutputFormat::Json, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["outcomes"][0]["status"], "unassignable");
        assert_eq!(json["kpi"]["unassignable"], 1);
        assert_eq!(json["ledger"]["workers"][0]["name"], "A");
    }

    #[test]
    fn test_execute_strict_rejects() {
        let input = AssignmentInput::new().with_worker(WorkerSpec::new("A", 50));
        let mut out = Vec::new();
        let config = SchedulerConfig::strict();
        assert!(execute(&input, config, OutputFormat::Text, &mut out).is_err());
        assert!(out.is_empty());
    }
}
