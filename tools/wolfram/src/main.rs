//! Runs elementary and 3-color totalistic cellular automata.
//!
//!   `wolfram elementary 110`                    - rule 110 from the default seed
//!   `wolfram elementary 184 --init 0110100111`  - explicit initial row
//!   `wolfram totalistic 219 --start-color 1`    - totalistic code 219
//!   `wolfram elementary 30 --table`             - print the rule table only
//!   `wolfram presets --iterations 200`          - summary of the classic rules
//!
//! Set `RUST_LOG=debug` to see the derived tables and run shape.

mod render;

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rhizome_resin_wolfram::{
    Boundary, ElementaryRule, History, RunConfig, Simulation, TotalisticRule,
    elementary_rules, totalistic_codes,
};

#[derive(Parser)]
#[command(name = "wolfram", about = "One-dimensional cellular automata")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run a Wolfram elementary rule (0-255)
    Elementary {
        /// Rule number
        rule: u32,
        /// Print the rule table instead of running
        #[arg(long)]
        table: bool,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Run a 3-color totalistic code (0-2186)
    Totalistic {
        /// Code number
        code: u32,
        /// State of the seed cell when no --init row is given
        #[arg(long)]
        start_color: Option<u8>,
        /// Print the rule table instead of running
        #[arg(long)]
        table: bool,
        #[command(flatten)]
        run: RunArgs,
    },
    /// Run the classic rules and codes and summarize them
    Presets {
        /// Number of steps per run
        #[arg(long, default_value_t = 500)]
        iterations: usize,
    },
}

#[derive(Args)]
struct RunArgs {
    /// JSON file with a run configuration; flags override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of steps
    #[arg(long)]
    iterations: Option<usize>,
    /// Length of the default seed row
    #[arg(long)]
    width: Option<usize>,
    /// Offset of the seed cell from the middle of the row
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<isize>,
    /// Edge handling
    #[arg(long, value_enum)]
    boundary: Option<BoundaryArg>,
    /// Initial row as a string of digits, e.g. 0010100
    #[arg(long)]
    init: Option<String>,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundaryArg {
    Reflect,
    Wrap,
    Zero,
}

impl From<BoundaryArg> for Boundary {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Reflect => Boundary::Reflect,
            BoundaryArg::Wrap => Boundary::Wrap,
            BoundaryArg::Zero => Boundary::ZERO,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Cmd::Elementary { rule, table, run } => {
            let rule = ElementaryRule::try_from(rule)?;
            if table {
                return print_table(render::elementary_table(&rule));
            }
            let config = run.to_config()?;
            let history = Simulation::new(rule).run_config(&config)?;
            emit(&history, run.format)
        }
        Cmd::Totalistic {
            code,
            start_color,
            table,
            run,
        } => {
            let rule = TotalisticRule::new(code)?;
            if table {
                return print_table(render::totalistic_table(&rule));
            }
            let mut config = run.to_config()?;
            if let Some(color) = start_color {
                config = config.with_start_color(color);
            }
            let history = Simulation::new(rule).run_config(&config)?;
            emit(&history, run.format)
        }
        Cmd::Presets { iterations } => cmd_presets(iterations),
    }
}

impl RunArgs {
    fn to_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => RunConfig::default(),
        };

        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(width) = self.width {
            config.seed.row_length = width;
        }
        if let Some(offset) = self.offset {
            config.seed.center_offset = offset;
        }
        if let Some(boundary) = self.boundary {
            config.boundary = boundary.into();
        }
        if let Some(init) = &self.init {
            config.initial_row = Some(parse_row(init)?);
        }

        log::debug!("run config: {config:?}");
        Ok(config)
    }
}

/// Parses a row written as digits; whitespace is ignored.
fn parse_row(text: &str) -> Result<Vec<u8>> {
    let row = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => bail!("initial row has non-digit {c:?} at cell {i}"),
        })
        .collect::<Result<Vec<u8>>>()?;
    if row.is_empty() {
        bail!("initial row is empty");
    }
    Ok(row)
}

fn emit(history: &History, format: Format) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match format {
        Format::Text => render::write_text(&mut out, history)?,
        Format::Json => {
            serde_json::to_writer(&mut out, history)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn print_table(lines: Vec<String>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn cmd_presets(iterations: usize) -> Result<()> {
    let config = RunConfig::new(iterations);
    let mut summaries = Vec::new();

    let elementary = [
        (elementary_rules::RULE_110, "Turing complete"),
        (elementary_rules::RULE_90, "Sierpinski triangle"),
        (elementary_rules::RULE_30, "chaos"),
        (elementary_rules::RULE_135, "inverse of 30"),
        (elementary_rules::RULE_184, "traffic"),
    ];
    for (rule, note) in elementary {
        let sim = Simulation::new(ElementaryRule::new(rule));
        let history = sim.run_config(&config)?;
        summaries.push(render::summary(&format!("rule {rule}"), note, &history));
    }

    let totalistic = [
        (totalistic_codes::CODE_1023, "Sierpinski triangle"),
        (totalistic_codes::CODE_219, "pillars"),
        (totalistic_codes::CODE_1599, "pattern"),
        (totalistic_codes::CODE_1041, "chaos"),
    ];
    for ((code, start_color), note) in totalistic {
        let sim = Simulation::new(TotalisticRule::new(code)?);
        let history = sim.run_config(&config.clone().with_start_color(start_color))?;
        summaries.push(render::summary(&format!("code {code}"), note, &history));
    }

    print_table(summaries)
}
