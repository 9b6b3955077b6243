mod report;

use riftmatch::{DEFAULT_PRIORITY, Engine, RuleSet};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::{EnvFilter, fmt};

fn init_logging() {
    let filter = EnvFilter::try_from_env("RIFTMATCH_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let engine = match build_engine(&config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&engine, &config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliPair {
    left: String,
    right: String,
    priority: i64,
    literal: bool,
}

struct CliConfig {
    rule_set: Option<RuleSet>,
    pairs: Vec<CliPair>,
    inputs: Vec<String>,
    list_pairs: bool,
    json: bool,
    color: bool,
}

fn build_engine(config: &CliConfig) -> Result<Engine, String> {
    let engine = Engine::new();
    if let Some(set) = config.rule_set {
        engine.load_rule_set(set);
    }
    for pair in &config.pairs {
        engine
            .try_add_pair(&pair.left, &pair.right, pair.priority, pair.literal)
            .map_err(|err| format!("error: --pair: {err}"))?;
    }
    Ok(engine)
}

fn run(engine: &Engine, config: &CliConfig) -> Result<(), String> {
    let report = report::Report::new(config.color, config.json);

    if config.list_pairs {
        report.pairs(&engine.pairs())?;
    }
    for input in &config.inputs {
        let result = engine.match_input(input);
        report.result(input, &result)?;
    }
    report.metrics(&engine.metrics())
}

fn parse_args() -> Result<CliConfig, String> {
    let mut rule_set: Option<RuleSet> = None;
    let mut pairs: Vec<CliPair> = Vec::new();
    let mut input: Option<String> = None;
    let mut priority = DEFAULT_PRIORITY;
    let mut list_pairs = false;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("riftmatch {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--list" => list_pairs = true,
            "--rules" | "-r" => {
                let value = args.next().ok_or_else(|| "error: --rules expects a value".to_string())?;
                rule_set = parse_rule_set(&value)?;
            }
            "--priority" => {
                let value = args.next().ok_or_else(|| "error: --priority expects a value".to_string())?;
                priority = parse_priority(&value)?;
            }
            "--pair" | "-p" | "--literal-pair" | "-l" => {
                let literal = matches!(arg.as_str(), "--literal-pair" | "-l");
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a value"))?;
                pairs.push(parse_pair(&value, priority, literal)?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--rules=") => {
                rule_set = parse_rule_set(arg.trim_start_matches("--rules="))?;
            }
            _ if arg.starts_with("--priority=") => {
                priority = parse_priority(arg.trim_start_matches("--priority="))?;
            }
            _ if arg.starts_with("--pair=") => {
                pairs.push(parse_pair(arg.trim_start_matches("--pair="), priority, false)?);
            }
            _ if arg.starts_with("--literal-pair=") => {
                pairs.push(parse_pair(arg.trim_start_matches("--literal-pair="), priority, true)?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                input = Some(rest);
                break;
            }
        }
    }

    let inputs = match input {
        Some(value) => vec![value],
        None if list_pairs && io::stdin().is_terminal() => Vec::new(),
        None => read_stdin_lines()?,
    };

    if inputs.is_empty() && !list_pairs {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { rule_set, pairs, inputs, list_pairs, json, color })
}

fn read_stdin_lines() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect())
}

fn parse_rule_set(value: &str) -> Result<Option<RuleSet>, String> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value.parse::<RuleSet>().map(Some).map_err(|err| format!("error: --rules: {err}"))
}

fn parse_priority(value: &str) -> Result<i64, String> {
    value.parse::<i64>().map_err(|_| format!("error: invalid --priority '{value}' (expected an integer)"))
}

fn parse_pair(value: &str, priority: i64, literal: bool) -> Result<CliPair, String> {
    let (left, right) =
        value.split_once("=>").ok_or_else(|| format!("error: invalid pair '{value}' (expected LEFT=>RIGHT)"))?;
    if left.is_empty() {
        return Err(format!("error: invalid pair '{value}' (empty left pattern)"));
    }
    Ok(CliPair { left: left.to_string(), right: right.to_string(), priority, literal })
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "riftmatch {version}

Bipartite pattern engine CLI: match input against LEFT=>RIGHT pairs and print
the rendered output of the best pair.

Usage:
  riftmatch [OPTIONS] [--] <input...>
  riftmatch [OPTIONS] < lines.txt

Options:
  -r, --rules <set>            Seed pairs from a built-in table: python, go, none.
                               Default: none
  -p, --pair <LEFT=>RIGHT>     Add a template pair ($N and {{name}} markers).
  -l, --literal-pair <LEFT=>RIGHT>
                               Add a pair whose right side is used verbatim.
  --priority <n>               Priority for the pairs that follow (smaller wins).
                               Default: {default_priority}
  --list                       Print the stored pairs before matching.
  --json                       Print results and metrics as JSON lines.
  --color                      Force ANSI color output.
  --no-color                   Disable ANSI color output.
  -h, --help                   Show this help message.
  -V, --version                Print version information.

Input is the remaining arguments joined with spaces. Without arguments every
non-empty stdin line is matched separately.

Environment:
  RIFTMATCH_LOG                Log filter for stderr diagnostics (e.g. debug).

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments, invalid pair, or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_priority = DEFAULT_PRIORITY
    )
}
