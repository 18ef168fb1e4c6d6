//! Russian Drill Trainer - number and shopping drills in the terminal
//!
//! Single-session, in-memory CLI application.
//! Numbers drill: random arithmetic problems read out in Russian.
//! Shopping drill: a scripted customer/seller dialogue.

mod cli;
mod config;
mod error;
mod logging;
mod numbers;
mod session;
mod shopping;
mod speech;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use cli::display::{print_vocabulary, Display};
use cli::input::{InputHandler, NumbersAction, ShoppingAction};
use config::{load_config, TrainerConfig, DEFAULT_CONFIG_FILE};
use numbers::phrase::{numeric_answer, problem_sentence, question_sentence};
use numbers::{Connector, Operator, Problem, ProblemGenerator};
use serde::Serialize;
use session::{SessionState, Settings, ShoppingState};
use speech::{CommandSpeech, Language, Silent, SpeechSink};
use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Drill {
    /// Arithmetic problems read in Russian
    Numbers,
    /// Shopping dialogue
    Shopping,
    /// Print the number and operator vocabulary
    Vocabulary,
}

#[derive(Parser, Debug)]
#[command(name = "Russian Drill Trainer")]
#[command(about = "Practice Russian numbers and shopping phrases in the terminal")]
struct Args {
    /// Drill to run
    #[arg(value_enum, default_value_t = Drill::Numbers)]
    drill: Drill,

    /// Enabled operators, e.g. --ops +,-,*,/
    #[arg(short, long, value_delimiter = ',')]
    ops: Vec<Operator>,

    /// Lower bound of the value range
    #[arg(long)]
    min: Option<u32>,

    /// Upper bound of the value range (at most 10000)
    #[arg(long)]
    max: Option<u32>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Seed for reproducible problems
    #[arg(long)]
    seed: Option<u64>,

    /// Disable speech output
    #[arg(long)]
    no_speech: bool,

    /// Print this many problems and exit instead of starting the drill
    #[arg(short, long)]
    batch: Option<usize>,

    /// Print batch problems as JSON lines
    #[arg(long, requires = "batch")]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// One batch-mode output record
#[derive(Serialize)]
struct BatchRecord {
    #[serde(flatten)]
    problem: Problem,
    russian: String,
}

/// Merge command-line overrides into the loaded config
fn apply_overrides(mut cfg: TrainerConfig, args: &Args) -> anyhow::Result<TrainerConfig> {
    if !args.ops.is_empty() {
        cfg.operators = args.ops.clone();
    }
    if let Some(min) = args.min {
        cfg.min = min;
    }
    if let Some(max) = args.max {
        cfg.max = max;
    }
    if args.no_speech {
        cfg.speech.enabled = false;
    }
    cfg.validate().context("invalid settings")?;
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let cfg = load_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let cfg = apply_overrides(cfg, &args)?;
    let settings = cfg.settings()?;

    let mut generator = match args.seed {
        Some(seed) => ProblemGenerator::seeded(seed),
        None => ProblemGenerator::from_entropy(),
    }
    .with_max_attempts(cfg.max_attempts);

    let speech: Box<dyn SpeechSink> = if cfg.speech.enabled {
        Box::new(CommandSpeech::new(cfg.speech.command.clone()))
    } else {
        Box::new(Silent)
    };

    if let Some(count) = args.batch {
        let mut out = std::io::stdout().lock();
        run_batch(&mut generator, &settings, count, args.json, &mut out)?;
        info!(fallbacks = generator.fallbacks(), "batch finished");
        return Ok(());
    }

    match args.drill {
        Drill::Vocabulary => {
            print_vocabulary(&numbers::vocabulary::sections());
            Ok(())
        }
        Drill::Numbers => run_numbers(settings, &mut generator, speech.as_ref()),
        Drill::Shopping => run_shopping(speech.as_ref()),
    }
}

/// One batch output line: `3 + 4 = 7 | ...` or a JSON record
fn batch_line(problem: Problem, connector: Connector, json: bool) -> anyhow::Result<String> {
    let russian = problem_sentence(&problem, connector);
    if json {
        Ok(serde_json::to_string(&BatchRecord { problem, russian })?)
    } else {
        Ok(format!("{} | {}", numeric_answer(&problem), russian))
    }
}

/// Write `count` problems to `out` without starting the terminal UI
fn run_batch<R: Rng>(
    generator: &mut ProblemGenerator<R>,
    settings: &Settings,
    count: usize,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if !settings.can_start() {
        bail!("no operators enabled; pass --ops or set `operators` in the config");
    }

    for _ in 0..count {
        let Some(problem) = generator.generate_from(&settings.operators, settings.range) else {
            break;
        };
        writeln!(out, "{}", batch_line(problem, settings.connector, json)?)?;
    }
    out.flush()?;
    Ok(())
}

const NUMBERS_SETTINGS_HELP: &str =
    "+ - * / toggle ops  |  [ ] Home min  |  { } End max  |  w answer word  |  ENTER start  |  Esc exit";
const NUMBERS_PRACTICE_HELP: &str =
    "ENTER new  |  SPACE answer  |  l listen  |  + - * / [ ] { } settings  |  s menu  |  Esc exit";
const SHOPPING_SHELF_HELP: &str = "1-6 choose product  |  q quantity  |  Esc exit";
const SHOPPING_DIALOGUE_HELP: &str =
    "ENTER next  |  l listen  |  e listen (English)  |  b other product  |  Esc exit";

fn run_numbers(
    settings: Settings,
    generator: &mut ProblemGenerator,
    speech: &dyn SpeechSink,
) -> anyhow::Result<()> {
    let mut session = SessionState::new(settings);
    session.start();

    let display = Display::alternate()?;
    let input = InputHandler::new();
    let mut dirty = true;

    // Event loop
    'session: loop {
        if dirty {
            display.clear()?;
            display.show_title("🇷🇺 Russian Numbers")?;
            if session.configuring {
                display.show_settings(&session.settings)?;
                display.show_help(NUMBERS_SETTINGS_HELP)?;
            } else {
                display.show_problem(&session)?;
                display.show_help(NUMBERS_PRACTICE_HELP)?;
            }
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(action) = InputHandler::numbers_action(&key, session.configuring) else {
            continue;
        };

        match action {
            NumbersAction::Quit => break 'session,
            NumbersAction::Listen => {
                if let Some(problem) = session.problem {
                    let text = if session.answer_shown {
                        problem_sentence(&problem, session.settings.connector)
                    } else {
                        question_sentence(&problem)
                    };
                    speech.speak(&text, Language::Russian);
                }
            }
            NumbersAction::Session(intent) => {
                session = session.apply(intent, generator);
                dirty = true;
            }
        }
    }

    display.shutdown()?;
    drop(display);

    info!(
        problems = session.stats.problems_generated,
        revealed = session.stats.answers_revealed,
        fallbacks = generator.fallbacks(),
        "numbers session finished"
    );

    // Summary
    println!("\n🎉 Session Complete!");
    println!(
        "📊 {} problems | {} answers revealed | {:.1} min",
        session.stats.problems_generated,
        session.stats.answers_revealed,
        session.duration_mins()
    );
    if session.settings.connector == Connector::WillBe {
        println!("Tip: \"бу́дет\" is the casual way to say \"равно́\".");
    }
    println!("Спаси́бо!");

    Ok(())
}

fn run_shopping(speech: &dyn SpeechSink) -> anyhow::Result<()> {
    let mut state = ShoppingState::new();

    let display = Display::alternate()?;
    let input = InputHandler::new();
    let mut dirty = true;

    'session: loop {
        if dirty {
            display.clear()?;
            display.show_title("🛒 Shopping")?;
            if state.product().is_some() {
                display.show_dialogue(&state)?;
                display.show_help(SHOPPING_DIALOGUE_HELP)?;
            } else {
                display.show_catalog(&state)?;
                display.show_help(SHOPPING_SHELF_HELP)?;
            }
            dirty = false;
        }

        let Some(key) = input.read_key()? else {
            continue;
        };
        let Some(action) = InputHandler::shopping_action(&key) else {
            continue;
        };

        match action {
            ShoppingAction::Quit => break 'session,
            ShoppingAction::Listen => {
                if let Some(line) = state.current_line() {
                    speech.speak(&line.ru, Language::Russian);
                }
            }
            ShoppingAction::ListenEnglish => {
                if let Some(line) = state.current_line() {
                    speech.speak(&line.en, Language::English);
                }
            }
            ShoppingAction::Session(intent) => {
                state = state.apply(intent);
                dirty = true;
            }
        }
    }

    display.shutdown()?;
    drop(display);

    println!("\n🎉 Session Complete!");
    println!("🛒 {} dialogues completed", state.dialogues_completed);
    println!("Спаси́бо!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbers::ValueRange;
    use std::collections::BTreeSet;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("ru-trainer").chain(argv.iter().copied())).unwrap()
    }

    fn batch_output(settings: &Settings, count: usize, json: bool) -> anyhow::Result<String> {
        let mut generator = ProblemGenerator::seeded(42);
        let mut out = Vec::new();
        run_batch(&mut generator, settings, count, json, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn three_plus_four() -> Problem {
        Problem {
            operand1: 3,
            operand2: 4,
            operator: Operator::Add,
            result: 7,
        }
    }

    #[test]
    fn test_plain_batch_line() {
        let line = batch_line(three_plus_four(), Connector::Equals, false).unwrap();
        assert_eq!(line, "3 + 4 = 7 | три плю́с четы́ре равно́ семь");
    }

    #[test]
    fn test_json_batch_line_flattens_the_problem() {
        let line = batch_line(three_plus_four(), Connector::WillBe, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "operand1": 3,
                "operand2": 4,
                "operator": "+",
                "result": 7,
                "russian": "три плю́с четы́ре бу́дет семь",
            })
        );
    }

    #[test]
    fn test_batch_writes_one_record_per_problem() {
        let settings = Settings::default();
        let output = batch_output(&settings, 5, true).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            let keys: BTreeSet<&str> = value
                .as_object()
                .unwrap()
                .keys()
                .map(String::as_str)
                .collect();
            assert_eq!(
                keys,
                BTreeSet::from(["operand1", "operand2", "operator", "result", "russian"])
            );
            assert_eq!(value["operator"], "+");
            let sum = value["operand1"].as_u64().unwrap() + value["operand2"].as_u64().unwrap();
            assert_eq!(value["result"].as_u64(), Some(sum));
        }
    }

    #[test]
    fn test_batch_is_reproducible_with_a_seed() {
        let settings = Settings::default();
        let first = batch_output(&settings, 10, false).unwrap();
        assert_eq!(first, batch_output(&settings, 10, false).unwrap());
        assert!(first.lines().all(|line| line.contains(" + ") && line.contains(" | ")));
    }

    #[test]
    fn test_batch_without_operators_fails() {
        let settings = Settings::default().toggle_operator(Operator::Add);
        let err = batch_output(&settings, 3, false).unwrap_err();
        assert!(err.to_string().contains("no operators enabled"));
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = TrainerConfig {
            operators: vec![Operator::Add],
            min: 1,
            max: 20,
            ..TrainerConfig::default()
        };
        let cfg = apply_overrides(
            cfg,
            &args(&["--ops", "*,/", "--min", "5", "--max", "50", "--no-speech"]),
        )
        .unwrap();
        assert_eq!(cfg.operators, vec![Operator::Multiply, Operator::Divide]);
        assert_eq!((cfg.min, cfg.max), (5, 50));
        assert!(!cfg.speech.enabled);

        let settings = cfg.settings().unwrap();
        assert_eq!(settings.range, ValueRange::new(5, 50).unwrap());
    }

    #[test]
    fn test_config_kept_without_flags() {
        let cfg = TrainerConfig {
            operators: vec![Operator::Subtract],
            min: 2,
            max: 9,
            ..TrainerConfig::default()
        };
        let merged = apply_overrides(cfg.clone(), &args(&["shopping"])).unwrap();
        assert_eq!(merged.operators, cfg.operators);
        assert_eq!((merged.min, merged.max), (2, 9));
        assert!(merged.speech.enabled);
    }

    #[test]
    fn test_overrides_are_validated() {
        let err = apply_overrides(TrainerConfig::default(), &args(&["--min", "30", "--max", "10"]))
            .unwrap_err();
        assert!(err.to_string().contains("invalid settings"));
    }

    #[test]
    fn test_json_requires_batch() {
        assert!(Args::try_parse_from(["ru-trainer", "--json"]).is_err());
        assert!(args(&["--batch", "3", "--json"]).json);
    }
}
