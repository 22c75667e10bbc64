// src/bin/deck_dev_cli.rs

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use tcg_deck_sim::api::build_deck_dto;
use tcg_deck_sim::domain::Rules;
use tcg_deck_sim::parser::{check_size, DeckListParser, LineOutcome, ParserConfig};

/// Разобрать дек-лист и показать нормализованную колоду.
#[derive(Parser, Debug)]
#[command(name = "deck_dev_cli")]
struct Args {
    /// Файл с дек-листом, `-` — читать из stdin.
    #[arg(long)]
    deck: PathBuf,

    /// JSON с правилами (`banned_cards`, `deck_size`).
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Ожидаемый размер колоды (по умолчанию — из правил).
    #[arg(long)]
    expected_size: Option<usize>,

    /// Строгий режим: плохая строка — ошибка.
    #[arg(long)]
    strict: bool,

    /// Лимит копий в одной строке (не выше MAX_LINE_QUANTITY).
    #[arg(long)]
    max_copies: Option<u32>,

    /// Вывести DeckDto в JSON вместо текстового отчёта.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let text = match read_deck_text(&args.deck) {
        Ok(t) => t,
        Err(e) => {
            error!("Не удалось прочитать {}: {}", args.deck.display(), e);
            return ExitCode::from(1);
        }
    };

    let rules = match args.rules.as_deref().map(load_rules).transpose() {
        Ok(r) => r.unwrap_or_default(),
        Err(msg) => {
            error!("{msg}");
            return ExitCode::from(1);
        }
    };

    let parser = DeckListParser::new(ParserConfig {
        strict: args.strict,
        max_copies_per_line: args.max_copies,
    });
    let report = parser.parse_with_report(&text, Some(&rules));

    if args.strict {
        if let Some(err) = report.first_error() {
            error!("{err}");
            return ExitCode::from(65);
        }
    }

    let expected = args.expected_size.unwrap_or(rules.deck_size);

    if args.json {
        let dto = build_deck_dto(&report, expected);
        match serde_json::to_string_pretty(&dto) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                error!("Не удалось сериализовать колоду: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        println!("=== DECK ===");
        for (name, count) in report.deck.counts() {
            println!("{count:>3} {name}");
        }
        println!(
            "--- всего карт: {}, разных: {}",
            report.deck.total(),
            report.deck.unique_len()
        );

        for outcome in &report.outcomes {
            match outcome {
                LineOutcome::Banned { line, name, quantity } => {
                    println!("[BANNED] строка {line}: {name} x{quantity}");
                }
                LineOutcome::Dropped { line, text, .. } => {
                    println!("[DROPPED] строка {line}: {text:?}");
                }
                LineOutcome::Accepted { .. } => {}
            }
        }
    }

    if let Err(e) = check_size(&report.deck, expected) {
        warn!("{e}");
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}

fn read_deck_text(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn load_rules(path: &Path) -> Result<Rules, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Не удалось прочитать {}: {}", path.display(), e))?;
    Rules::from_json_str(&raw).map_err(|e| format!("{}: {}", path.display(), e))
}
