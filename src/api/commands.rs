use serde::{Deserialize, Serialize};

use crate::domain::rules::{Rules, DEFAULT_DECK_SIZE};
use crate::lineup::Lineup;
use crate::parser::{DeckListParser, ParserConfig};

use super::dto::{build_deck_dto, lineup_to_dto, CommandResponse, DeckDto, LineupDto};
use super::errors::ApiError;

/// Команда верхнего уровня.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Разобрать одну колоду.
    ParseDeck(ParseDeckCommand),

    /// Собрать набор: колода игрока + колоды соперников.
    BuildLineup(LineupCommand),
}

/// Разобрать текст одной колоды.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParseDeckCommand {
    /// Вставленный пользователем текст.
    pub text: String,
    /// Строгий режим: плохая строка — ошибка.
    #[serde(default)]
    pub strict: bool,
    /// Ожидаемый размер. `None` — берём `deck_size` из правил.
    #[serde(default)]
    pub expected_size: Option<usize>,
    /// Лимит копий в строке. `None` — `MAX_LINE_QUANTITY`.
    #[serde(default)]
    pub max_copies_per_line: Option<u32>,
}

/// Собрать набор колод из полей ввода.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LineupCommand {
    pub player: String,
    /// Поля соперников по порядку, пустые допустимы.
    pub opponents: Vec<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub expected_size: Option<usize>,
    #[serde(default)]
    pub max_copies_per_line: Option<u32>,
}

/// Выполнить команду.
pub fn handle_command(cmd: Command, rules: Option<&Rules>) -> Result<CommandResponse, ApiError> {
    match cmd {
        Command::ParseDeck(c) => handle_parse(c, rules).map(CommandResponse::Deck),
        Command::BuildLineup(c) => handle_lineup(c, rules).map(CommandResponse::Lineup),
    }
}

pub fn handle_parse(cmd: ParseDeckCommand, rules: Option<&Rules>) -> Result<DeckDto, ApiError> {
    if cmd.text.trim().is_empty() {
        return Err(ApiError::BadRequest("Deck text is empty".into()));
    }

    let parser = parser_for(cmd.strict, cmd.max_copies_per_line);
    let report = parser.parse_with_report(&cmd.text, rules);
    if cmd.strict {
        if let Some(err) = report.first_error() {
            return Err(err.into());
        }
    }

    Ok(build_deck_dto(&report, expected_size(cmd.expected_size, rules)))
}

pub fn handle_lineup(cmd: LineupCommand, rules: Option<&Rules>) -> Result<LineupDto, ApiError> {
    let parser = parser_for(cmd.strict, cmd.max_copies_per_line);
    let lineup = Lineup::from_texts(&cmd.player, &cmd.opponents, &parser, rules)?;

    Ok(lineup_to_dto(&lineup, expected_size(cmd.expected_size, rules)))
}

fn parser_for(strict: bool, max_copies_per_line: Option<u32>) -> DeckListParser {
    DeckListParser::new(ParserConfig {
        strict,
        max_copies_per_line,
    })
}

/// Явный размер из команды > размер из правил > размер по умолчанию.
fn expected_size(explicit: Option<usize>, rules: Option<&Rules>) -> usize {
    explicit
        .or_else(|| rules.map(|r| r.deck_size))
        .unwrap_or(DEFAULT_DECK_SIZE)
}
