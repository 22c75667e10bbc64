use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::lineup::{Lineup, NamedDeck};
use crate::parser::{validate, LineOutcome, ParseReport};

/// Одна строка представления "имя -> количество".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardCountDto {
    pub name: String,
    pub count: u32,
}

/// Строка ввода, которая не попала в колоду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DroppedLineDto {
    pub line: usize,
    pub text: String,
}

/// DTO колоды: оба представления плюс результат проверки размера.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckDto {
    /// Плоский список с повторами, в порядке строк ввода.
    pub cards: Vec<String>,
    /// Количества в порядке первого появления карты.
    pub counts: Vec<CardCountDto>,
    pub total: usize,
    pub expected_size: usize,
    pub is_valid: bool,
    /// Выкинутые строки — фронт показывает их пользователю.
    pub dropped_lines: Vec<DroppedLineDto>,
    /// Забаненные карты, встреченные во вводе.
    pub banned_cards: Vec<String>,
}

/// DTO колоды с именем ("Player 1", "Opponent 2").
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedDeckDto {
    pub name: String,
    pub deck: DeckDto,
}

/// DTO набора колод для серии матчей.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineupDto {
    pub player: NamedDeckDto,
    pub opponents: Vec<NamedDeckDto>,
    /// Имена колод с неправильным размером.
    pub invalid_decks: Vec<String>,
}

/// Ответ API на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    Deck(DeckDto),
    Lineup(LineupDto),
}

/// Собрать DTO из отчёта парсера.
pub fn build_deck_dto(report: &ParseReport, expected_size: usize) -> DeckDto {
    deck_with_outcomes_to_dto(&report.deck, &report.outcomes, expected_size)
}

/// DTO колоды плюс выкинутые строки и забаненные карты из её отчёта.
fn deck_with_outcomes_to_dto(
    deck: &Deck,
    outcomes: &[LineOutcome],
    expected_size: usize,
) -> DeckDto {
    let mut dto = deck_to_dto(deck, expected_size);

    for outcome in outcomes {
        match outcome {
            LineOutcome::Dropped { line, text, .. } => dto.dropped_lines.push(DroppedLineDto {
                line: *line,
                text: text.clone(),
            }),
            LineOutcome::Banned { name, .. } => {
                if !dto.banned_cards.iter().any(|b| b == name.as_str()) {
                    dto.banned_cards.push(name.to_string());
                }
            }
            LineOutcome::Accepted { .. } => {}
        }
    }

    dto
}

/// DTO только по колоде (без отчёта о строках).
pub fn deck_to_dto(deck: &Deck, expected_size: usize) -> DeckDto {
    DeckDto {
        cards: deck.iter().map(|c| c.to_string()).collect(),
        counts: deck
            .counts()
            .into_iter()
            .map(|(name, count)| CardCountDto {
                name: name.into_string(),
                count,
            })
            .collect(),
        total: deck.total(),
        expected_size,
        is_valid: validate(deck, expected_size),
        dropped_lines: Vec::new(),
        banned_cards: Vec::new(),
    }
}

fn named_to_dto(named: &NamedDeck, expected_size: usize) -> NamedDeckDto {
    NamedDeckDto {
        name: named.name.clone(),
        deck: deck_with_outcomes_to_dto(&named.deck, &named.outcomes, expected_size),
    }
}

pub fn lineup_to_dto(lineup: &Lineup, expected_size: usize) -> LineupDto {
    LineupDto {
        player: named_to_dto(&lineup.player, expected_size),
        opponents: lineup
            .opponents
            .iter()
            .map(|d| named_to_dto(d, expected_size))
            .collect(),
        invalid_decks: lineup
            .invalid_decks(expected_size)
            .into_iter()
            .map(|d| d.name.clone())
            .collect(),
    }
}
