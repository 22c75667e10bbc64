// src/lineup.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::deck::Deck;
use crate::domain::rules::Rules;
use crate::parser::{validate, DeckListParser, LineOutcome, ParseError, ParseReport};

/// Сколько полей для колод соперников даёт интерфейс.
pub const MAX_OPPONENTS: usize = 10;

pub const PLAYER_DECK_NAME: &str = "Player 1";

/// Колода с отображаемым именем ("Player 1", "Opponent 3")
/// и построчным отчётом её разбора.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedDeck {
    pub name: String,
    pub deck: Deck,
    #[serde(default)]
    pub outcomes: Vec<LineOutcome>,
}

impl NamedDeck {
    /// Выкинутые строки этой колоды.
    pub fn dropped(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Dropped { .. }))
    }

    /// Строки с забаненными картами.
    pub fn banned(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Banned { .. }))
    }
}

/// Набор колод для серии матчей:
/// - колода игрока;
/// - очередь соперников из непустых полей ввода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lineup {
    pub player: NamedDeck,
    pub opponents: Vec<NamedDeck>,
}

impl Lineup {
    /// Собрать набор из текста полей ввода.
    ///
    /// Пустые поля соперников пропускаются, но номер поля в имени сохраняется:
    /// если заполнены поля 1 и 3, соперники будут "Opponent 1" и "Opponent 3".
    pub fn from_texts<S: AsRef<str>>(
        player_text: &str,
        opponent_texts: &[S],
        parser: &DeckListParser,
        rules: Option<&Rules>,
    ) -> Result<Self, LineupError> {
        if opponent_texts.len() > MAX_OPPONENTS {
            return Err(LineupError::TooManyOpponents {
                given: opponent_texts.len(),
                max: MAX_OPPONENTS,
            });
        }

        let player_deck = parse_named(parser, PLAYER_DECK_NAME, player_text, rules)?;
        if player_deck.deck.is_empty() {
            return Err(LineupError::MissingPlayerDeck);
        }

        let mut opponents = Vec::new();
        for (idx, text) in opponent_texts.iter().enumerate() {
            let text = text.as_ref();
            if text.trim().is_empty() {
                continue;
            }
            let name = format!("Opponent {}", idx + 1);
            opponents.push(parse_named(parser, &name, text, rules)?);
        }

        if opponents.is_empty() {
            return Err(LineupError::NoOpponents);
        }

        info!(
            player_cards = player_deck.deck.total(),
            opponents = opponents.len(),
            "lineup assembled"
        );

        Ok(Self {
            player: player_deck,
            opponents,
        })
    }

    /// Игрок и все соперники по порядку.
    pub fn all(&self) -> impl Iterator<Item = &NamedDeck> {
        std::iter::once(&self.player).chain(self.opponents.iter())
    }

    /// Найти соперника по имени.
    pub fn opponent(&self, name: &str) -> Option<&NamedDeck> {
        self.opponents.iter().find(|d| d.name == name)
    }

    /// Колоды, у которых размер не совпадает с `expected_size`.
    pub fn invalid_decks(&self, expected_size: usize) -> Vec<&NamedDeck> {
        self.all()
            .filter(|d| !validate(&d.deck, expected_size))
            .collect()
    }
}

fn parse_named(
    parser: &DeckListParser,
    name: &str,
    text: &str,
    rules: Option<&Rules>,
) -> Result<NamedDeck, LineupError> {
    let ParseReport { deck, outcomes } = parser.parse_with_report(text, rules);

    if parser.config().strict {
        if let Some(source) = outcomes.iter().find_map(LineOutcome::to_error) {
            return Err(LineupError::Parse {
                deck: name.to_string(),
                source,
            });
        }
    }

    Ok(NamedDeck {
        name: name.to_string(),
        deck,
        outcomes,
    })
}

/// Ошибки сборки набора колод.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineupError {
    #[error("Колода игрока пуста")]
    MissingPlayerDeck,

    #[error("Нет ни одной колоды соперника")]
    NoOpponents,

    #[error("Too many opponent decks: {given}, max {max}")]
    TooManyOpponents { given: usize, max: usize },

    #[error("{deck}: {source}")]
    Parse { deck: String, source: ParseError },
}
