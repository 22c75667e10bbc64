use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::CardName;
use crate::domain::deck::Deck;

/// Размер колоды для матча один на один.
pub const DEFAULT_DECK_SIZE: usize = 50;

/// Правила формата: список банов и ожидаемый размер колоды.
///
/// Загружает их внешний код (файл, UI, сервис). Парсер правила только читает.
/// Формат JSON совместим со старым `rules.json`:
///
/// ```json
/// { "banned_cards": ["Unit-Zaku"], "deck_size": 50 }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rules {
    #[serde(default)]
    pub banned_cards: BTreeSet<CardName>,

    #[serde(default = "default_deck_size")]
    pub deck_size: usize,
}

fn default_deck_size() -> usize {
    DEFAULT_DECK_SIZE
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            banned_cards: BTreeSet::new(),
            deck_size: DEFAULT_DECK_SIZE,
        }
    }
}

impl Rules {
    /// Правила только со списком банов, размер колоды по умолчанию.
    pub fn with_banned<I, S>(banned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CardName>,
    {
        Self {
            banned_cards: banned.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Разобрать уже прочитанный JSON-документ с правилами.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: Rules = serde_json::from_str(json)?;
        if rules.deck_size == 0 {
            return Err(RulesError::InvalidConfig("Rules: deck_size = 0".into()));
        }
        Ok(rules)
    }

    /// Забанена ли карта. Сравнение точное, после trim.
    pub fn is_banned(&self, name: &str) -> bool {
        self.banned_cards.contains(name.trim())
    }

    /// Проверка размера колоды по `deck_size` из правил.
    pub fn validate(&self, deck: &Deck) -> bool {
        deck.total() == self.deck_size
    }
}

/// Ошибки загрузки правил.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Не удалось разобрать правила: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Некорректные правила: {0}")]
    InvalidConfig(String),
}
