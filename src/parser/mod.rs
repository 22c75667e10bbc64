//! Парсер дек-листов: текст из поля ввода -> нормализованная колода.
//!
//! Высокоуровневый объект: `DeckListParser`
//! Основные операции:
//!   - `parse` – мягкий разбор, никогда не падает
//!   - `parse_with_report` – то же плюс построчный отчёт
//!   - `parse_strict` – строгий режим, плохая строка = ошибка
//!   - `validate` / `check_size` – проверка точного размера колоды

pub mod deck_list;
pub mod errors;
pub mod notation;
pub mod validation;

pub use deck_list::{
    DeckListParser, DropReason, LineOutcome, ParseReport, ParserConfig, MAX_LINE_QUANTITY,
};
pub use errors::{DeckError, ParseError};
pub use notation::{Notation, Resolved};
pub use validation::{check_size, validate};

use crate::domain::deck::Deck;
use crate::domain::rules::Rules;

/// Разбор с настройками по умолчанию (мягкий режим, лимит `MAX_LINE_QUANTITY`).
pub fn parse(text: &str, rules: Option<&Rules>) -> Deck {
    DeckListParser::default().parse(text, rules)
}
