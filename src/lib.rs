//! Разбор и нормализация дек-листов для симулятора матчей карточной игры.
//!
//! Текст, вставленный пользователем, превращается в колоду (`domain::Deck`):
//! поддерживается несколько нотаций количества, забаненные карты выкидываются,
//! плохие строки молча пропускаются. Вокруг парсера — тонкие слои:
//! правила формата, сборка набора колод соперников, DTO для фронта.

pub mod api;
pub mod domain;
pub mod infra;
pub mod lineup;
pub mod parser;

pub use domain::{CardName, Deck, Rules, DEFAULT_DECK_SIZE};
pub use parser::{parse, validate, DeckListParser, ParserConfig};
