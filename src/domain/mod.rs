//! Доменная модель: имена карт, колоды, правила формата.

pub mod card;
pub mod deck;
pub mod rules;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Deck и т.п.
pub use card::*;
pub use deck::*;
pub use rules::*;
