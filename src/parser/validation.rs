use crate::domain::deck::Deck;
use crate::parser::errors::DeckError;

/// Проверка размера колоды: сумма всех количеств ровно `expected_size`.
///
/// Баны здесь повторно не проверяются — их уже выкинул `parse`.
pub fn validate(deck: &Deck, expected_size: usize) -> bool {
    deck.total() == expected_size
}

/// То же, что `validate`, но с причиной отказа для вывода пользователю.
pub fn check_size(deck: &Deck, expected_size: usize) -> Result<(), DeckError> {
    let actual = deck.total();
    if actual == expected_size {
        Ok(())
    } else {
        Err(DeckError::SizeMismatch {
            expected: expected_size,
            actual,
        })
    }
}
