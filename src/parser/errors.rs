use thiserror::Error;

/// Ошибки строгого режима парсера.
///
/// В обычном режиме `parse` не возвращает ошибок: плохие строки просто пропускаются.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Строка {line}: не удалось разобрать {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("Строка {line}: количество {quantity} больше допустимого {max}")]
    QuantityTooLarge { line: usize, quantity: u32, max: u32 },

    #[error("Line {line}: not enough memory for {quantity} copies")]
    AllocationFailed { line: usize, quantity: u32 },
}

/// Ошибки проверки колоды.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck size mismatch: expected {expected}, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
