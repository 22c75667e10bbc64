use serde::{Deserialize, Serialize};

use crate::domain::rules::RulesError;
use crate::lineup::LineupError;
use crate::parser::{DeckError, ParseError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (пустой текст, битый JSON правил).
    BadRequest(String),

    /// Колода не прошла разбор в строгом режиме или проверку размера.
    InvalidDeck(String),

    /// Внутренняя ошибка (например, не хватило памяти под колоду).
    Internal(String),
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::AllocationFailed { .. } => ApiError::Internal(err.to_string()),
            _ => ApiError::InvalidDeck(err.to_string()),
        }
    }
}

impl From<DeckError> for ApiError {
    fn from(err: DeckError) -> Self {
        ApiError::InvalidDeck(err.to_string())
    }
}

impl From<RulesError> for ApiError {
    fn from(err: RulesError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<LineupError> for ApiError {
    fn from(err: LineupError) -> Self {
        match err {
            LineupError::Parse {
                source: ParseError::AllocationFailed { .. },
                ..
            } => ApiError::Internal(err.to_string()),
            LineupError::Parse { .. } => ApiError::InvalidDeck(err.to_string()),
            _ => ApiError::BadRequest(err.to_string()),
        }
    }
}
