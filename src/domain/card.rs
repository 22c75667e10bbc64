use core::fmt;
use std::borrow::Borrow;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Имя карты в нормализованном виде.
///
/// Нормализация минимальная: обрезаем пробелы по краям, регистр оставляем
/// как ввёл пользователь ("Unit-Zaku" и "unit-zaku" — разные карты).
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CardName(String);

impl CardName {
    /// Создать имя карты, обрезав пробелы по краям.
    ///
    /// Пустое имя здесь не проверяется — для этого есть `CardName::parse`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        CardName(raw.as_ref().trim().to_string())
    }

    /// Имя карты из произвольной строки. `None`, если после trim ничего не осталось.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(CardName(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CardName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Нужно, чтобы искать в `BTreeSet<CardName>` / `BTreeMap<CardName, _>` по `&str`.
impl Borrow<str> for CardName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardName {
    fn from(s: &str) -> Self {
        CardName::new(s)
    }
}

impl From<String> for CardName {
    fn from(s: String) -> Self {
        CardName::new(s)
    }
}

/// При десериализации (например, списки банов из JSON) тоже нормализуем.
impl<'de> Deserialize<'de> for CardName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CardName::new(raw))
    }
}

/// Парсинг имени карты: "  Unit-Gundam " -> "Unit-Gundam".
impl FromStr for CardName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardName::parse(s).ok_or_else(|| "Card name must not be empty".to_string())
    }
}
