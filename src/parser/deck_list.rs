use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::card::CardName;
use crate::domain::deck::Deck;
use crate::domain::rules::Rules;
use crate::parser::errors::ParseError;
use crate::parser::notation::Notation;

/// Потолок копий в одной строке. Строки с большим количеством выкидываются,
/// даже если в конфиге задан лимит выше.
pub const MAX_LINE_QUANTITY: u32 = 1_000;

/// Настройки парсера дек-листа.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ParserConfig {
    /// Строгий режим для `parse_checked`: плохая строка — ошибка, а не пропуск.
    pub strict: bool,

    /// Максимум копий карты в одной строке. `None` — `MAX_LINE_QUANTITY`.
    pub max_copies_per_line: Option<u32>,
}

impl ParserConfig {
    /// Действующий лимит копий в строке.
    pub fn line_limit(&self) -> u32 {
        self.max_copies_per_line
            .map_or(MAX_LINE_QUANTITY, |max| max.min(MAX_LINE_QUANTITY))
    }
}

/// Почему строка выкинута.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DropReason {
    /// Не подошла ни одна нотация и строка не похожа на имя карты.
    Unparseable,
    /// Количество больше лимита копий в строке.
    QuantityOverLimit { quantity: u32, max: u32 },
    /// Не удалось выделить память под копии карты.
    AllocationFailed { quantity: u32 },
}

/// Что случилось с одной непустой строкой ввода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineOutcome {
    /// Строка разобрана, карты попали в колоду (при quantity = 0 — ноль карт).
    Accepted {
        line: usize,
        name: CardName,
        quantity: u32,
        notation: Notation,
    },

    /// Карта забанена правилами, строка дала ноль карт.
    Banned {
        line: usize,
        name: CardName,
        quantity: u32,
    },

    /// Строка пропущена.
    Dropped {
        line: usize,
        text: String,
        reason: DropReason,
    },
}

impl LineOutcome {
    pub fn line(&self) -> usize {
        match self {
            LineOutcome::Accepted { line, .. }
            | LineOutcome::Banned { line, .. }
            | LineOutcome::Dropped { line, .. } => *line,
        }
    }

    /// Ошибка строгого режима для выкинутой строки.
    pub fn to_error(&self) -> Option<ParseError> {
        match self {
            LineOutcome::Dropped {
                line,
                text,
                reason: DropReason::Unparseable,
            } => Some(ParseError::MalformedLine {
                line: *line,
                text: text.clone(),
            }),
            LineOutcome::Dropped {
                line,
                reason: DropReason::QuantityOverLimit { quantity, max },
                ..
            } => Some(ParseError::QuantityTooLarge {
                line: *line,
                quantity: *quantity,
                max: *max,
            }),
            LineOutcome::Dropped {
                line,
                reason: DropReason::AllocationFailed { quantity },
                ..
            } => Some(ParseError::AllocationFailed {
                line: *line,
                quantity: *quantity,
            }),
            _ => None,
        }
    }
}

/// Колода плюс построчный отчёт о разборе.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseReport {
    pub deck: Deck,
    pub outcomes: Vec<LineOutcome>,
}

impl ParseReport {
    pub fn dropped(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Dropped { .. }))
    }

    pub fn banned(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, LineOutcome::Banned { .. }))
    }

    pub fn has_dropped_lines(&self) -> bool {
        self.dropped().next().is_some()
    }

    /// Первая ошибка строгого режима, если она есть.
    pub fn first_error(&self) -> Option<ParseError> {
        self.outcomes.iter().find_map(LineOutcome::to_error)
    }

    /// Строгий результат: колода, если ни одна строка не выкинута.
    pub fn into_strict(self) -> Result<Deck, ParseError> {
        match self.first_error() {
            Some(err) => Err(err),
            None => Ok(self.deck),
        }
    }
}

/// Парсер вставленного текста дек-листа.
///
/// Одна строка — одна запись. Поддерживаемые нотации (в порядке приоритета):
///   1. `4 Unit-Gundam`
///   2. `Unit-Zaku x4`
///   3. `4x Unit-Gundam`
///   4. `Unit-Tallgeese (2)`
///   5. `Unit-Nu` — одна копия.
///
/// Пустые строки пропускаются. Карты из `rules.banned_cards` в колоду не попадают.
/// Парсер не хранит состояния между вызовами, его можно делить между потоками.
#[derive(Clone, Debug, Default)]
pub struct DeckListParser {
    config: ParserConfig,
}

impl DeckListParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Мягкий разбор: никогда не падает, плохие строки молча отбрасываются.
    /// Строки с количеством выше `ParserConfig::line_limit` тоже отбрасываются.
    pub fn parse(&self, text: &str, rules: Option<&Rules>) -> Deck {
        self.parse_with_report(text, rules).deck
    }

    /// Разбор с построчным отчётом (что принято, что забанено, что выкинуто).
    /// Номера строк считаются с 1, пустые строки тоже занимают номер.
    pub fn parse_with_report(&self, text: &str, rules: Option<&Rules>) -> ParseReport {
        let mut report = ParseReport::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let outcome = match self.parse_line(raw) {
                Ok((name, quantity, notation)) => {
                    if rules.map_or(false, |r| r.is_banned(name.as_str())) {
                        debug!(line, card = %name, quantity, "banned card skipped");
                        LineOutcome::Banned {
                            line,
                            name,
                            quantity,
                        }
                    } else if let Err(err) = report.deck.push_n(name.clone(), quantity) {
                        warn!(line, card = %name, quantity, %err, "no memory for card copies");
                        LineOutcome::Dropped {
                            line,
                            text: raw.to_string(),
                            reason: DropReason::AllocationFailed { quantity },
                        }
                    } else {
                        LineOutcome::Accepted {
                            line,
                            name,
                            quantity,
                            notation,
                        }
                    }
                }
                Err(reason) => {
                    debug!(line, text = raw, ?reason, "line dropped");
                    LineOutcome::Dropped {
                        line,
                        text: raw.to_string(),
                        reason,
                    }
                }
            };

            report.outcomes.push(outcome);
        }

        info!(
            cards = report.deck.total(),
            unique = report.deck.unique_len(),
            dropped = report.dropped().count(),
            banned = report.banned().count(),
            "deck list parsed"
        );

        report
    }

    /// Строгий разбор: первая строка, которую мягкий режим выкинул бы, — ошибка.
    /// Забаненные карты ошибкой не считаются.
    pub fn parse_strict(&self, text: &str, rules: Option<&Rules>) -> Result<Deck, ParseError> {
        self.parse_with_report(text, rules).into_strict()
    }

    /// Разбор в режиме из конфига: `strict` — `parse_strict`, иначе мягкий `parse`.
    pub fn parse_checked(&self, text: &str, rules: Option<&Rules>) -> Result<Deck, ParseError> {
        if self.config.strict {
            self.parse_strict(text, rules)
        } else {
            Ok(self.parse(text, rules))
        }
    }

    fn parse_line(&self, raw: &str) -> Result<(CardName, u32, Notation), DropReason> {
        let resolved = Notation::resolve(raw).ok_or(DropReason::Unparseable)?;

        let max = self.config.line_limit();
        if resolved.quantity > max {
            return Err(DropReason::QuantityOverLimit {
                quantity: resolved.quantity,
                max,
            });
        }

        Ok((
            CardName::new(resolved.name),
            resolved.quantity,
            resolved.notation,
        ))
    }
}
