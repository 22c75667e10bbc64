use serde::{Deserialize, Serialize};

/// Маркер количества "x", регистр не важен.
const X_MARKER: &[char] = &['x', 'X'];

/// Нотация количества в строке дек-листа.
///
/// Порядок в `PRIORITY` важен: на строку, подходящую под несколько нотаций,
/// побеждает первая из списка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Notation {
    /// "4 Unit-Gundam"
    QuantityPrefix,
    /// "Unit-Zaku x4" / "Unit-Zaku X4"
    XSuffix,
    /// "4x Unit-Gundam" / "4X Unit-Gundam"
    XPrefix,
    /// "Unit-Tallgeese (2)"
    Parenthesized,
    /// "Unit-Nu" — количество 1.
    Bare,
}

/// Результат разбора одной строки: нотация, имя (уже без маркеров) и количество.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub notation: Notation,
    pub name: &'a str,
    pub quantity: u32,
}

impl Notation {
    pub const PRIORITY: [Notation; 5] = [
        Notation::QuantityPrefix,
        Notation::XSuffix,
        Notation::XPrefix,
        Notation::Parenthesized,
        Notation::Bare,
    ];

    /// Разобрать строку по нотациям в порядке приоритета.
    ///
    /// `None` — строка не подходит ни под одну нотацию и не похожа на имя карты
    /// (например, "4x" без имени или "---").
    pub fn resolve(line: &str) -> Option<Resolved<'_>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        Notation::PRIORITY
            .iter()
            .find_map(|notation| notation.try_match(line))
    }

    /// Попробовать разобрать строку ровно этой нотацией.
    pub fn try_match(self, line: &str) -> Option<Resolved<'_>> {
        let line = line.trim();
        let (name, quantity) = match self {
            Notation::QuantityPrefix => {
                let (token, rest) = line.split_once(char::is_whitespace)?;
                (rest, parse_quantity(token)?)
            }
            Notation::XSuffix => {
                let (rest, token) = line.rsplit_once(char::is_whitespace)?;
                let digits = token.strip_prefix(X_MARKER)?;
                (rest, parse_quantity(digits)?)
            }
            Notation::XPrefix => {
                let (token, rest) = line.split_once(char::is_whitespace)?;
                let digits = token.strip_suffix(X_MARKER)?;
                (rest, parse_quantity(digits)?)
            }
            Notation::Parenthesized => {
                let inner_end = line.strip_suffix(')')?;
                let open = inner_end.rfind('(')?;
                let quantity = parse_quantity(inner_end[open + 1..].trim())?;
                (&line[..open], quantity)
            }
            Notation::Bare => {
                if !is_plausible_name(line) {
                    return None;
                }
                (line, 1)
            }
        };

        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        Some(Resolved {
            notation: self,
            name,
            quantity,
        })
    }
}

/// Количество: только ASCII-цифры, без знака, в пределах u32.
fn parse_quantity(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Похожа ли строка на имя карты без количества.
///
/// Нужна хотя бы одна буква/цифра, и строка не должна быть одиноким маркером
/// количества: "4", "4x", "x4", "(4)".
fn is_plausible_name(line: &str) -> bool {
    if !line.chars().any(char::is_alphanumeric) {
        return false;
    }

    let lone_marker = parse_quantity(line).is_some()
        || line
            .strip_prefix(X_MARKER)
            .and_then(parse_quantity)
            .is_some()
        || line
            .strip_suffix(X_MARKER)
            .and_then(parse_quantity)
            .is_some()
        || line
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .and_then(|s| parse_quantity(s.trim()))
            .is_some();

    !lone_marker
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(line: &str) -> Option<(Notation, &str, u32)> {
        Notation::resolve(line).map(|r| (r.notation, r.name, r.quantity))
    }

    #[test]
    fn each_notation_is_recognized() {
        assert_eq!(
            resolve("4 Unit-Gundam"),
            Some((Notation::QuantityPrefix, "Unit-Gundam", 4))
        );
        assert_eq!(
            resolve("Unit-Zaku x4"),
            Some((Notation::XSuffix, "Unit-Zaku", 4))
        );
        assert_eq!(
            resolve("4x Unit-Gundam"),
            Some((Notation::XPrefix, "Unit-Gundam", 4))
        );
        assert_eq!(
            resolve("Unit-Tallgeese (2)"),
            Some((Notation::Parenthesized, "Unit-Tallgeese", 2))
        );
        assert_eq!(resolve("Unit-Nu"), Some((Notation::Bare, "Unit-Nu", 1)));
    }

    #[test]
    fn x_marker_is_case_insensitive() {
        assert_eq!(
            resolve("Unit-Zaku X3"),
            Some((Notation::XSuffix, "Unit-Zaku", 3))
        );
        assert_eq!(
            resolve("3X Unit-Zaku"),
            Some((Notation::XPrefix, "Unit-Zaku", 3))
        );
    }

    #[test]
    fn whitespace_around_markers_is_stripped() {
        assert_eq!(
            resolve("  Unit-Tallgeese   ( 2 )  "),
            Some((Notation::Parenthesized, "Unit-Tallgeese", 2))
        );
        assert_eq!(
            resolve("2   Unit-Gundam  "),
            Some((Notation::QuantityPrefix, "Unit-Gundam", 2))
        );
    }

    #[test]
    fn priority_decides_between_several_notations() {
        // префикс количества раньше суффикса x
        assert_eq!(
            resolve("4 Unit x2"),
            Some((Notation::QuantityPrefix, "Unit x2", 4))
        );
        // суффикс x раньше скобок
        assert_eq!(
            resolve("Unit (2) x3"),
            Some((Notation::XSuffix, "Unit (2)", 3))
        );
        // из нескольких скобок берём последнюю
        assert_eq!(
            resolve("Unit (1) (2)"),
            Some((Notation::Parenthesized, "Unit (1)", 2))
        );
    }

    #[test]
    fn chained_x_markers_fall_back_to_bare_name() {
        assert_eq!(
            resolve("Unit-Gundam x4x2"),
            Some((Notation::Bare, "Unit-Gundam x4x2", 1))
        );
    }

    #[test]
    fn lone_markers_and_noise_are_rejected() {
        for line in ["4", "4x", "x4", "X4", "(4)", "---", "   ", "", "4 ", "( 3 )"] {
            assert_eq!(resolve(line), None, "line {line:?} must be rejected");
        }
    }

    #[test]
    fn overflowing_quantity_does_not_match_a_notation() {
        assert_eq!(
            resolve("99999999999 Unit-Gundam"),
            Some((Notation::Bare, "99999999999 Unit-Gundam", 1))
        );
    }

    #[test]
    fn signed_quantity_is_not_a_quantity() {
        assert_eq!(
            resolve("-2 Unit-Gundam"),
            Some((Notation::Bare, "-2 Unit-Gundam", 1))
        );
    }
}
