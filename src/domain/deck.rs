use std::collections::{BTreeMap, HashMap, TryReserveError};

use serde::{Deserialize, Serialize};

use crate::domain::card::CardName;
use crate::infra::rng::RandomSource;

/// Колода карт. В домене — просто упорядоченный список имён с повторами
/// (плоское представление). Представление "имя -> количество" строится из него.
///
/// После парсинга колода не меняется; мутации (`swap_card`, `remove_one`, ...)
/// нужны только вызывающему коду для пробных прогонов.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<CardName>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Колода из плоского списка карт, порядок сохраняется.
    pub fn from_cards(cards: impl IntoIterator<Item = CardName>) -> Self {
        Deck {
            cards: cards.into_iter().collect(),
        }
    }

    /// Колода из представления "имя -> количество".
    /// Карты раскладываются подряд в порядке итератора; нулевые количества пропускаются.
    pub fn from_counts(
        counts: impl IntoIterator<Item = (CardName, u32)>,
    ) -> Result<Self, TryReserveError> {
        let mut deck = Deck::new();
        for (name, count) in counts {
            deck.push_n(name, count)?;
        }
        Ok(deck)
    }

    /// Общее число карт (сумма всех количеств).
    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Сколько разных имён в колоде.
    pub fn unique_len(&self) -> usize {
        self.counts().len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardName> {
        self.cards.iter()
    }

    /// Сколько копий карты `name` в колоде.
    pub fn count_of(&self, name: &str) -> u32 {
        let n = self.cards.iter().filter(|c| c.as_str() == name).count();
        u32::try_from(n).unwrap_or(u32::MAX)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.as_str() == name)
    }

    /// Представление "имя -> количество" в порядке первого появления карты.
    pub fn counts(&self) -> Vec<(CardName, u32)> {
        let mut order: Vec<(CardName, u32)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for card in &self.cards {
            match index.get(card.as_str()) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(card.as_str(), order.len());
                    order.push((card.clone(), 1));
                }
            }
        }

        order
    }

    /// То же представление, но отсортированное по имени.
    pub fn count_map(&self) -> BTreeMap<CardName, u32> {
        let mut map = BTreeMap::new();
        for card in &self.cards {
            *map.entry(card.clone()).or_insert(0) += 1;
        }
        map
    }

    /// Совпадают ли колоды как мультимножества (порядок не важен).
    pub fn same_cards(&self, other: &Deck) -> bool {
        self.count_map() == other.count_map()
    }

    /// Добавить одну карту в конец.
    pub fn push(&mut self, name: CardName) {
        self.cards.push(name);
    }

    /// Добавить `n` копий карты в конец.
    /// Память резервируется заранее; если её не хватило, колода не меняется.
    pub fn push_n(&mut self, name: CardName, n: u32) -> Result<(), TryReserveError> {
        let n = n as usize;
        self.cards.try_reserve(n)?;
        self.cards.extend(std::iter::repeat(name).take(n));
        Ok(())
    }

    /// Убрать одну (первую встреченную) копию карты.
    /// Возвращает `false`, если такой карты нет.
    pub fn remove_one(&mut self, name: &str) -> bool {
        match self.cards.iter().position(|c| c.as_str() == name) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Убрать все копии карты, вернуть сколько убрали.
    pub fn remove_all(&mut self, name: &str) -> u32 {
        let before = self.cards.len();
        self.cards.retain(|c| c.as_str() != name);
        u32::try_from(before - self.cards.len()).unwrap_or(u32::MAX)
    }

    /// Пробная замена: одна копия `out` уходит, одна копия `incoming` добавляется в конец.
    /// Если `out` в колоде нет — колода не меняется.
    pub fn swap_card(&mut self, out: &str, incoming: CardName) -> bool {
        if !self.remove_one(out) {
            return false;
        }
        self.cards.push(incoming);
        true
    }

    /// Перемешать колоду переданным RNG.
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        rng.shuffle(&mut self.cards);
    }

    /// Случайная "рука" из `n` карт без возвращения (или вся колода, если она меньше).
    /// Сама колода не меняется.
    pub fn sample_hand(&self, n: usize, rng: &mut impl RandomSource) -> Vec<CardName> {
        let mut pool = self.cards.clone();
        rng.shuffle(&mut pool);
        pool.truncate(n);
        pool
    }

    /// Текстовое представление в нотации "<qty> <name>".
    ///
    /// Одна строка на серию одинаковых карт подряд, поэтому повторный парсинг
    /// даёт ровно ту же последовательность.
    pub fn to_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let mut iter = self.cards.iter().peekable();

        while let Some(card) = iter.next() {
            let mut run = 1u32;
            while iter.peek().map_or(false, |next| *next == card) {
                iter.next();
                run += 1;
            }
            lines.push(format!("{run} {card}"));
        }

        lines.join("\n")
    }
}

impl FromIterator<CardName> for Deck {
    fn from_iter<I: IntoIterator<Item = CardName>>(iter: I) -> Self {
        Deck::from_cards(iter)
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CardName;
    type IntoIter = std::slice::Iter<'a, CardName>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
