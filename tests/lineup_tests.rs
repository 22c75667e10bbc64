//! Сборка набора колод: игрок + очередь соперников.

use tcg_deck_sim::domain::Rules;
use tcg_deck_sim::lineup::{Lineup, LineupError, MAX_OPPONENTS, PLAYER_DECK_NAME};
use tcg_deck_sim::parser::{DeckListParser, LineOutcome, ParseError, ParserConfig};

const PLAYER: &str = "Unit-Zaku x4\nUnit-Gundam x4\nUnit-Tallgeese x2";

#[test]
fn empty_opponent_boxes_are_skipped_but_keep_numbers() {
    let opponents = ["4 Unit-Nu", "", "   ", "Unit-Sazabi (3)"];
    let lineup = Lineup::from_texts(PLAYER, &opponents, &DeckListParser::default(), None).unwrap();

    assert_eq!(lineup.player.name, PLAYER_DECK_NAME);
    assert_eq!(lineup.player.deck.total(), 10);

    let names: Vec<&str> = lineup.opponents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Opponent 1", "Opponent 4"]);

    let opp4 = lineup.opponent("Opponent 4").unwrap();
    assert_eq!(opp4.deck.count_of("Unit-Sazabi"), 3);
    assert!(lineup.opponent("Opponent 2").is_none());

    assert_eq!(lineup.all().count(), 3);
}

#[test]
fn rules_apply_to_every_deck() {
    let rules = Rules::with_banned(["Unit-Zaku"]);
    let opponents = ["2 Unit-Zaku\n1 Unit-Nu"];
    let lineup =
        Lineup::from_texts(PLAYER, &opponents, &DeckListParser::default(), Some(&rules)).unwrap();

    assert_eq!(lineup.player.deck.count_of("Unit-Zaku"), 0);
    assert_eq!(lineup.opponents[0].deck.total(), 1);
}

#[test]
fn missing_player_deck_is_an_error() {
    let parser = DeckListParser::default();
    assert_eq!(
        Lineup::from_texts("  \n", &["1 Unit-Nu"], &parser, None),
        Err(LineupError::MissingPlayerDeck)
    );
    // текст есть, но все строки выкинуты
    assert_eq!(
        Lineup::from_texts("---", &["1 Unit-Nu"], &parser, None),
        Err(LineupError::MissingPlayerDeck)
    );
}

#[test]
fn at_least_one_opponent_is_required() {
    let parser = DeckListParser::default();
    let empty: [&str; 2] = ["", " "];
    assert_eq!(
        Lineup::from_texts(PLAYER, &empty, &parser, None),
        Err(LineupError::NoOpponents)
    );
}

#[test]
fn too_many_opponent_boxes() {
    let opponents: Vec<String> = (0..=MAX_OPPONENTS).map(|i| format!("{i} Unit-Nu")).collect();
    assert_eq!(
        Lineup::from_texts(PLAYER, &opponents, &DeckListParser::default(), None),
        Err(LineupError::TooManyOpponents {
            given: MAX_OPPONENTS + 1,
            max: MAX_OPPONENTS
        })
    );
}

#[test]
fn strict_parser_names_the_broken_deck() {
    let parser = DeckListParser::new(ParserConfig {
        strict: true,
        ..ParserConfig::default()
    });
    let opponents = ["1 Unit-Nu", "2 Unit-Zaku\n4x"];

    let err = Lineup::from_texts(PLAYER, &opponents, &parser, None).unwrap_err();
    assert_eq!(
        err,
        LineupError::Parse {
            deck: "Opponent 2".to_string(),
            source: ParseError::MalformedLine {
                line: 2,
                text: "4x".to_string()
            },
        }
    );
    assert!(err.to_string().starts_with("Opponent 2: "));
}

#[test]
fn invalid_decks_lists_wrong_sizes() {
    let opponents = ["10 Unit-Nu", "9 Unit-Nu"];
    let lineup = Lineup::from_texts(PLAYER, &opponents, &DeckListParser::default(), None).unwrap();

    let invalid: Vec<&str> = lineup
        .invalid_decks(10)
        .into_iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(invalid, vec!["Opponent 2"]);
}

#[test]
fn each_deck_keeps_dropped_and_banned_lines() {
    let rules = Rules::with_banned(["Unit-Zaku"]);
    let opponents = ["2 Unit-Zaku\n---\n3 Unit-Nu"];
    let lineup =
        Lineup::from_texts(PLAYER, &opponents, &DeckListParser::default(), Some(&rules)).unwrap();

    let opp = &lineup.opponents[0];
    assert_eq!(opp.deck.total(), 3);
    assert_eq!(opp.outcomes.len(), 3);

    let dropped: Vec<usize> = opp.dropped().map(LineOutcome::line).collect();
    assert_eq!(dropped, vec![2]);
    let banned: Vec<usize> = opp.banned().map(LineOutcome::line).collect();
    assert_eq!(banned, vec![1]);

    // у игрока Unit-Zaku x4 тоже забанен
    assert_eq!(lineup.player.banned().count(), 1);
    assert_eq!(lineup.player.dropped().count(), 0);
}
