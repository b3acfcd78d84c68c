use super::*;
use crate::book::{Book, BookField};
use crate::game::{Game, GameField};

fn book(title: &str, author: &str, pages: &str, rating: &str) -> Book {
    Book {
        title: title.to_string(),
        author: author.to_string(),
        pages: pages.to_string(),
        rating: rating.to_string(),
        ..Default::default()
    }
}

fn shelf() -> Vec<Book> {
    vec![
        book("Dune", "Frank Herbert", "412", "5"),
        book("dune messiah", "Frank Herbert", "256", "3"),
        book("Solaris", "Stanisław Lem", "204", "4"),
        book("The Left Hand of Darkness", "Ursula K. Le Guin", "", "x"),
    ]
}

#[test]
fn blank_state_is_identity() {
    let items = shelf();
    let state = FilterState::<BookField>::new();
    assert_eq!(filter_items(&items, &state), items);
}

#[test]
fn setting_blank_value_clears_constraint() {
    let mut state = FilterState::new().with(BookField::Title, "dune");
    assert!(!state.is_blank());
    state.set(BookField::Title, "   ");
    assert!(state.is_blank());
    assert_eq!(state.get(BookField::Title), "");
}

#[test]
fn text_filter_is_case_insensitive_substring() {
    let items = shelf();
    let state = FilterState::new().with(BookField::Title, "DUNE");
    let kept = filter_items(&items, &state);
    let titles: Vec<&str> = kept.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "dune messiah"]);

    for b in &items {
        let contains = b.title.to_lowercase().contains("dune");
        assert_eq!(kept.contains(b), contains, "{}", b.title);
    }
}

#[test]
fn text_filter_handles_non_ascii() {
    let items = shelf();
    let state = FilterState::new().with(BookField::Author, "STANISŁAW");
    let kept = filter_items(&items, &state);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Solaris");
}

#[test]
fn numeric_filter_is_exact() {
    let items = shelf();
    let state = FilterState::new().with(BookField::Pages, "25");
    assert!(filter_items(&items, &state).is_empty());

    let state = FilterState::new().with(BookField::Pages, " 256 ");
    let kept = filter_items(&items, &state);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "dune messiah");
}

#[test]
fn missing_or_malformed_numbers_never_match() {
    let items = shelf();
    // "x" rating and blank page count are skipped rather than failing
    let state = FilterState::new().with(BookField::Rating, "0");
    assert!(filter_items(&items, &state).is_empty());

    let state = FilterState::new().with(BookField::Rating, "five");
    assert!(filter_items(&items, &state).is_empty());
}

#[test]
fn constraints_are_anded() {
    let items = shelf();
    let state = FilterState::new()
        .with(BookField::Author, "herbert")
        .with(BookField::Rating, "5");
    let kept = filter_items(&items, &state);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Dune");
}

#[test]
fn player_counts_use_exact_rule() {
    let games = vec![
        Game {
            title: "Catan".into(),
            min_players: "3".into(),
            max_players: "4".into(),
            ..Default::default()
        },
        Game {
            title: "Carcassonne".into(),
            min_players: "2".into(),
            max_players: "5".into(),
            ..Default::default()
        },
    ];
    let state = FilterState::new().with(GameField::MaxPlayers, "4");
    let kept = filter_items(&games, &state);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Catan");
}
