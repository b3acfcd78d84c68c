use super::*;
use crate::book::{Book, BookField};
use crate::record::{Record, RecordField};

fn book(id: &str, title: &str, rating: &str, published: &str) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        rating: rating.to_string(),
        published: published.to_string(),
        ..Default::default()
    }
}

fn ids(items: &[Book]) -> Vec<&str> {
    items.iter().map(|b| b.id.as_str()).collect()
}

#[test]
fn default_spec_is_title_ascending() {
    let spec = SortSpec::<BookField>::default();
    assert_eq!(spec.field, BookField::Title);
    assert_eq!(spec.direction, Direction::Ascending);
}

#[test]
fn titles_sort_case_insensitively() {
    let items = vec![
        book("1", "solaris", "", ""),
        book("2", "Dune", "", ""),
        book("3", "anathem", "", ""),
    ];
    let sorted = sort_items(&items, &SortSpec::default());
    assert_eq!(ids(&sorted), vec!["3", "2", "1"]);
}

#[test]
fn rating_sorts_numerically_with_zero_fallback() {
    let items = vec![
        book("a", "A", "10", ""),
        book("b", "B", "9", ""),
        book("c", "C", "n/a", ""),
        book("d", "D", "", ""),
    ];
    let sorted = sort_items(&items, &SortSpec::ascending(BookField::Rating));
    // "n/a" and "" both count as 0 and keep their input order
    assert_eq!(ids(&sorted), vec!["c", "d", "b", "a"]);
}

#[test]
fn dates_compare_as_raw_strings() {
    let items = vec![
        book("late", "A", "", "2021-03-01"),
        book("early", "B", "", "1965-08-01"),
        book("mid", "C", "", "1999-12-31"),
    ];
    let sorted = sort_items(&items, &SortSpec::ascending(BookField::Published));
    assert_eq!(ids(&sorted), vec!["early", "mid", "late"]);
}

#[test]
fn descending_is_exact_reversal_of_ascending() {
    let items = vec![
        book("1", "Same", "3", ""),
        book("2", "same", "3", ""),
        book("3", "Other", "5", ""),
        book("4", "SAME", "1", ""),
    ];
    for &field in BookField::all() {
        let asc = sort_items(&items, &SortSpec::ascending(field));
        let desc = sort_items(&asc, &SortSpec::descending(field));
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed, "field {:?}", field);
    }
}

#[test]
fn descending_ties_come_out_reversed() {
    let items = vec![book("1", "Same", "", ""), book("2", "same", "", "")];
    let sorted = sort_items(&items, &SortSpec::descending(BookField::Title));
    assert_eq!(ids(&sorted), vec!["2", "1"]);
}

#[test]
fn unknown_field_name_falls_back_to_title() {
    let spec = SortSpec::<RecordField>::from_names("bpm", "DESC");
    assert_eq!(spec.field, RecordField::Title);
    assert_eq!(spec.direction, Direction::Descending);

    let spec = SortSpec::<RecordField>::from_names("tracks", "sideways");
    assert_eq!(spec.field, RecordField::Tracks);
    assert_eq!(spec.direction, Direction::Ascending);
}

#[test]
fn dune_scenario_sorts_by_rating_descending() {
    let items = vec![book("x", "dune", "3", ""), book("y", "Dune", "5", "")];
    let sorted = sort_items(&items, &SortSpec::descending(BookField::Rating));
    let titles: Vec<&str> = sorted.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "dune"]);
}

#[test]
fn records_sort_by_track_count() {
    let items = vec![
        Record {
            title: "Long".into(),
            tracks: "14".into(),
            ..Default::default()
        },
        Record {
            title: "Short".into(),
            tracks: "4".into(),
            ..Default::default()
        },
    ];
    let sorted = sort_items(&items, &SortSpec::ascending(RecordField::Tracks));
    assert_eq!(sorted[0].title, "Short");
}
