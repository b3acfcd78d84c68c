use super::*;
use shelf_core::{Book, BookField, Direction};
use shelf_db::{ItemStore, SqliteStore};

fn book(title: &str, rating: &str, genre: &str) -> Book {
    Book {
        owner_id: "alice".to_string(),
        title: title.to_string(),
        rating: rating.to_string(),
        genre: genre.to_string(),
        ..Default::default()
    }
}

fn loaded(items: Vec<Book>) -> ListView<Book> {
    let mut view = ListView::new("alice");
    let ticket = view.begin_fetch();
    assert!(view.finish_fetch(ticket, Ok::<_, String>(items)));
    view
}

#[test]
fn new_view_is_loading_and_not_empty() {
    let view: ListView<Book> = ListView::new("alice");
    assert_eq!(view.state(), ViewState::Loading);
    assert!(!view.is_empty());
    assert!(view.message().is_none());
}

#[test]
fn visible_is_filtered_then_sorted() {
    let mut view = loaded(vec![
        book("Dune", "5", "Sci-Fi"),
        book("Emma", "4", "Romance"),
        book("dune", "3", "sci-fi"),
    ]);
    view.set_filter(BookField::Title, "dune");
    view.set_sort(SortSpec::new(BookField::Rating, Direction::Descending));

    let visible = view.visible();
    let titles: Vec<&str> = visible.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "dune"]);
    assert_eq!(view.items().len(), 3);
}

#[test]
fn empty_only_after_load() {
    let mut view = loaded(vec![book("Dune", "5", "")]);
    assert!(!view.is_empty());
    view.set_filter(BookField::Title, "emma");
    assert!(view.is_empty());
}

#[test]
fn stale_fetch_is_dropped() {
    let mut view: ListView<Book> = ListView::new("alice");
    let first = view.begin_fetch();
    let second = view.begin_fetch();
    assert!(second.generation() > first.generation());

    assert!(view.finish_fetch(second, Ok::<_, String>(vec![book("New", "", "")])));
    assert!(!view.finish_fetch(first, Ok::<_, String>(vec![book("Old", "", "")])));

    assert_eq!(view.items().len(), 1);
    assert_eq!(view.items()[0].title, "New");
}

#[test]
fn owner_change_invalidates_inflight_fetch() {
    let mut view: ListView<Book> = ListView::new("alice");
    let ticket = view.begin_fetch();
    view.set_owner("bob");
    assert!(!view.finish_fetch(ticket, Ok::<_, String>(vec![book("Dune", "", "")])));
    assert!(view.items().is_empty());
    assert_eq!(view.state(), ViewState::Loading);
    assert_eq!(view.owner_id(), "bob");
}

#[test]
fn failed_fetch_leaves_empty_list_and_message() {
    let mut view = loaded(vec![book("Dune", "5", "")]);
    let ticket = view.begin_fetch();
    assert!(view.finish_fetch(ticket, Err::<Vec<Book>, _>("permission denied: token expired")));
    assert_eq!(view.state(), ViewState::Loaded);
    assert!(view.items().is_empty());
    assert!(view.is_empty());
    let message = view.message().unwrap();
    assert!(message.starts_with(FETCH_FAILED_MESSAGE));
    assert!(message.contains("permission denied: token expired"));
}

#[test]
fn store_error_text_reaches_the_message() {
    let store = SqliteStore::open_memory().unwrap();
    store.insert(&book("Dune", "5", "")).unwrap();
    store.connection().execute_batch("DROP TABLE items").unwrap();

    let mut view: ListView<Book> = ListView::new("alice");
    view.refresh(&store);
    assert_eq!(view.state(), ViewState::Loaded);
    assert!(view.items().is_empty());
    assert!(view.message().unwrap().contains("no such table"));

    let ticket = view.begin_fetch();
    assert!(view.finish_fetch(ticket, Ok::<_, String>(vec![book("Emma", "4", "")])));
    assert!(view.message().is_none());
}

#[test]
fn reset_restores_defaults() {
    let mut view = loaded(vec![book("Dune", "5", "")]);
    view.set_filter(BookField::Genre, "x");
    view.set_sort(SortSpec::descending(BookField::Rating));
    view.reset();
    assert!(view.filter().is_blank());
    assert_eq!(*view.sort(), SortSpec::default());
}

#[test]
fn aggregate_ignores_filter() {
    let mut view = loaded(vec![
        book("Dune", "5", "Sci-Fi"),
        book("Emma", "4", ""),
        book("dune", "3", "sci-fi"),
    ]);
    view.set_filter(BookField::Title, "emma");
    let agg = view.aggregate(BookField::Genre);
    assert_eq!(agg.get("sci-fi"), 2);
    assert_eq!(agg.get("unknown"), 1);
}

#[test]
fn export_uses_visible_rows() {
    let mut view = loaded(vec![book("Dune", "5", ""), book("Emma", "4", "")]);
    view.set_filter(BookField::Title, "emma");
    let csv = view.export_csv().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Emma,"));
}

#[test]
fn refresh_reads_owner_items_from_store() {
    let store = SqliteStore::open_memory().unwrap();
    store.insert(&book("Dune", "5", "")).unwrap();
    let mut bob = book("Fiasco", "4", "");
    bob.owner_id = "bob".to_string();
    store.insert(&bob).unwrap();

    let mut view: ListView<Book> = ListView::new("alice");
    view.refresh(&store);
    assert_eq!(view.state(), ViewState::Loaded);
    assert_eq!(view.items().len(), 1);
    assert_eq!(view.items()[0].title, "Dune");
    assert!(!view.items()[0].id.is_empty());
}
