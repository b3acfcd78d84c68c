use shelf_core::{Book, BookField, Direction, SortSpec};
use shelf_db::SqliteStore;
use shelf_lib::{ImportFormat, ListView, ViewState, import_items, parse_items, write_export};
use tempfile::TempDir;

const LIBRARY: &str = "\
- title: Dune
  author: Frank Herbert
  genre: Sci-Fi
  rating: 5
  status: przeczytana
- title: dune
  genre: sci-fi
  rating: 3
  status: reading
- title: Emma
  author: Jane Austen
  genre: \"\"
  rating: 4
  status: dnf
";

#[test]
fn import_browse_and_export() {
    let tmp = TempDir::new().unwrap();
    let store = SqliteStore::open(&tmp.path().join("shelf.db")).unwrap();
    let books: Vec<Book> = parse_items(LIBRARY, ImportFormat::Yaml).unwrap();
    import_items(&store, "alice", books).unwrap();

    let mut view: ListView<Book> = ListView::new("alice");
    view.refresh(&store);
    assert_eq!(view.state(), ViewState::Loaded);
    assert_eq!(view.items().len(), 3);

    view.set_filter(BookField::Title, "dune");
    view.set_sort(SortSpec::new(BookField::Rating, Direction::Descending));
    let ratings: Vec<String> = view.visible().into_iter().map(|b| b.rating).collect();
    assert_eq!(ratings, vec!["5", "3"]);

    let genres = view.aggregate(BookField::Genre);
    assert_eq!(genres.get("sci-fi"), 2);
    assert_eq!(genres.get("unknown"), 1);

    let statuses = view.aggregate(BookField::Status);
    assert_eq!(statuses.get("read"), 1);
    assert_eq!(statuses.get("reading"), 1);
    assert_eq!(statuses.get("abandoned"), 1);

    let csv = view.export_csv().unwrap();
    let out_dir = tmp.path().join("exports");
    let path = write_export(&out_dir, "library_export.csv", &csv).unwrap();
    let written = std::fs::read_to_string(path).unwrap();
    let mut lines = written.lines();
    assert!(lines.next().unwrap().starts_with("Title,Author,Genre"));
    assert!(lines.next().unwrap().starts_with("Dune,Frank Herbert,Sci-Fi"));
    assert!(lines.next().unwrap().starts_with("dune,,sci-fi"));
    assert!(lines.next().is_none());
}
