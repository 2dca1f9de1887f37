// tests/dataset_load.rs
use std::fs;

use book_scrape::{store, DataFormatError, Rating};

#[test]
fn csv_without_genre_groups_under_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classic_books.csv");
    fs::write(
        &path,
        "Title,Price,Availability,Rating\n\
         Emma,7.50,In stock,Four\n\
         \"Dracula, Annotated\",£12.00,Out of stock,One\n",
    )
    .unwrap();

    let ds = store::load_dataset(&path).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.categories(), &["classic books".to_string()]);
    assert_eq!(ds.records()[1].title, "Dracula, Annotated");
    assert_eq!(ds.records()[1].price, 12.0);
    assert!(!ds.records()[1].in_stock());
    assert_eq!(ds.records()[0].rating, Rating::Four);
}

#[test]
fn tsv_extension_selects_tabs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.tsv");
    fs::write(
        &path,
        "Title\tPrice\tAvailability\tRating\tGenre\n\
         A, B and C\t3.00\tIn stock\tTwo\tPoetry\n\
         D\t4.00\tIn stock\t5\tHistory\n",
    )
    .unwrap();

    let ds = store::load_dataset(&path).unwrap();
    assert_eq!(ds.records()[0].title, "A, B and C");
    assert_eq!(ds.categories(), &["History".to_string(), "Poetry".to_string()]);
    assert_eq!(ds.records()[1].rating, Rating::Five);
    let b = ds.price_bounds();
    assert_eq!((b.lo, b.hi), (3.0, 4.0));
}

#[test]
fn collector_output_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("books.csv");
    let recs = vec![
        book_scrape::BookRecord::new("X", 1.0, "In stock", Rating::One).with_category("Classics"),
        book_scrape::BookRecord::new("Y", 2.25, "In stock", Rating::Three).with_category("Classics"),
    ];
    store::save_records(&path, &recs, book_scrape::config::options::ExportFormat::Csv, true).unwrap();

    let ds = store::load_dataset(&path).unwrap();
    assert_eq!(ds.records(), &recs[..]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = store::load_dataset(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DataFormatError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn bad_rows_are_named_in_the_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(&path, "Title,Price,Availability,Rating\nA,1.00,In stock,Zero\n").unwrap();

    let err = store::load_dataset(&path).unwrap_err();
    assert_eq!(err.to_string(), "Row 1: unknown rating \"Zero\"");
}

#[test]
fn header_only_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "Title,Price,Availability,Rating\n").unwrap();
    assert!(matches!(store::load_dataset(&path), Err(DataFormatError::Empty)));
}
