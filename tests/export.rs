// tests/export.rs
//
// Filtered listing out to disk and clipboard text, as the dashboard's
// Export / Copy buttons produce it.

use std::fs;

use book_scrape::{
    config::options::{ExportFormat, ExportOptions},
    present,
    store::{self, LISTING_HEADERS},
    BookRecord, Dataset, Filters, Rating,
};

fn ds() -> Dataset {
    Dataset::new(
        vec![
            BookRecord::new("Emma", 7.5, "In stock", Rating::Four),
            BookRecord::new("Persuasion, Vol. 2", 30.0, "In stock", Rating::Two).with_category("Romance"),
            BookRecord::new("Dracula", 12.0, "Out of stock", Rating::One),
        ],
        "Classics",
    )
    .unwrap()
}

#[test]
fn export_writes_only_the_filtered_rows() {
    let ds = ds();
    let dash = present(&ds, &Filters::all().with_categories(["Classics"]));
    let rows = store::listing_rows(&ds, &dash.listing);

    let dir = tempfile::tempdir().unwrap();
    let mut opts = ExportOptions::default();
    opts.set_path(&dir.path().join("nested/filtered.txt").to_string_lossy());
    let path = opts.out_path();
    assert!(path.ends_with("nested/filtered.csv"));

    store::write_table(&path, Some(&LISTING_HEADERS[..]), &rows, opts.format).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Title,Price,Availability,Rating,Genre\n\
         Emma,7.50,In stock,Four,Classics\n\
         Dracula,12.00,Out of stock,One,Classics\n"
    );
}

#[test]
fn tsv_without_headers() {
    let ds = ds();
    let dash = present(&ds, &Filters::all().with_price(20.0, 40.0));
    let rows = store::listing_rows(&ds, &dash.listing);

    let dir = tempfile::tempdir().unwrap();
    let opts = {
        let mut o = ExportOptions { format: ExportFormat::Tsv, include_headers: false, ..ExportOptions::default() };
        o.set_path(&dir.path().join("pricey").to_string_lossy());
        o
    };
    let headers = opts.include_headers.then_some(&LISTING_HEADERS[..]);
    store::write_table(&opts.out_path(), headers, &rows, opts.format).unwrap();

    let text = fs::read_to_string(dir.path().join("pricey.tsv")).unwrap();
    assert_eq!(text, "Persuasion, Vol. 2\t30.00\tIn stock\tTwo\tRomance\n");
}

#[test]
fn clipboard_text_matches_file_contents() {
    let ds = ds();
    let dash = present(&ds, &Filters::all());
    let rows = store::listing_rows(&ds, &dash.listing);

    let text = store::table_string(Some(&LISTING_HEADERS[..]), &rows, ExportFormat::Csv).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("all.csv");
    store::write_table(&path, Some(&LISTING_HEADERS[..]), &rows, ExportFormat::Csv).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), text);
    assert!(text.contains("\"Persuasion, Vol. 2\",30.00"));
    assert_eq!(text.lines().count(), 4);
}
