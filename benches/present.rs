// benches/present.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use url::Url;

use book_scrape::{
    present,
    specs::listing::parse_listing,
    BookRecord, Dataset, Filters, Rating,
};

const LABELS: [&str; 5] = ["One", "Two", "Three", "Four", "Five"];

/// A full-size listing page: 20 items and a next link.
fn sample_page() -> String {
    let items: String = (0..20)
        .map(|i| {
            format!(
                r#"<article class="product_pod">
                     <p class="star-rating {}"></p>
                     <h3><a href="../../x_{i}/index.html" title="Book number {i}">Book number {i}</a></h3>
                     <div class="product_price">
                       <p class="price_color">£{}.{:02}</p>
                       <p class="instock availability"> In stock </p>
                     </div>
                   </article>"#,
                LABELS[i % 5],
                10 + i,
                (i * 7) % 100
            )
        })
        .collect();
    format!(r#"<html><body><ol class="row">{items}</ol><ul class="pager"><li class="next"><a href="page-2.html">next</a></li></ul></body></html>"#)
}

fn sample_dataset(n: usize) -> Dataset {
    let cats = ["Classics", "Poetry", "History", "Fiction", "Travel"];
    let recs = (0..n)
        .map(|i| {
            let avail = if i % 9 == 0 { "Out of stock" } else { "In stock" };
            BookRecord::new(format!("Book {i}"), 5.0 + ((i * 37) % 5000) as f64 / 100.0, avail, Rating::ALL[(i * 3) % 5])
                .with_category(cats[i % cats.len()])
        })
        .collect();
    Dataset::new(recs, "Uncategorized").expect("non-empty")
}

fn bench_parse(c: &mut Criterion) {
    let html = sample_page();
    let url = Url::parse("https://books.toscrape.com/catalogue/category/books/classics_6/index.html").expect("url");

    c.bench_function("parse_listing_20", |b| {
        b.iter(|| {
            let page = parse_listing(black_box(&html), &url).expect("parse");
            black_box(page.records.len())
        })
    });
}

fn bench_present(c: &mut Criterion) {
    let ds = sample_dataset(5_000);
    let all = Filters::all();
    let narrowed = Filters::all().with_categories(["Classics", "Poetry"]).with_price(10.0, 40.0);

    c.bench_function("present_all_5k", |b| {
        b.iter(|| black_box(present(black_box(&ds), &all)).listing.len())
    });
    c.bench_function("present_filtered_5k", |b| {
        b.iter(|| black_box(present(black_box(&ds), &narrowed)).listing.len())
    });
}

criterion_group!(benches, bench_parse, bench_present);
criterion_main!(benches);
