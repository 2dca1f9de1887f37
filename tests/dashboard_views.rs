// tests/dashboard_views.rs
use book_scrape::{
    dashboard::present,
    data::{category_of, FilteredView},
    BookRecord, Dataset, Filters, Rating,
};

fn abc() -> Dataset {
    Dataset::new(
        vec![
            BookRecord::new("A", 10.0, "In stock", Rating::One),
            BookRecord::new("B", 20.0, "Stock out", Rating::Three),
            BookRecord::new("C", 10.0, "In stock", Rating::Five),
        ],
        "Classics",
    )
    .unwrap()
}

/// Twelve books, distinct prices, three categories, mixed ratings.
fn shelf() -> Dataset {
    let cats = ["Poetry", "History", "Classics"];
    let ratings = Rating::ALL;
    let recs = (0..12)
        .map(|i| {
            let avail = if i % 4 == 0 { "Out of stock" } else { "In stock (7 available)" };
            BookRecord::new(format!("Book {i}"), 5.0 + 3.5 * ((i * 7) % 12) as f64, avail, ratings[i % 5])
                .with_category(cats[i % 3])
        })
        .collect();
    Dataset::new(recs, "Unused").unwrap()
}

fn titles(ds: &Dataset, ix: &[usize]) -> Vec<String> {
    ix.iter().map(|&i| ds.records()[i].title.clone()).collect()
}

#[test]
fn price_filter_then_stock_out_on_three_books() {
    let ds = abc();

    let d = present(&ds, &Filters::all().with_price(10.0, 15.0));
    assert_eq!(titles(&ds, &d.listing), vec!["A", "C"]);
    assert_eq!(d.stock_out.count, 0);
    assert_eq!(d.stock_out.percent, 0.0);

    let full = present(&ds, &Filters::all());
    assert_eq!(full.stock_out.count, 1);
    assert!((full.stock_out.percent - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(titles(&ds, &full.stock_out.row_ix), vec!["B"]);
}

#[test]
fn min_above_max_empties_the_view() {
    let ds = abc();
    let d = present(&ds, &Filters::all().with_price(25.0, 20.0));
    assert!(d.listing.is_empty());
    assert_eq!(d.totals.books, 0);
    assert_eq!(d.stock_out.percent, 0.0);
}

#[test]
fn empty_selection_yields_empty_views_not_panics() {
    let ds = abc();
    let d = present(&ds, &Filters::all().with_categories(Vec::<String>::new()));

    assert_eq!(d.totals.books, 0);
    assert_eq!(d.totals.mean_price, None);
    assert!(d.stock_by_category.is_empty());
    assert!(d.category_distribution.is_empty());
    assert!(d.price_boxes.is_empty());
    assert!(d.cheapest.is_empty() && d.most_expensive.is_empty());
    assert!(d.mean_price_by_rating.is_empty());
    assert!(d.rating_share.is_empty());
    assert_eq!((d.stock_out.count, d.stock_out.total, d.stock_out.percent), (0, 0, 0.0));
}

#[test]
fn category_and_price_filters_commute() {
    let ds = shelf();
    let by_cat = Filters::all().with_categories(["Poetry", "Classics"]);
    let by_price = Filters::all().with_price(10.0, 30.0);
    let both = Filters::all().with_categories(["Poetry", "Classics"]).with_price(10.0, 30.0);

    let a = FilteredView::full(&ds).refine(&by_cat).refine(&by_price);
    let b = FilteredView::full(&ds).refine(&by_price).refine(&by_cat);
    let c = FilteredView::new(&ds, &both);

    assert_eq!(a.row_ix, b.row_ix);
    assert_eq!(a.row_ix, c.row_ix);
    assert!(!a.is_empty());
    assert!(a.iter().all(|r| category_of(r) != "History" && (10.0..=30.0).contains(&r.price)));
}

#[test]
fn top_lists_are_disjoint_and_monotone() {
    let ds = shelf();
    let d = present(&ds, &Filters::all());
    let price = |i: &usize| ds.records()[*i].price;

    assert_eq!(d.cheapest.len(), 5);
    assert_eq!(d.most_expensive.len(), 5);
    assert!(d.cheapest.iter().all(|i| !d.most_expensive.contains(i)));
    assert!(d.cheapest.windows(2).all(|w| price(&w[0]) <= price(&w[1])));
    assert!(d.most_expensive.windows(2).all(|w| price(&w[0]) >= price(&w[1])));
    assert_eq!(price(&d.cheapest[0]), 5.0);
}

#[test]
fn equal_prices_keep_row_order() {
    let ds = abc();
    let d = present(&ds, &Filters::all());
    assert_eq!(titles(&ds, &d.cheapest), vec!["A", "C", "B"]);
    assert_eq!(titles(&ds, &d.most_expensive), vec!["B", "A", "C"]);
}

#[test]
fn rating_share_sums_to_100_per_category() {
    let ds = shelf();
    let d = present(&ds, &Filters::all());
    for cat in ds.categories() {
        let sum: f64 = d.rating_share.iter().filter(|s| &s.category == cat).map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-9, "{cat}: {sum}");
    }
}

#[test]
fn distribution_and_stock_counts_cover_every_book() {
    let ds = shelf();
    let d = present(&ds, &Filters::all());

    let total: usize = d.category_distribution.iter().map(|s| s.count).sum();
    assert_eq!(total, 12);
    let pct: f64 = d.category_distribution.iter().map(|s| s.percent).sum();
    assert!((pct - 100.0).abs() < 1e-9);

    let stocked: usize = d.stock_by_category.iter().map(|s| s.in_stock + s.out_of_stock).sum();
    assert_eq!(stocked, 12);
    assert_eq!(d.totals.in_stock, 9);
    assert_eq!(d.stock_out.count, 3);
    assert_eq!(d.price_vs_rating.len(), 12);
}

#[test]
fn mean_price_by_rating_is_ascending() {
    let ds = abc();
    let d = present(&ds, &Filters::all());
    let rows: Vec<(u8, f64)> = d.mean_price_by_rating.iter().map(|m| (m.rating, m.mean_price)).collect();
    assert_eq!(rows, vec![(1, 10.0), (3, 20.0), (5, 10.0)]);
}
