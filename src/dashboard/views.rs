// src/dashboard/views.rs
//
// One function per dashboard view. Each reads a FilteredView and nothing
// else; none depends on another's output.
// Category groupings come out sorted by category name.

use std::collections::{BTreeMap, HashMap};

use crate::config::consts::TOP_N;
use crate::data::{category_of, FilteredView};

use super::stats::{box_stats, percent_of, BoxStats};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StockCount {
    pub category: String,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceBox {
    pub category: String,
    pub count: usize,
    pub stats: BoxStats,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPoint {
    pub rating: u8,
    pub price: f64,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingMean {
    pub rating: u8,
    pub count: usize,
    pub mean_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RatingShare {
    pub category: String,
    pub rating: u8,
    pub count: usize,
    /// Share of this category's own total.
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StockOut {
    /// Dataset row indices, original order.
    pub row_ix: Vec<usize>,
    pub count: usize,
    pub total: usize,
    pub percent: f64,
}

/// In-stock vs not, per category.
pub fn stock_by_category(view: &FilteredView<'_>) -> Vec<StockCount> {
    let mut by_cat: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for r in view.iter() {
        let e = by_cat.entry(category_of(r)).or_default();
        if r.in_stock() { e.0 += 1 } else { e.1 += 1 }
    }
    by_cat
        .into_iter()
        .map(|(c, (i, o))| StockCount { category: s!(c), in_stock: i, out_of_stock: o })
        .collect()
}

/// Records per category, most common first (ties by first appearance).
pub fn category_distribution(view: &FilteredView<'_>) -> Vec<CategoryShare> {
    let mut order: Vec<(&str, usize)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for r in view.iter() {
        let c = category_of(r);
        let i = *slot.entry(c).or_insert_with(|| {
            order.push((c, 0));
            order.len() - 1
        });
        order[i].1 += 1;
    }
    order.sort_by(|a, b| b.1.cmp(&a.1));

    let total = view.len();
    order
        .into_iter()
        .map(|(c, n)| CategoryShare { category: s!(c), count: n, percent: percent_of(n, total) })
        .collect()
}

/// Box-and-whisker summary of prices per category.
pub fn price_boxes(view: &FilteredView<'_>) -> Vec<PriceBox> {
    let mut by_cat: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for r in view.iter() {
        by_cat.entry(category_of(r)).or_default().push(r.price);
    }
    by_cat
        .into_iter()
        .filter_map(|(c, prices)| {
            box_stats(&prices).map(|stats| PriceBox { category: s!(c), count: prices.len(), stats })
        })
        .collect()
}

/// Row indices of the `TOP_N` cheapest books, ascending; equal prices keep
/// their original order.
pub fn cheapest(view: &FilteredView<'_>) -> Vec<usize> {
    let recs = view.dataset().records();
    let mut ix = view.row_ix.clone();
    ix.sort_by(|&a, &b| recs[a].price.total_cmp(&recs[b].price));
    ix.truncate(TOP_N);
    ix
}

/// Row indices of the `TOP_N` most expensive books, descending; equal prices
/// keep their original order.
pub fn most_expensive(view: &FilteredView<'_>) -> Vec<usize> {
    let recs = view.dataset().records();
    let mut ix = view.row_ix.clone();
    ix.sort_by(|&a, &b| recs[b].price.total_cmp(&recs[a].price));
    ix.truncate(TOP_N);
    ix
}

/// One point per record.
pub fn price_vs_rating(view: &FilteredView<'_>) -> Vec<ScatterPoint> {
    view.iter()
        .map(|r| ScatterPoint { rating: r.rating_numeric(), price: r.price, category: s!(category_of(r)) })
        .collect()
}

/// Mean price per numeric rating present, ascending rating.
pub fn mean_price_by_rating(view: &FilteredView<'_>) -> Vec<RatingMean> {
    let mut acc: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for r in view.iter() {
        let e = acc.entry(r.rating_numeric()).or_insert((0.0, 0));
        e.0 += r.price;
        e.1 += 1;
    }
    acc.into_iter()
        .map(|(rating, (sum, n))| RatingMean { rating, count: n, mean_price: sum / n as f64 })
        .collect()
}

/// For each (category, rating) present: count / category total × 100.
pub fn rating_share(view: &FilteredView<'_>) -> Vec<RatingShare> {
    let mut totals: HashMap<&str, usize> = HashMap::new();
    let mut counts: BTreeMap<(&str, u8), usize> = BTreeMap::new();
    for r in view.iter() {
        let c = category_of(r);
        *totals.entry(c).or_default() += 1;
        *counts.entry((c, r.rating_numeric())).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((c, rating), n)| RatingShare {
            category: s!(c),
            rating,
            count: n,
            percent: percent_of(n, totals.get(c).copied().unwrap_or(0)),
        })
        .collect()
}

/// Books whose availability does not say "In stock".
pub fn stock_out(view: &FilteredView<'_>) -> StockOut {
    let recs = view.dataset().records();
    let row_ix: Vec<usize> = view.row_ix.iter().copied().filter(|&i| !recs[i].in_stock()).collect();
    let count = row_ix.len();
    let total = view.len();
    StockOut { row_ix, count, total, percent: percent_of(count, total) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, Filters};
    use crate::record::{BookRecord, Rating};

    fn ds() -> Dataset {
        Dataset::new(
            vec![
                BookRecord::new("a", 4.0, "In stock", Rating::Two).with_category("Poetry"),
                BookRecord::new("b", 9.0, "Out of stock", Rating::Two).with_category("Art"),
                BookRecord::new("c", 1.0, "In stock", Rating::Four).with_category("Poetry"),
            ],
            "x",
        )
        .unwrap()
    }

    #[test]
    fn stock_counts_are_sorted_by_category() {
        let d = ds();
        let v = FilteredView::full(&d);
        assert_eq!(
            stock_by_category(&v),
            vec![
                StockCount { category: s!("Art"), in_stock: 0, out_of_stock: 1 },
                StockCount { category: s!("Poetry"), in_stock: 2, out_of_stock: 0 },
            ]
        );
    }

    #[test]
    fn distribution_orders_by_count_then_first_seen() {
        let d = ds();
        let shares = category_distribution(&FilteredView::full(&d));
        let names: Vec<&str> = shares.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Poetry", "Art"]);

        // tie: first appearance wins
        let only_b_and_a = FilteredView::new(&d, &Filters::all().with_price(4.0, 9.0));
        let names: Vec<String> = category_distribution(&only_b_and_a).into_iter().map(|s| s.category).collect();
        assert_eq!(names, vec![s!("Poetry"), s!("Art")]);
    }

    #[test]
    fn rating_share_is_per_category() {
        let d = ds();
        let shares = rating_share(&FilteredView::full(&d));
        let poetry_two = shares.iter().find(|s| s.category == "Poetry" && s.rating == 2).unwrap();
        assert_eq!(poetry_two.percent, 50.0);
        let art_two = shares.iter().find(|s| s.category == "Art" && s.rating == 2).unwrap();
        assert_eq!(art_two.percent, 100.0);
    }

    #[test]
    fn box_per_category_counts_its_books() {
        let d = ds();
        let boxes = price_boxes(&FilteredView::full(&d));
        assert_eq!(boxes.len(), 2);
        assert_eq!((boxes[1].category.as_str(), boxes[1].count), ("Poetry", 2));
        assert_eq!(boxes[1].stats.median, 2.5);
    }
}
