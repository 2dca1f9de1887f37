// src/dashboard/mod.rs
//! The Presenter: dataset + filters in, the full set of dashboard views out.
//!
//! `present` recomputes everything from scratch on each call; there is no
//! cache to invalidate. Views that list books hold dataset row indices, so a
//! `Dashboard` never copies records and outlives no borrow.
//!
//! | # | field                   | rendered as                        |
//! |---|-------------------------|------------------------------------|
//! | 1 | `stock_by_category`     | stacked bars                       |
//! | 2 | `category_distribution` | pie with percentage labels         |
//! | 3 | `price_boxes`           | box-and-whisker per category       |
//! | 4 | `cheapest`, `most_expensive` | Title / Category / Price tables |
//! | 5 | `price_vs_rating`       | scatter colored by category        |
//! | 6 | `mean_price_by_rating`  | bars                               |
//! | 7 | `rating_share`          | grouped bars, one series per category |
//! | 8 | `listing`               | full filtered table                |
//! | 9 | `stock_out`             | table + count + percentage         |

pub mod stats;
pub mod views;

use tracing::debug;

use crate::data::{Dataset, Filters, FilteredView};

pub use stats::{percent_of, BoxStats};
pub use views::{CategoryShare, PriceBox, RatingMean, RatingShare, ScatterPoint, StockCount, StockOut};

/// Headline numbers for the filtered subset.
#[derive(Clone, Debug, PartialEq)]
pub struct Totals {
    pub books: usize,
    pub in_stock: usize,
    pub mean_price: Option<f64>,
    pub mean_rating: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub totals: Totals,
    pub stock_by_category: Vec<StockCount>,
    pub category_distribution: Vec<CategoryShare>,
    pub price_boxes: Vec<PriceBox>,
    pub cheapest: Vec<usize>,
    pub most_expensive: Vec<usize>,
    pub price_vs_rating: Vec<ScatterPoint>,
    pub mean_price_by_rating: Vec<RatingMean>,
    pub rating_share: Vec<RatingShare>,
    /// Filtered row indices in dataset order.
    pub listing: Vec<usize>,
    pub stock_out: StockOut,
}

fn totals(view: &FilteredView<'_>) -> Totals {
    let prices: Vec<f64> = view.iter().map(|r| r.price).collect();
    let ratings: Vec<f64> = view.iter().map(|r| f64::from(r.rating_numeric())).collect();
    Totals {
        books: view.len(),
        in_stock: view.iter().filter(|r| r.in_stock()).count(),
        mean_price: stats::mean(&prices),
        mean_rating: stats::mean(&ratings),
    }
}

/// Build every view over the rows of `ds` that pass `filters`.
pub fn present(ds: &Dataset, filters: &Filters) -> Dashboard {
    let view = FilteredView::new(ds, filters);
    debug!(kept = view.len(), of = ds.len(), "dashboard recomputed");
    present_view(&view)
}

/// Same as `present`, for a view the caller already narrowed.
pub fn present_view(view: &FilteredView<'_>) -> Dashboard {
    Dashboard {
        totals: totals(view),
        stock_by_category: views::stock_by_category(view),
        category_distribution: views::category_distribution(view),
        price_boxes: views::price_boxes(view),
        cheapest: views::cheapest(view),
        most_expensive: views::most_expensive(view),
        price_vs_rating: views::price_vs_rating(view),
        mean_price_by_rating: views::mean_price_by_rating(view),
        rating_share: views::rating_share(view),
        listing: view.row_ix.clone(),
        stock_out: views::stock_out(view),
    }
}
