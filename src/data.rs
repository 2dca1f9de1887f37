// src/data.rs
//
// Canonical dataset and the filtered views taken of it.
//
// - Dataset: validated, immutable records for one dashboard session. Every
//            record carries a category once it gets here.
// - Filters: the user's category subset and price range (both optional).
// - FilteredView: row indices into a Dataset. Never a copy.

use std::collections::BTreeSet;

use crate::error::DataFormatError;
use crate::record::BookRecord;

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<BookRecord>,
    /// Sorted, unique.
    categories: Vec<String>,
    price_min: f64,
    price_max: f64,
}

impl Dataset {
    /// Rows without a category get `fallback_category`.
    pub fn new(mut records: Vec<BookRecord>, fallback_category: &str) -> Result<Self, DataFormatError> {
        if records.is_empty() {
            return Err(DataFormatError::Empty);
        }
        for r in &mut records {
            let missing = r.category.as_deref().is_none_or(|c| c.trim().is_empty());
            if missing {
                r.category = Some(s!(fallback_category));
            }
        }

        let categories: BTreeSet<String> = records.iter().map(|r| s!(category_of(r))).collect();
        let (price_min, price_max) = records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| (lo.min(r.price), hi.max(r.price)));

        Ok(Self { records, categories: categories.into_iter().collect(), price_min, price_max })
    }

    pub fn records(&self) -> &[BookRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn categories(&self) -> &[String] { &self.categories }

    /// Observed price span; the default for the price filter.
    pub fn price_bounds(&self) -> PriceRange {
        PriceRange { lo: self.price_min, hi: self.price_max }
    }
}

/// Category of a record that came through `Dataset::new`.
#[inline]
pub fn category_of(r: &BookRecord) -> &str {
    r.category.as_deref().unwrap_or("")
}

/// Inclusive on both ends. A range with `lo > hi` contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub lo: f64,
    pub hi: f64,
}

impl PriceRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        self.lo <= price && price <= self.hi
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filters {
    /// `None` keeps every category.
    pub categories: Option<BTreeSet<String>>,
    /// `None` keeps every price.
    pub price: Option<PriceRange>,
}

impl Filters {
    /// Nothing filtered.
    pub fn all() -> Self { Self::default() }

    /// The explicit form of "nothing filtered" for this dataset: every
    /// category ticked and the slider at the observed bounds.
    pub fn defaults_for(ds: &Dataset) -> Self {
        Self {
            categories: Some(ds.categories().iter().cloned().collect()),
            price: Some(ds.price_bounds()),
        }
    }

    pub fn with_categories<I, S>(mut self, cats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(cats.into_iter().map(Into::into).collect());
        self
    }

    /// Bounds are kept as given; `lo > hi` filters everything out.
    pub fn with_price(mut self, lo: f64, hi: f64) -> Self {
        self.price = Some(PriceRange::new(lo, hi));
        self
    }

    pub fn matches(&self, r: &BookRecord) -> bool {
        let cat_ok = self.categories.as_ref().is_none_or(|set| set.contains(category_of(r)));
        let price_ok = self.price.is_none_or(|range| range.contains(r.price));
        cat_ok && price_ok
    }
}

/// Zero-copy filtered view: positions of the kept rows in the dataset.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    ds: &'a Dataset,
}

impl<'a> FilteredView<'a> {
    pub fn new(ds: &'a Dataset, filters: &Filters) -> Self {
        let row_ix = ds
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| filters.matches(r))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, ds }
    }

    /// Every row.
    pub fn full(ds: &'a Dataset) -> Self {
        Self { row_ix: (0..ds.len()).collect(), ds }
    }

    /// Narrow this view further; order of kept rows is preserved.
    pub fn refine(mut self, filters: &Filters) -> Self {
        let ds = self.ds;
        self.row_ix.retain(|&i| filters.matches(&ds.records()[i]));
        self
    }

    pub fn dataset(&self) -> &'a Dataset { self.ds }
    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn row(&self, i: usize) -> Option<&'a BookRecord> {
        let ds = self.ds;
        self.row_ix.get(i).and_then(|&ix| ds.records().get(ix))
    }

    /// Kept records in original row order.
    pub fn iter(&self) -> impl Iterator<Item = &'a BookRecord> + '_ {
        let ds = self.ds;
        self.row_ix.iter().map(move |&ix| &ds.records()[ix])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Rating;

    fn ds() -> Dataset {
        Dataset::new(
            vec![
                BookRecord::new("A", 10.0, "In stock", Rating::One).with_category("Poetry"),
                BookRecord::new("B", 20.0, "Stock out", Rating::Three),
                BookRecord::new("C", 10.0, "In stock", Rating::Five).with_category("Classics"),
            ],
            "Classics",
        )
        .unwrap()
    }

    #[test]
    fn missing_categories_get_the_fallback() {
        let d = ds();
        assert_eq!(d.categories(), &[s!("Classics"), s!("Poetry")]);
        assert_eq!(category_of(&d.records()[1]), "Classics");
        assert_eq!(d.price_bounds(), PriceRange { lo: 10.0, hi: 20.0 });
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::new(Vec::new(), "x"), Err(DataFormatError::Empty)));
    }

    #[test]
    fn default_filters_keep_everything() {
        let d = ds();
        assert_eq!(FilteredView::new(&d, &Filters::all()).row_ix, vec![0, 1, 2]);
        assert_eq!(FilteredView::new(&d, &Filters::defaults_for(&d)).row_ix, vec![0, 1, 2]);
    }

    #[test]
    fn price_range_is_inclusive() {
        let d = ds();
        let v = FilteredView::new(&d, &Filters::all().with_price(10.0, 15.0));
        let titles: Vec<&str> = v.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(FilteredView::new(&d, &Filters::all().with_price(20.0, 20.0)).row_ix, vec![1]);
    }

    #[test]
    fn crossed_price_bounds_keep_nothing() {
        let d = ds();
        assert!(!PriceRange::new(5.0, 1.0).contains(3.0));
        assert!(FilteredView::new(&d, &Filters::all().with_price(25.0, 20.0)).is_empty());
        assert!(FilteredView::new(&d, &Filters::all().with_price(15.0, 10.0)).is_empty());
    }

    #[test]
    fn empty_category_selection_keeps_nothing() {
        let d = ds();
        let v = FilteredView::new(&d, &Filters::all().with_categories(Vec::<String>::new()));
        assert!(v.is_empty());
        assert_eq!(v.row(0), None);
    }
}
