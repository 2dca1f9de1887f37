// src/cli.rs
//
// Headless surface: `collect` runs the Collector, `summary` prints every
// dashboard view for a dataset as plain text.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::{
    config::{consts::*, options::{CollectOptions, ExportFormat}},
    dashboard::{present, Dashboard},
    data::{Dataset, Filters},
    progress::Progress,
    record::BookRecord,
    scrape, store,
};

#[derive(Parser, Debug)]
#[command(name = "book_scrape", version, about = "Collect the Books to Scrape catalog and summarize it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk the listing pages and write the dataset file.
    Collect(CollectArgs),
    /// Print the dashboard views for a dataset file.
    Summary(SummaryArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Listing directory every relative link resolves against.
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value = FIRST_PAGE)]
    pub first_page: String,

    /// Fail instead of requesting more than this many pages.
    #[arg(long, default_value_t = DEFAULT_PAGE_CAP)]
    pub page_cap: usize,

    /// Output file [default: out/books.csv]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Overrides the format implied by the output extension.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Append a Genre column.
    #[arg(long)]
    pub category_column: bool,

    /// Genre label [default: derived from the listing URL]
    #[arg(long, requires = "category_column")]
    pub category: Option<String>,
}

impl CollectArgs {
    pub fn to_options(&self) -> CollectOptions {
        let mut opts = CollectOptions {
            base_url: self.base_url.clone(),
            first_page: self.first_page.clone(),
            page_cap: self.page_cap,
            category_column: self.category_column,
            category: self.category.clone(),
            ..CollectOptions::default()
        };
        if let Some(out) = &self.out {
            opts.set_out_path(&out.to_string_lossy());
        }
        if let Some(f) = self.format {
            opts.format = f.into();
        }
        opts
    }
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Dataset file [default: out/books.csv]
    pub path: Option<PathBuf>,

    /// Keep only these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    #[arg(long)]
    pub min_price: Option<f64>,

    #[arg(long)]
    pub max_price: Option<f64>,
}

impl SummaryArgs {
    /// Unset bounds fall back to the dataset's own.
    pub fn filters(&self, ds: &Dataset) -> Filters {
        let mut f = Filters::all();
        if !self.categories.is_empty() {
            f = f.with_categories(self.categories.iter().cloned());
        }
        if self.min_price.is_some() || self.max_price.is_some() {
            let b = ds.price_bounds();
            f = f.with_price(self.min_price.unwrap_or(b.lo), self.max_price.unwrap_or(b.hi));
        }
        f
    }
}

/* ---------------- Progress on stderr ---------------- */

struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, page_no: usize, records: usize) {
        eprintln!("page {page_no}: {records} books so far");
    }
}

/* ---------------- Entry ---------------- */

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Collect(args) => run_collect(&args),
        Command::Summary(args) => run_summary(&args),
    }
}

fn run_collect(args: &CollectArgs) -> Result<()> {
    let opts = args.to_options();
    let summary = scrape::run_collect(&opts, Some(&mut CliProgress))
        .wrap_err_with(|| format!("collecting {}", opts.base_url))?;
    println!("{} books from {} pages → {}", summary.records, summary.pages, summary.path.display());
    Ok(())
}

fn run_summary(args: &SummaryArgs) -> Result<()> {
    let path = args.path.clone().unwrap_or_else(|| CollectOptions::default().out_path());
    let ds = store::load_dataset(&path).wrap_err_with(|| format!("loading {}", path.display()))?;
    let filters = args.filters(&ds);
    let dash = present(&ds, &filters);
    info!(path = %path.display(), kept = dash.totals.books, "summary");
    print!("{}", render_summary(&ds, &dash));
    Ok(())
}

/* ---------------- Text rendering ---------------- */

fn book_line(out: &mut String, r: &BookRecord) {
    let _ = writeln!(
        out,
        "  £{:>7.2}  {:<14}  {}",
        r.price,
        r.category.as_deref().unwrap_or(""),
        r.title
    );
}

/// All nine views as text, in dashboard order.
pub fn render_summary(ds: &Dataset, dash: &Dashboard) -> String {
    let mut out = String::new();
    let recs = ds.records();
    let t = &dash.totals;

    let _ = writeln!(out, "{} of {} books ({} in stock)", t.books, ds.len(), t.in_stock);
    if let (Some(p), Some(r)) = (t.mean_price, t.mean_rating) {
        let _ = writeln!(out, "mean price £{p:.2}, mean rating {r:.2}");
    }

    let _ = writeln!(out, "\nStock status by category");
    for s in &dash.stock_by_category {
        let _ = writeln!(out, "  {:<20} in stock {:>4}   not in stock {:>4}", s.category, s.in_stock, s.out_of_stock);
    }

    let _ = writeln!(out, "\nBooks per category");
    for s in &dash.category_distribution {
        let _ = writeln!(out, "  {:<20} {:>4}  {:>5.1}%", s.category, s.count, s.percent);
    }

    let _ = writeln!(out, "\nPrice spread by category");
    for b in &dash.price_boxes {
        let s = &b.stats;
        let _ = writeln!(
            out,
            "  {:<20} n={:<4} min {:.2}  q1 {:.2}  median {:.2}  q3 {:.2}  max {:.2}  outliers {}",
            b.category, b.count, s.min, s.q1, s.median, s.q3, s.max, s.outliers.len()
        );
    }

    let _ = writeln!(out, "\nCheapest books");
    dash.cheapest.iter().filter_map(|&i| recs.get(i)).for_each(|r| book_line(&mut out, r));
    let _ = writeln!(out, "\nMost expensive books");
    dash.most_expensive.iter().filter_map(|&i| recs.get(i)).for_each(|r| book_line(&mut out, r));

    let _ = writeln!(out, "\nPrice by rating");
    for rating in 1..=5u8 {
        let prices: Vec<f64> = dash.price_vs_rating.iter().filter(|p| p.rating == rating).map(|p| p.price).collect();
        if prices.is_empty() {
            continue;
        }
        let lo = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let _ = writeln!(out, "  {rating}★  {:>4} books  £{lo:.2} – £{hi:.2}", prices.len());
    }

    let _ = writeln!(out, "\nMean price per rating");
    for m in &dash.mean_price_by_rating {
        let _ = writeln!(out, "  {}★  £{:.2}  ({} books)", m.rating, m.mean_price, m.count);
    }

    let _ = writeln!(out, "\nRating share within each category");
    for s in &dash.rating_share {
        let _ = writeln!(out, "  {:<20} {}★  {:>4}  {:>5.1}%", s.category, s.rating, s.count, s.percent);
    }

    let _ = writeln!(out, "\nBooks ({})", dash.listing.len());
    dash.listing.iter().filter_map(|&i| recs.get(i)).for_each(|r| book_line(&mut out, r));

    let so = &dash.stock_out;
    let _ = writeln!(out, "\nNot in stock: {} of {} ({:.2}%)", so.count, so.total, so.percent);
    so.row_ix.iter().filter_map(|&i| recs.get(i)).for_each(|r| book_line(&mut out, r));

    let _ = writeln!(out, "\n{ATTRIBUTION}");
    out
}
