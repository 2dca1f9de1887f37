// src/dashboard/stats.rs
//
// Small numeric helpers. All of them are total: empty input gives a defined
// value instead of a NaN or a panic.

/// `part / whole * 100`, and 0 when `whole` is 0.
pub fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 * 100.0 }
}

pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() { None } else { Some(xs.iter().sum::<f64>() / xs.len() as f64) }
}

/// Quantile of already-sorted data, linear interpolation between the closest
/// ranks (q in 0..=1).
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 { return None; }
    let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Five-number summary plus Tukey whiskers (1.5 × IQR).
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Most extreme points still inside the fences.
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    /// Points beyond the fences, ascending.
    pub outliers: Vec<f64>,
}

pub fn box_stats(values: &[f64]) -> Option<BoxStats> {
    let mut xs = values.to_vec();
    xs.sort_by(f64::total_cmp);

    let q1 = quantile_sorted(&xs, 0.25)?;
    let median = quantile_sorted(&xs, 0.5)?;
    let q3 = quantile_sorted(&xs, 0.75)?;
    let iqr = q3 - q1;
    let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let inside = || xs.iter().copied().filter(|&x| lo_fence <= x && x <= hi_fence);
    // q1..q3 always holds at least one data point, so both are Some.
    let lower_whisker = inside().next().unwrap_or(q1);
    let upper_whisker = inside().last().unwrap_or(q3);
    let outliers = xs.iter().copied().filter(|&x| x < lo_fence || x > hi_fence).collect();

    Some(BoxStats {
        min: xs[0],
        q1,
        median,
        q3,
        max: xs[xs.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}
