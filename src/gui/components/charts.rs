// src/gui/components/charts.rs
//
// Small painter-drawn charts. Each takes already-computed view data and a
// height; width is whatever the layout offers. Purely a view.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind, Vec2};

use crate::dashboard::{CategoryShare, PriceBox, RatingMean, RatingShare, ScatterPoint, StockCount};

/* ---------------- Palettes ---------------- */

pub const IN_STOCK: Color32 = Color32::from_rgb(0x51, 0x7F, 0xFF);
pub const NOT_IN_STOCK: Color32 = Color32::from_rgb(0x76, 0xCD, 0xE7);
pub const MEAN_BAR: Color32 = Color32::from_rgb(0xE2, 0xAF, 0xE2);

const SERIES: [Color32; 10] = [
    Color32::from_rgb(0x1F, 0x77, 0xB4),
    Color32::from_rgb(0xFF, 0x7F, 0x0E),
    Color32::from_rgb(0x2C, 0xA0, 0x2C),
    Color32::from_rgb(0xD6, 0x27, 0x28),
    Color32::from_rgb(0x94, 0x67, 0xBD),
    Color32::from_rgb(0x8C, 0x56, 0x4B),
    Color32::from_rgb(0xE3, 0x77, 0xC2),
    Color32::from_rgb(0x7F, 0x7F, 0x7F),
    Color32::from_rgb(0xBC, 0xBD, 0x22),
    Color32::from_rgb(0x17, 0xBE, 0xCF),
];

// Dark-to-pink ramp for the rating share chart.
const PINK: [Color32; 8] = [
    Color32::from_rgb(0x00, 0x00, 0x00),
    Color32::from_rgb(0x2C, 0x2C, 0x2C),
    Color32::from_rgb(0x4B, 0x3F, 0x4E),
    Color32::from_rgb(0x6E, 0x4C, 0x6E),
    Color32::from_rgb(0x8B, 0x5C, 0x7E),
    Color32::from_rgb(0xA8, 0x6C, 0x8C),
    Color32::from_rgb(0xC4, 0x8C, 0x9E),
    Color32::from_rgb(0xE1, 0xA6, 0xB4),
];

/// Stable color for the i-th category of the dataset.
pub fn series_color(i: usize) -> Color32 { SERIES[i % SERIES.len()] }

pub fn pink_color(i: usize) -> Color32 { PINK[i % PINK.len()] }

/* ---------------- Plot frame ---------------- */

const LEFT: f32 = 52.0;
const BOTTOM: f32 = 30.0;
const PAD: f32 = 10.0;

/// Round up to 1, 2 or 5 × 10^k so axis ticks land on readable values.
pub fn nice_max(v: f64) -> f64 {
    if !(v > 0.0) { return 1.0; }
    let mag = 10f64.powf(v.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * mag)
        .find(|&c| c >= v)
        .unwrap_or(10.0 * mag)
}

struct Plot {
    inner: Rect,
    y_max: f64,
}

impl Plot {
    fn allocate(ui: &mut egui::Ui, height: f32) -> (egui::Response, egui::Painter) {
        let w = ui.available_width().max(160.0);
        ui.allocate_painter(Vec2::new(w, height), Sense::hover())
    }

    fn new(outer: Rect, y_max: f64) -> Self {
        let inner = Rect::from_min_max(
            outer.min + Vec2::new(LEFT, PAD),
            outer.max - Vec2::new(PAD, BOTTOM),
        );
        Self { inner, y_max: nice_max(y_max) }
    }

    fn y(&self, v: f64) -> f32 {
        let t = (v / self.y_max).clamp(0.0, 1.0) as f32;
        self.inner.bottom() - t * self.inner.height()
    }

    /// Horizontal slot `i` of `n` across the plot width: (left, right).
    fn slot(&self, i: usize, n: usize) -> (f32, f32) {
        let w = self.inner.width() / n.max(1) as f32;
        let l = self.inner.left() + w * i as f32;
        (l, l + w)
    }

    fn axes(&self, painter: &egui::Painter, ui: &egui::Ui, fmt: impl Fn(f64) -> String) {
        let vis = ui.visuals();
        let axis = Stroke::new(1.0, vis.text_color());
        let grid = Stroke::new(0.5, vis.weak_text_color());
        let font = FontId::proportional(11.0);

        for k in 0..=4 {
            let v = self.y_max * f64::from(k) / 4.0;
            let y = self.y(v);
            if k > 0 {
                painter.line_segment([Pos2::new(self.inner.left(), y), Pos2::new(self.inner.right(), y)], grid);
            }
            painter.text(Pos2::new(self.inner.left() - 6.0, y), Align2::RIGHT_CENTER, fmt(v), font.clone(), vis.text_color());
        }
        painter.line_segment([self.inner.left_bottom(), self.inner.right_bottom()], axis);
        painter.line_segment([self.inner.left_bottom(), self.inner.left_top()], axis);
    }

    fn x_label(&self, painter: &egui::Painter, ui: &egui::Ui, x: f32, text: &str) {
        painter.text(
            Pos2::new(x, self.inner.bottom() + 4.0),
            Align2::CENTER_TOP,
            short(text, 14),
            FontId::proportional(11.0),
            ui.visuals().text_color(),
        );
    }
}

fn short(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s!(s)
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}

fn no_data(ui: &mut egui::Ui, height: f32) {
    let (resp, painter) = Plot::allocate(ui, height);
    painter.text(
        resp.rect.center(),
        Align2::CENTER_CENTER,
        "No data for the current filters",
        FontId::proportional(13.0),
        ui.visuals().weak_text_color(),
    );
}

/// Colored squares with labels, wrapping.
pub fn legend(ui: &mut egui::Ui, items: &[(String, Color32)]) {
    ui.horizontal_wrapped(|ui| {
        for (label, color) in items {
            let (resp, painter) = ui.allocate_painter(Vec2::splat(10.0), Sense::hover());
            painter.rect_filled(resp.rect, 2.0, *color);
            ui.label(label.as_str());
            ui.add_space(6.0);
        }
    });
}

/* ---------------- Charts ---------------- */

/// In-stock (bottom) and not-in-stock (top) counts per category.
pub fn stacked_bars(ui: &mut egui::Ui, data: &[StockCount], height: f32) {
    if data.is_empty() { return no_data(ui, height); }

    let y_max = data.iter().map(|d| (d.in_stock + d.out_of_stock) as f64).fold(0.0, f64::max);
    let (resp, painter) = Plot::allocate(ui, height);
    let plot = Plot::new(resp.rect, y_max);
    plot.axes(&painter, ui, |v| format!("{v:.0}"));

    for (i, d) in data.iter().enumerate() {
        let (l, r) = plot.slot(i, data.len());
        let pad = (r - l) * 0.2;
        let (l, r) = (l + pad, r - pad);
        let base = plot.y(0.0);
        let mid = plot.y(d.in_stock as f64);
        let top = plot.y((d.in_stock + d.out_of_stock) as f64);
        painter.rect_filled(Rect::from_x_y_ranges(l..=r, mid..=base), 0.0, IN_STOCK);
        painter.rect_filled(Rect::from_x_y_ranges(l..=r, top..=mid), 0.0, NOT_IN_STOCK);
        plot.x_label(&painter, ui, (l + r) / 2.0, &d.category);
    }

    legend(ui, &[(s!("In stock"), IN_STOCK), (s!("Not in stock"), NOT_IN_STOCK)]);
}

/// Pie with "12.3%" inside each slice, starting at 12 o'clock, counter-clockwise.
pub fn pie(ui: &mut egui::Ui, data: &[CategoryShare], color_of: impl Fn(&str) -> Color32, height: f32) {
    if data.is_empty() { return no_data(ui, height); }

    let (resp, painter) = Plot::allocate(ui, height);
    let center = resp.rect.center();
    let radius = (resp.rect.height().min(resp.rect.width()) * 0.5 - 24.0).max(20.0);
    let font = FontId::proportional(11.0);
    let text_color = ui.visuals().text_color();

    let mut start = -std::f32::consts::FRAC_PI_2;
    for d in data {
        let sweep = (d.percent / 100.0) as f32 * std::f32::consts::TAU;
        let color = color_of(&d.category);

        // Thin triangles so every piece stays convex.
        let steps = ((sweep / 0.05).ceil() as usize).max(1);
        for k in 0..steps {
            let a0 = start - sweep * k as f32 / steps as f32;
            let a1 = start - sweep * (k + 1) as f32 / steps as f32;
            let p0 = center + radius * Vec2::angled(a0);
            let p1 = center + radius * Vec2::angled(a1);
            painter.add(Shape::convex_polygon(vec![center, p0, p1], color, Stroke::NONE));
        }

        let mid = start - sweep / 2.0;
        painter.text(center + radius * 0.62 * Vec2::angled(mid), Align2::CENTER_CENTER, format!("{:.1}%", d.percent), font.clone(), Color32::WHITE);
        painter.text(center + (radius + 12.0) * Vec2::angled(mid), Align2::CENTER_CENTER, short(&d.category, 18), font.clone(), text_color);
        start -= sweep;
    }
}

/// Box-and-whisker per category; outliers as open circles.
pub fn box_plot(ui: &mut egui::Ui, data: &[PriceBox], color_of: impl Fn(&str) -> Color32, height: f32) {
    if data.is_empty() { return no_data(ui, height); }

    let y_max = data.iter().map(|b| b.stats.max).fold(0.0, f64::max);
    let (resp, painter) = Plot::allocate(ui, height);
    let plot = Plot::new(resp.rect, y_max);
    plot.axes(&painter, ui, |v| format!("£{v:.0}"));
    let line = Stroke::new(1.2, ui.visuals().text_color());

    for (i, b) in data.iter().enumerate() {
        let (l, r) = plot.slot(i, data.len());
        let cx = (l + r) / 2.0;
        let half = ((r - l) * 0.3).min(40.0);
        let s = &b.stats;

        painter.line_segment([Pos2::new(cx, plot.y(s.lower_whisker)), Pos2::new(cx, plot.y(s.q1))], line);
        painter.line_segment([Pos2::new(cx, plot.y(s.q3)), Pos2::new(cx, plot.y(s.upper_whisker))], line);
        for w in [s.lower_whisker, s.upper_whisker] {
            painter.line_segment([Pos2::new(cx - half / 2.0, plot.y(w)), Pos2::new(cx + half / 2.0, plot.y(w))], line);
        }

        let body = Rect::from_x_y_ranges(cx - half..=cx + half, plot.y(s.q3)..=plot.y(s.q1));
        painter.rect_filled(body, 2.0, color_of(&b.category).gamma_multiply(0.7));
        painter.rect_stroke(body, 2.0, line, StrokeKind::Inside);
        painter.line_segment([Pos2::new(cx - half, plot.y(s.median)), Pos2::new(cx + half, plot.y(s.median))], Stroke::new(2.0, ui.visuals().text_color()));

        for &o in &s.outliers {
            painter.circle_stroke(Pos2::new(cx, plot.y(o)), 3.0, line);
        }
        plot.x_label(&painter, ui, cx, &b.category);
    }
}

/// Price against numeric rating, one dot per book.
pub fn scatter(ui: &mut egui::Ui, data: &[ScatterPoint], color_of: impl Fn(&str) -> Color32, height: f32) {
    if data.is_empty() { return no_data(ui, height); }

    let y_max = data.iter().map(|p| p.price).fold(0.0, f64::max);
    let (resp, painter) = Plot::allocate(ui, height);
    let plot = Plot::new(resp.rect, y_max);
    plot.axes(&painter, ui, |v| format!("£{v:.0}"));

    // Ratings 1..=5 sit in five equal slots.
    let x_of = |rating: u8| {
        let (l, r) = plot.slot(usize::from(rating.clamp(1, 5)) - 1, 5);
        (l + r) / 2.0
    };
    for rating in 1..=5u8 {
        plot.x_label(&painter, ui, x_of(rating), &rating.to_string());
    }

    let hover = resp.hover_pos();
    let mut nearest: Option<(f32, &ScatterPoint, Pos2)> = None;
    for p in data {
        let pos = Pos2::new(x_of(p.rating), plot.y(p.price));
        painter.circle_filled(pos, 3.5, color_of(&p.category).gamma_multiply(0.8));
        if let Some(h) = hover {
            let d = h.distance(pos);
            if d < 8.0 && nearest.is_none_or(|(best, _, _)| d < best) {
                nearest = Some((d, p, pos));
            }
        }
    }
    if let Some((_, p, pos)) = nearest {
        painter.text(
            pos + Vec2::new(6.0, -6.0),
            Align2::LEFT_BOTTOM,
            format!("{} · £{:.2} · {}★", p.category, p.price, p.rating),
            FontId::proportional(11.0),
            ui.visuals().strong_text_color(),
        );
    }
}

/// Mean price per rating.
pub fn mean_bars(ui: &mut egui::Ui, data: &[RatingMean], height: f32) {
    if data.is_empty() { return no_data(ui, height); }

    let y_max = data.iter().map(|m| m.mean_price).fold(0.0, f64::max);
    let (resp, painter) = Plot::allocate(ui, height);
    let plot = Plot::new(resp.rect, y_max);
    plot.axes(&painter, ui, |v| format!("£{v:.0}"));
    let font = FontId::proportional(10.0);

    for (i, m) in data.iter().enumerate() {
        let (l, r) = plot.slot(i, data.len());
        let pad = (r - l) * 0.15;
        let bar = Rect::from_x_y_ranges(l + pad..=r - pad, plot.y(m.mean_price)..=plot.y(0.0));
        painter.rect_filled(bar, 0.0, MEAN_BAR);
        painter.text(bar.center_top() - Vec2::new(0.0, 2.0), Align2::CENTER_BOTTOM, format!("£{:.2}", m.mean_price), font.clone(), ui.visuals().text_color());
        plot.x_label(&painter, ui, (l + r) / 2.0, &m.rating.to_string());
    }
}

/// Rating on x, one bar per category inside each rating group, y = percent
/// of that category's own books.
pub fn grouped_share(ui: &mut egui::Ui, data: &[RatingShare], categories: &[String], height: f32) {
    if data.is_empty() { return no_data(ui, height); }

    let ratings: Vec<u8> = {
        let mut r: Vec<u8> = data.iter().map(|s| s.rating).collect();
        r.sort_unstable();
        r.dedup();
        r
    };
    let y_max = data.iter().map(|s| s.percent).fold(0.0, f64::max);
    let (resp, painter) = Plot::allocate(ui, height);
    let plot = Plot::new(resp.rect, y_max);
    plot.axes(&painter, ui, |v| format!("{v:.0}%"));

    let ncat = categories.len().max(1);
    for (gi, rating) in ratings.iter().enumerate() {
        let (l, r) = plot.slot(gi, ratings.len());
        // bargap 0.15 between groups
        let gap = (r - l) * 0.075;
        let (gl, gr) = (l + gap, r - gap);
        let w = (gr - gl) / ncat as f32;
        for (ci, cat) in categories.iter().enumerate() {
            let Some(s) = data.iter().find(|s| s.rating == *rating && &s.category == cat) else { continue };
            let x0 = gl + w * ci as f32;
            painter.rect_filled(Rect::from_x_y_ranges(x0..=x0 + w, plot.y(s.percent)..=plot.y(0.0)), 0.0, pink_color(ci));
        }
        plot.x_label(&painter, ui, (l + r) / 2.0, &rating.to_string());
    }

    let items: Vec<(String, Color32)> = categories.iter().enumerate().map(|(i, c)| (c.clone(), pink_color(i))).collect();
    legend(ui, &items);
}
