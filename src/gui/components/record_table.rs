// src/gui/components/record_table.rs
//
// Book tables over dataset row indices. Purely a view.

use eframe::egui::{self, Align, Layout};
use egui_extras::{Column, TableBuilder};

use crate::{data::{category_of, Dataset}, record::BookRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Col {
    Title,
    Category,
    Price,
    Availability,
    Rating,
}

impl Col {
    pub const ALL: &'static [Col] = &[Col::Title, Col::Category, Col::Price, Col::Availability, Col::Rating];

    fn title(self) -> &'static str {
        match self {
            Col::Title => "Title",
            Col::Category => "Category",
            Col::Price => "Price",
            Col::Availability => "Availability",
            Col::Rating => "Rating",
        }
    }

    fn width(self) -> f32 {
        match self {
            Col::Title => 320.0,
            Col::Category => 120.0,
            Col::Price => 70.0,
            Col::Availability => 100.0,
            Col::Rating => 60.0,
        }
    }

    fn cell(self, r: &BookRecord) -> String {
        match self {
            Col::Title => r.title.clone(),
            Col::Category => s!(category_of(r)),
            Col::Price => format!("£{:.2}", r.price),
            Col::Availability => r.availability.clone(),
            Col::Rating => s!(r.rating.label()),
        }
    }
}

/// `max_height`: `None` sizes the table to its rows (no inner scroll).
pub fn draw(ui: &mut egui::Ui, id: &str, ds: &Dataset, rows: &[usize], cols: &[Col], max_height: Option<f32>) {
    if rows.is_empty() {
        ui.weak("No books for the current filters");
        return;
    }
    let recs = ds.records();

    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .vscroll(max_height.is_some());
        if let Some(h) = max_height {
            table = table.max_scroll_height(h);
        }
        for (i, c) in cols.iter().enumerate() {
            let col = if i + 1 == cols.len() {
                Column::remainder().at_least(c.width() * 0.5)
            } else {
                Column::initial(c.width()).resizable(true).clip(true)
            };
            table = table.column(col);
        }

        table
            .header(22.0, |mut header| {
                for c in cols {
                    header.col(|ui| {
                        ui.strong(c.title());
                    });
                }
            })
            .body(|body| {
                body.rows(20.0, rows.len(), |mut row| {
                    let Some(r) = recs.get(rows[row.index()]) else { return };
                    for c in cols {
                        row.col(|ui| {
                            ui.label(c.cell(r));
                        });
                    }
                });
            });
    });
}
