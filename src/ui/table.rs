use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use chem_dash::data::model::Dataset;

use crate::color::ACCENT;

/// Raw view of the loaded rows, one column per header.
pub fn data_table(ui: &mut Ui, dataset: &Dataset) {
    // Ragged rows may be wider than the header row.
    let n_cols = dataset
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(dataset.headers.len()))
        .max()
        .unwrap_or(0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), n_cols)
        .header(24.0, |mut header| {
            for col in 0..n_cols {
                let title = dataset.headers.get(col).map(String::as_str).unwrap_or("");
                header.col(|ui: &mut Ui| {
                    ui.label(RichText::new(title).strong().color(ACCENT));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, dataset.len(), |mut row| {
                let i = row.index();
                for col in 0..n_cols {
                    row.col(|ui: &mut Ui| {
                        ui.label(dataset.cell(i, col).unwrap_or(""));
                    });
                }
            });
        });
}
