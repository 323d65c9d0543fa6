use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use resource_db::data::model::{COL_DESCRIPTION, COL_PHONE, COL_RESOURCE, COL_WEBSITE};

use super::panels::tag_chip;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 56.0;

// ---------------------------------------------------------------------------
// Resource table (central panel)
// ---------------------------------------------------------------------------

/// Render the current page of resources.
pub fn resource_table(ui: &mut Ui, state: &mut AppState) {
    let Some(result) = &state.result else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a resource file  (File → Open…)");
        });
        return;
    };

    if result.page.items.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No resources match the current filters.");
        });
        return;
    }

    let schema = &result.schema;
    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(220.0).at_least(120.0))
        .column(Column::remainder().at_least(200.0))
        .column(Column::initial(240.0).at_least(120.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("Resource");
            });
            header.col(|ui| {
                ui.strong("Resource Description");
            });
            header.col(|ui| {
                ui.strong("Keywords");
            });
        })
        .body(|mut body| {
            for record in &result.page.items {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        let name = record.get(schema, COL_RESOURCE);
                        let website = record.get(schema, COL_WEBSITE);
                        if website.is_empty() {
                            ui.label(name);
                        } else {
                            ui.hyperlink_to(name, website);
                        }
                    });
                    row.col(|ui| {
                        ui.vertical(|ui: &mut Ui| {
                            let phone = record.get(schema, COL_PHONE);
                            if !phone.is_empty() {
                                ui.label(RichText::new(format!("☎ {phone}")).strong());
                            }
                            ui.label(record.get(schema, COL_DESCRIPTION));
                        });
                    });
                    row.col(|ui| {
                        ui.horizontal_wrapped(|ui: &mut Ui| {
                            for tag in record.tags() {
                                if tag_chip(ui, tag, state.is_selected(tag), &state.tag_colors)
                                    .clicked()
                                {
                                    clicked = Some(tag.clone());
                                }
                            }
                        });
                    });
                });
            }
        });

    if let Some(tag) = clicked {
        state.toggle_tag(&tag);
    }
}
