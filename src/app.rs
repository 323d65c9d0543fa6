use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ResourceDbApp {
    pub state: AppState,
}

impl ResourceDbApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ResourceDbApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + search row ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
            ui.separator();
            panels::search_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: pagination ----
        egui::TopBottomPanel::bottom("pagination").show(ctx, |ui| {
            panels::pagination(ui, &mut self.state);
        });

        // ---- Left side panel: tag vocabulary ----
        egui::SidePanel::left("tag_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::tag_panel(ui, &mut self.state);
            });

        // ---- Central panel: resource table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::resource_table(ui, &mut self.state);
        });
    }
}
