use eframe::egui::{self, Color32, Response, RichText, ScrollArea, Ui};

use crate::color::TagColors;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Tag chip – shared by the tag panel and the table
// ---------------------------------------------------------------------------

/// A clickable tag label, highlighted when selected.
pub fn tag_chip(ui: &mut Ui, tag: &str, selected: bool, colors: &TagColors) -> Response {
    let mut text = RichText::new(tag);
    if !selected {
        text = text.color(colors.color_for(tag));
    }
    ui.selectable_label(selected, text)
}

// ---------------------------------------------------------------------------
// Left side panel – tag vocabulary
// ---------------------------------------------------------------------------

/// Render the left tag panel.
pub fn tag_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Tags");
    ui.separator();

    let Some(result) = &state.result else {
        ui.label("No resources loaded.");
        return;
    };

    let mut clicked: Option<String> = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for tag in &result.all_tags {
                    if tag_chip(ui, tag, state.is_selected(tag), &state.tag_colors).clicked() {
                        clicked = Some(tag.clone());
                    }
                }
            });
        });

    if let Some(tag) = clicked {
        state.toggle_tag(&tag);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.refresh();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(result) = &state.result {
            ui.label(result.summary());
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Search row
// ---------------------------------------------------------------------------

pub fn search_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .hint_text("Search database...")
                .desired_width(320.0),
        );
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Search").clicked() || entered {
            state.submit_search();
        }
        if ui.button("× Reset Filters").clicked() {
            state.reset();
        }
    });
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

pub fn pagination(ui: &mut Ui, state: &mut AppState) {
    let Some(result) = &state.result else {
        return;
    };
    let links = result.links();
    if links.is_empty() {
        return;
    }

    let mut target: Option<usize> = None;
    ui.horizontal(|ui: &mut Ui| {
        if let Some(prev) = links.previous {
            if ui.button("<").on_hover_text("Go to previous page").clicked() {
                target = Some(prev);
            }
        }
        for &page in &links.pages {
            let current = page == links.current;
            if ui
                .selectable_label(current, page.to_string())
                .on_hover_text(format!("Go to page {page}"))
                .clicked()
                && !current
            {
                target = Some(page);
            }
        }
        if let Some(next) = links.next {
            if ui.button(">").on_hover_text("Go to next page").clicked() {
                target = Some(next);
            }
        }
        ui.separator();
        ui.label(format!(
            "Page {} of {}",
            result.page.page_number, result.page.total_pages
        ));
    });

    if let Some(page) = target {
        state.go_to_page(page);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open resource sheet")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.open_source(path);
    }
}
