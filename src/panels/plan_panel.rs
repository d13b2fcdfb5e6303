use crate::app::PlanApp;
use crate::legend::{self, LegendGroup};
use crate::model::Layout;

pub fn plan_panel(app: &mut PlanApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading("Your floor plan");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬇ Download").clicked() {
                    app.request_export(ui.ctx());
                }
                if ui.button("➕").on_hover_text("Zoom in").clicked() {
                    app.zoom_in(ui.ctx());
                }
                if ui.button("↺").on_hover_text("Reset view").clicked() {
                    app.reset_view(ui.ctx());
                }
                if ui.button("➖").on_hover_text("Zoom out").clicked() {
                    app.zoom_out(ui.ctx());
                }
            });
        });
        ui.separator();

        if app.is_generating() {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(32.0));
                ui.add_space(8.0);
                ui.label("AI is generating the floor plan…");
            });
        } else if let Some(layout) = app.session.layout().cloned() {
            canvas_and_legend(app, ui, &layout);
        } else {
            empty_state(ui);
        }
    });
}

fn canvas_and_legend(app: &mut PlanApp, ui: &mut egui::Ui, layout: &Layout) {
    // Leave room for the legend grid under the canvas.
    let legend_height = 140.0;
    let desired = egui::vec2(
        ui.available_width(),
        (ui.available_height() - legend_height).max(240.0),
    );
    let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
    let canvas = response.rect;
    app.canvas_rect = Some(canvas);

    app.renderer
        .render(&painter, canvas, layout, app.session.view());

    ui.separator();
    legend_grid(ui, &legend::summarize(layout));
}

fn legend_grid(ui: &mut egui::Ui, groups: &[LegendGroup; 4]) {
    ui.columns(4, |columns| {
        for (column, group) in columns.iter_mut().zip(groups.iter()) {
            column.strong(group.title);
            for entry in &group.entries {
                column.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, entry.style.fill);
                    ui.painter()
                        .rect_stroke(rect, 2.0, egui::Stroke::new(1.0, entry.style.border));
                    ui.label(&entry.name);
                });
            }
        }
    });
}

fn empty_state(ui: &mut egui::Ui) {
    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.heading("Your floor plan will appear here");
        ui.add_space(4.0);
        ui.label("Describe your home on the left and the plan is drawn instantly.");
    });
}
