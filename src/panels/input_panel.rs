use crate::app::{InputMode, PlanApp, Status};
use crate::model::SourceKind;

const EXAMPLE_2BHK: &str = r#"{
  "rooms": [
    {"name": "Living Room", "width": 200, "height": 150, "x": 50, "y": 50},
    {"name": "Kitchen", "width": 120, "height": 100, "x": 250, "y": 50},
    {"name": "Bedroom 1", "width": 140, "height": 120, "x": 50, "y": 200},
    {"name": "Bedroom 2", "width": 140, "height": 120, "x": 190, "y": 200},
    {"name": "Bathroom", "width": 80, "height": 80, "x": 370, "y": 50}
  ],
  "doors": [
    {"from": "Living Room", "to": "Kitchen"},
    {"from": "Living Room", "to": "Bedroom 1"}
  ],
  "windows": [
    {"room": "Living Room", "wall": "north", "size": 40},
    {"room": "Bedroom 1", "wall": "south", "size": 30}
  ]
}"#;

const EXAMPLE_STUDIO: &str = r#"{
  "rooms": [
    {"name": "Living Room", "width": 220, "height": 160},
    {"name": "Kitchen", "width": 120, "height": 160},
    {"name": "Bathroom", "width": 80, "height": 160}
  ],
  "doors": [
    {"from": "Living Room", "to": "Kitchen"},
    {"from": "Kitchen", "to": "Bathroom"}
  ]
}"#;

pub fn input_panel(app: &mut PlanApp, ctx: &egui::Context) {
    egui::SidePanel::left("input_panel")
        .default_width(340.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Describe your home");
            ui.separator();

            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.input_mode, InputMode::Text, "📝 Text");
                ui.selectable_value(&mut app.input_mode, InputMode::Code, "🖹 Code");
            });
            ui.separator();

            match app.input_mode {
                InputMode::Text => text_tab(app, ui),
                InputMode::Code => code_tab(app, ui),
            }

            if let Some(description) = app.description.clone() {
                ui.add_space(12.0);
                ui.group(|ui| {
                    ui.strong("Your description:");
                    ui.label(description);
                });
            }

            ui.add_space(12.0);
            status_line(&app.status, app.is_generating(), ui);
        });
}

fn text_tab(app: &mut PlanApp, ui: &mut egui::Ui) {
    ui.label("Describe the rooms you want and their rough sizes.");
    ui.add(
        egui::TextEdit::multiline(&mut app.text_input)
            .hint_text("Three bedrooms, two bathrooms, an open kitchen and a garden…")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );

    let ready = !app.text_input.trim().is_empty() && !app.is_generating();
    if ui
        .add_enabled(ready, egui::Button::new("Generate floor plan"))
        .clicked()
    {
        let payload = app.text_input.trim().to_owned();
        app.submit(payload, SourceKind::Text);
    }
}

fn code_tab(app: &mut PlanApp, ui: &mut egui::Ui) {
    ui.label("JSON floor plan specification");
    ui.horizontal(|ui| {
        if ui.small_button("Example: 2BHK").clicked() {
            app.code_input = EXAMPLE_2BHK.to_owned();
        }
        if ui.small_button("Example: Studio").clicked() {
            app.code_input = EXAMPLE_STUDIO.to_owned();
        }
    });

    ui.add(
        egui::TextEdit::multiline(&mut app.code_input)
            .code_editor()
            .desired_rows(14)
            .desired_width(f32::INFINITY),
    );

    // Live syntax hint, mirroring the generator's parse/schema split only
    // as far as syntax; schema problems surface after submit.
    if !app.code_input.trim().is_empty() {
        match serde_json::from_str::<serde_json::Value>(&app.code_input) {
            Ok(_) => {
                ui.colored_label(egui::Color32::from_rgb(0x15, 0x80, 0x3d), "Valid JSON ✔");
            }
            Err(err) => {
                ui.colored_label(
                    egui::Color32::from_rgb(0xb9, 0x1c, 0x1c),
                    format!("Invalid JSON: {err}"),
                );
            }
        }
    }

    let ready = !app.code_input.trim().is_empty() && !app.is_generating();
    if ui
        .add_enabled(ready, egui::Button::new("Build floor plan"))
        .clicked()
    {
        let payload = app.code_input.clone();
        app.submit(payload, SourceKind::Code);
    }
}

fn status_line(status: &Status, generating: bool, ui: &mut egui::Ui) {
    if generating {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new());
            ui.label("AI is generating the floor plan…");
        });
        return;
    }
    if let Status::Failed(message) = status {
        ui.colored_label(egui::Color32::from_rgb(0xb9, 0x1c, 0x1c), message);
    }
}
