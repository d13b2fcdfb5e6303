use std::sync::Arc;

use crate::export;
use crate::generator::{DesignService, GenerationQueue};
use crate::model::SourceKind;
use crate::panels;
use crate::render::Renderer;
use crate::view::Session;

/// Which input tab is active in the left panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum InputMode {
    #[default]
    Text,
    Code,
}

/// User-visible generation status, shown under the input panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Generating,
    Failed(String),
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PlanApp {
    pub(crate) session: Session,
    pub(crate) input_mode: InputMode,
    pub(crate) text_input: String,
    pub(crate) code_input: String,
    /// Last submitted description, echoed back next to the input.
    pub(crate) description: Option<String>,

    // Runtime-only state; rebuilt on startup.
    #[serde(skip)]
    pub(crate) queue: GenerationQueue,
    #[serde(skip)]
    pub(crate) status: Status,
    #[serde(skip)]
    pub(crate) renderer: Renderer,
    /// Canvas rect captured when an export was requested, consumed when
    /// the screenshot event arrives.
    #[serde(skip)]
    pending_export: Option<egui::Rect>,
    #[serde(skip)]
    pub(crate) canvas_rect: Option<egui::Rect>,
}

impl Default for PlanApp {
    fn default() -> Self {
        Self {
            session: Session::default(),
            input_mode: InputMode::default(),
            text_input: String::new(),
            code_input: String::new(),
            description: None,
            queue: GenerationQueue::new(Arc::new(DesignService::default())),
            status: Status::default(),
            renderer: Renderer::new(),
            pending_export: None,
            canvas_rect: None,
        }
    }
}

impl PlanApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn is_generating(&self) -> bool {
        self.queue.is_pending()
    }

    /// Hands an input payload to the generation queue. A request already in
    /// flight is replaced; only the newest one can land.
    pub fn submit(&mut self, payload: String, source: SourceKind) {
        if source == SourceKind::Text {
            self.description = Some(payload.clone());
        }
        self.status = Status::Generating;
        let seq = self.queue.submit(payload, source);
        log::info!("submitted generation request {seq} ({source:?})");
    }

    pub fn zoom_in(&mut self, ctx: &egui::Context) {
        self.session.view_mut().zoom_in();
        ctx.request_repaint();
    }

    pub fn zoom_out(&mut self, ctx: &egui::Context) {
        self.session.view_mut().zoom_out();
        ctx.request_repaint();
    }

    pub fn reset_view(&mut self, ctx: &egui::Context) {
        self.session.view_mut().reset();
        ctx.request_repaint();
    }

    /// Kicks off a PNG export of the current canvas. Error-free even when
    /// nothing has been drawn yet.
    pub fn request_export(&mut self, ctx: &egui::Context) {
        let Some(canvas) = self.canvas_rect else {
            log::info!("export requested before the canvas was drawn; skipping");
            return;
        };
        self.pending_export = Some(canvas);
        export::request_screenshot(ctx);
    }

    /// Applies the outcome of the latest generation request, if any. A
    /// failure leaves the current layout and view untouched.
    fn poll_generation(&mut self, ctx: &egui::Context) {
        let Some(result) = self.queue.poll() else {
            return;
        };
        match result {
            Ok(layout) => {
                log::info!(
                    "generated layout with {} rooms from {:?} input",
                    layout.rooms().len(),
                    layout.source()
                );
                self.session.replace_layout(layout);
                self.status = Status::Idle;
            }
            Err(err) => {
                log::warn!("generation failed: {err}");
                self.status = Status::Failed(err.to_string());
            }
        }
        ctx.request_repaint();
    }

    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        let image = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = image else {
            return;
        };
        let Some(canvas) = self.pending_export.take() else {
            return;
        };
        if let Err(err) = export::save_png(&image, canvas, ctx.pixels_per_point()) {
            log::error!("floor plan export failed: {err}");
            self.status = Status::Failed(format!("Export failed: {err}"));
        }
    }
}

impl eframe::App for PlanApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_generation(ctx);
        self.handle_screenshot_events(ctx);

        panels::input_panel(self, ctx);
        panels::plan_panel(self, ctx);

        if self.is_generating() {
            // Keep polling while the background request runs.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
