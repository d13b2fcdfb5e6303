use thiserror::Error;

/// Fixed download name for exported plans.
pub const EXPORT_FILE_NAME: &str = "floor-plan.png";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("screenshot has no pixels for the canvas area")]
    EmptyCapture,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Asks the backend for a full-window capture; the result arrives as an
/// `egui::Event::Screenshot` on a later frame.
pub fn request_screenshot(ctx: &egui::Context) {
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
}

/// Crops a window capture down to the canvas rect and writes it out as
/// `floor-plan.png` next to the executable's working directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(
    screenshot: &egui::ColorImage,
    canvas: egui::Rect,
    pixels_per_point: f32,
) -> Result<(), ExportError> {
    let region = screenshot.region(&canvas, Some(pixels_per_point));
    let [width, height] = region.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCapture);
    }
    let buffer =
        image::RgbaImage::from_raw(width as u32, height as u32, region.as_raw().to_vec())
            .ok_or(ExportError::EmptyCapture)?;
    buffer.save(EXPORT_FILE_NAME)?;
    log::info!("saved floor plan to {EXPORT_FILE_NAME}");
    Ok(())
}

// The browser build has no filesystem to write to; a proper download
// anchor needs a blob URL, which stays with the web shell for now.
#[cfg(target_arch = "wasm32")]
pub fn save_png(
    _screenshot: &egui::ColorImage,
    _canvas: egui::Rect,
    _pixels_per_point: f32,
) -> Result<(), ExportError> {
    log::warn!("image export is not available in the browser build");
    Ok(())
}
