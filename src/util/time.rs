/// Seconds since the UNIX epoch, used to stamp layouts.
#[cfg(not(target_arch = "wasm32"))]
pub fn timestamp_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Seconds since page load. The browser has no reliable wall clock for
/// this purpose, but the stamps only need to order layouts.
#[cfg(target_arch = "wasm32")]
pub fn timestamp_secs() -> u64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| (perf.now() / 1000.0) as u64)
        .unwrap_or(0)
}
