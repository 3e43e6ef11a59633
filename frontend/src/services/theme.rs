use shared::Theme;

/// Apply a theme by setting `data-theme` on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
            log::debug!("Could not apply theme {}: {:?}", theme, err);
        }
    }
}

/// Whether the device asks for a dark colour scheme
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
