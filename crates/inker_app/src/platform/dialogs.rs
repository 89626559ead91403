use std::path::PathBuf;

/// Synchronous file picker, filtered to the supported input format.
pub fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG image", &["png"])
        .pick_file()
}

/// Blocking error modal; returns once the user dismisses it.
pub fn alert(message: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Inker")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
