use crate::errors::{AppError, AppResult};
use crate::ui::adapter::UiAdapter;
use crate::ui::messages::info;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → ask the user.
pub(crate) fn ensure_writable(path: &Path, force: bool, ui: &dyn UiAdapter) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if ui.confirm(&format!(
        "The file '{}' already exists. Overwrite?",
        path.display()
    )) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}
