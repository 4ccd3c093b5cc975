use crate::errors::AppResult;
use crate::export::{ExportFormat, fs_utils, json_csv};
use crate::models::entry::Entry;
use crate::ui::adapter::UiAdapter;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    pub fn apply(
        entries: &[Entry],
        format: &ExportFormat,
        file: &str,
        force: bool,
        ui: &dyn UiAdapter,
    ) -> AppResult<()> {
        if entries.is_empty() {
            warning("No entries recorded, nothing to export.");
            return Ok(());
        }

        let path = Path::new(file);
        fs_utils::ensure_writable(path, force, ui)?;

        match format {
            ExportFormat::Csv => json_csv::export_csv(entries, path),
            ExportFormat::Json => json_csv::export_json(entries, path),
        }
    }
}
