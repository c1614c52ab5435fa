use crate::error::Result;
use crate::models::TemperatureDataset;
use std::fs::Permissions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Mode for a freshly created output file, before the umask
#[cfg(unix)]
const DEFAULT_OUTPUT_MODE: u32 = 0o644;

pub struct JsonWriter;

impl JsonWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the dataset as indented JSON, replacing any existing file.
    ///
    /// The document is staged in a temporary file next to `path` and renamed into place,
    /// so a failed write leaves no partial output. An existing file keeps its permissions.
    pub fn write_dataset(&self, dataset: &TemperatureDataset, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

        let mut builder = tempfile::Builder::new();
        if let Some(permissions) = default_permissions() {
            builder.permissions(permissions);
        }
        let mut staged = builder.tempfile_in(parent)?;

        if let Some(permissions) = existing {
            staged.as_file().set_permissions(permissions)?;
        }

        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            self.write_dataset_to(dataset, &mut writer)?;
            writer.flush()?;
        }
        staged.persist(path)?;

        debug!("Wrote {} entries to {}", dataset.entry_count(), path.display());
        Ok(())
    }

    pub fn write_dataset_to<W: Write>(&self, dataset: &TemperatureDataset, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &dataset.to_value())?;
        Ok(())
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(DEFAULT_OUTPUT_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
