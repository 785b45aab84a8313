// File: src/persistence.rs
use crate::core::oracle::OtoIndex;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Caches a built oto index so a voicebank need not be re-scanned.
/// Written to a temp file in the same directory, then renamed into place.
pub fn save_index(index: &OtoIndex, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, index)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(aliases = index.len(), "saved oto index to {}", path.display());
    Ok(())
}

pub fn load_index(path: &Path) -> Result<OtoIndex> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let index: OtoIndex = bincode::deserialize_from(reader)?;
    info!(aliases = index.len(), "loaded oto index from {}", path.display());
    Ok(index)
}
