//! Filesystem-backed JSON persistence for the wizard snapshot.
//!
//! Loading is forgiving: missing, corrupt, or partially-shaped data falls
//! back to field defaults so a session always starts with a usable state.
//! User-initiated imports are sanitized the same way but reject unparsable
//! input explicitly.

mod sanitize;

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use lifewheel_core::{CoreError, SnapshotStorage};
use lifewheel_domain::WizardState;

pub use sanitize::sanitize_snapshot;

/// Snapshot file name. The schema version is part of the name; shape
/// changes bump it so older data is never loaded into a newer layout.
pub const SNAPSHOT_FILE: &str = "lifewheel-v1.json";
const TMP_SUFFIX: &str = "tmp";

/// Stores the single wizard snapshot as pretty-printed JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStorage {
    snapshot_path: PathBuf,
}

impl JsonSnapshotStorage {
    /// Creates a storage rooted at `data_dir`, creating the directory as
    /// needed.
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            snapshot_path: data_dir.join(SNAPSHOT_FILE),
        })
    }

    /// Uses an explicit snapshot file path.
    pub fn at_path(snapshot_path: PathBuf) -> Self {
        Self { snapshot_path }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }
}

impl SnapshotStorage for JsonSnapshotStorage {
    fn load(&self) -> WizardState {
        match fs::read_to_string(&self.snapshot_path) {
            Ok(data) => sanitize_snapshot(&data).unwrap_or_default(),
            Err(_) => WizardState::default(),
        }
    }

    fn save(&self, state: &WizardState) -> Result<(), CoreError> {
        write_snapshot(state, &self.snapshot_path)
    }

    fn export_to_path(&self, state: &WizardState, path: &Path) -> Result<(), CoreError> {
        write_snapshot(state, path)
    }

    fn import_from_path(&self, path: &Path) -> Result<WizardState, CoreError> {
        let data = fs::read_to_string(path)?;
        sanitize_snapshot(&data).ok_or(CoreError::InvalidSnapshot)
    }

    fn clear(&self) -> Result<(), CoreError> {
        if self.snapshot_path.exists() {
            fs::remove_file(&self.snapshot_path)?;
        }
        Ok(())
    }
}

/// Serializes to a sibling temp file first so a failed write never
/// clobbers the existing snapshot.
fn write_snapshot(state: &WizardState, path: &Path) -> Result<(), CoreError> {
    let json =
        serde_json::to_string_pretty(state).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
