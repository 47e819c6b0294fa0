use std::path::Path;

use lifewheel_domain::WizardState;

use crate::CoreError;

/// Abstraction over persistence backends for the single wizard snapshot.
pub trait SnapshotStorage: Send + Sync {
    /// Returns the persisted snapshot, sanitized; missing or corrupt data
    /// yields the default initial state rather than an error.
    fn load(&self) -> WizardState;

    /// Replaces the persisted snapshot. A failed write must leave the
    /// previous snapshot intact.
    fn save(&self, state: &WizardState) -> Result<(), CoreError>;

    /// Writes a user-facing snapshot file to an arbitrary path.
    fn export_to_path(&self, state: &WizardState, path: &Path) -> Result<(), CoreError>;

    /// Reads and sanitizes a user-supplied snapshot file. Unparsable input
    /// is rejected with [`CoreError::InvalidSnapshot`] so the UI can inform
    /// the user; the current state is never touched on failure.
    fn import_from_path(&self, path: &Path) -> Result<WizardState, CoreError>;

    /// Removes the persisted snapshot.
    fn clear(&self) -> Result<(), CoreError>;
}
