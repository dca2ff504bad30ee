//! Durable storage slot for the cart's line items.
//!
//! The cart mirrors its in-memory state into one key-value slot after every
//! mutation. The slot holds a JSON array of line-item objects; an absent
//! slot means an empty cart, and a malformed payload is reported so the
//! store can discard it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use medibay_core::LineItem;

use crate::error::SlotError;

/// A durable key-value slot holding the serialized line-item sequence.
///
/// Implementations must make `save` all-or-nothing: after a successful call
/// the slot holds exactly the given items, and after a failed call it still
/// holds its previous payload.
pub trait CartSlot {
    /// Read the persisted item sequence.
    ///
    /// Returns `Ok(None)` if the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Malformed`] if a payload is present but is not a
    /// valid item sequence, or [`SlotError::Io`] if the read itself fails.
    fn load(&self) -> Result<Option<Vec<LineItem>>, SlotError>;

    /// Replace the persisted payload with the given items.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Serialize`] if the items cannot be serialized,
    /// or [`SlotError::Io`] if the write fails.
    fn save(&mut self, items: &[LineItem]) -> Result<(), SlotError>;

    /// Remove the slot entirely. Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::Io`] if the removal fails.
    fn clear(&mut self) -> Result<(), SlotError>;
}

// =============================================================================
// File-backed slot
// =============================================================================

/// File-backed slot: one JSON document on disk.
///
/// Writes go to a temporary file next to the target and are renamed into
/// place, so a crash mid-write leaves the previous payload intact. The
/// parent directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    /// Create a slot backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartSlot for JsonFileSlot {
    fn load(&self) -> Result<Option<Vec<LineItem>>, SlotError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SlotError::Io(e)),
        };

        let items = serde_json::from_slice(&bytes)
            .map_err(|e| SlotError::Malformed(e.to_string()))?;
        Ok(Some(items))
    }

    fn save(&mut self, items: &[LineItem]) -> Result<(), SlotError> {
        let payload = serde_json::to_vec(items).map_err(SlotError::Serialize)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SlotError::Io(e)),
        }
    }
}

// =============================================================================
// In-memory slot
// =============================================================================

/// In-memory slot for tests and headless embedding.
///
/// Holds the serialized payload in a byte buffer, exercising the same JSON
/// round-trip as the file-backed slot.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    payload: Option<Vec<u8>>,
}

impl MemorySlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a raw payload, valid or not.
    #[must_use]
    pub fn with_payload(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }

    /// Raw payload currently held, if any.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }
}

impl CartSlot for MemorySlot {
    fn load(&self) -> Result<Option<Vec<LineItem>>, SlotError> {
        match &self.payload {
            None => Ok(None),
            Some(bytes) => serde_json::from_slice(bytes)
                .map(Some)
                .map_err(|e| SlotError::Malformed(e.to_string())),
        }
    }

    fn save(&mut self, items: &[LineItem]) -> Result<(), SlotError> {
        self.payload = Some(serde_json::to_vec(items).map_err(SlotError::Serialize)?);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SlotError> {
        self.payload = None;
        Ok(())
    }
}
