//! A single collection persisted as one JSON document
//!
//! Loading reads the whole file; saving replaces it. A missing file reads as
//! the collection's empty value. Saves go to `<name>.json.tmp` first and are
//! renamed over the target, so a failed save leaves the old file in place.

use std::borrow::Borrow;
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

/// Whole-document repository for a collection of type `T`
#[derive(Debug)]
pub struct JsonFile<T> {
    path: PathBuf,
    _collection: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _collection: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection; `T::default()` when the file does not exist
    pub fn load(&self) -> ExpenseResult<T> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(self.failure("read", e)),
        };

        serde_json::from_slice(&contents).map_err(|e| self.failure("parse", e))
    }

    /// Replace the file with `collection`, indented by two spaces
    ///
    /// Accepts any borrowed form of `T`, so a `Vec` collection saves from a slice.
    pub fn save<D>(&self, collection: &D) -> ExpenseResult<()>
    where
        T: Borrow<D>,
        D: Serialize + ?Sized,
    {
        let document =
            serde_json::to_vec_pretty(collection).map_err(|e| self.failure("encode", e))?;

        let staging = self.path.with_extension("json.tmp");
        let written = fs::File::create(&staging).and_then(|mut file| {
            file.write_all(&document)?;
            file.sync_all()
        });

        if let Err(e) = written.and_then(|()| fs::rename(&staging, &self.path)) {
            let _ = fs::remove_file(&staging);
            return Err(self.failure("write", e));
        }

        Ok(())
    }

    fn failure(&self, action: &str, err: impl std::fmt::Display) -> ExpenseError {
        ExpenseError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}
