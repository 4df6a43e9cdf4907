//! Persistence backends for record collections
//!
//! A backend loads and saves a whole collection at once. Repositories hold a
//! boxed backend so the JSON files can be swapped for memory in tests.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_json_or_init, write_json_atomic};

/// Wholesale load/save of one record collection
pub trait Backend<T> {
    /// Load the full collection
    fn load(&self) -> ExpenseResult<Vec<T>>;

    /// Replace the stored collection with `records`
    fn save(&self, records: &[T]) -> ExpenseResult<()>;
}

/// Collection stored as a pretty-printed JSON list in a single file
pub struct JsonFileBackend<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileBackend<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<T> Backend<T> for JsonFileBackend<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> ExpenseResult<Vec<T>> {
        read_json_or_init(&self.path)
    }

    fn save(&self, records: &[T]) -> ExpenseResult<()> {
        write_json_atomic(&self.path, records)
    }
}

/// In-memory backend
///
/// Clones share state, so a test can keep a handle and inspect what the
/// repository saved.
pub struct MemoryBackend<T> {
    records: Rc<RefCell<Vec<T>>>,
    save_count: Rc<Cell<usize>>,
    fail_saves: bool,
}

impl<T: Clone> MemoryBackend<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Backend pre-populated as if loaded from disk
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Rc::new(RefCell::new(records)),
            save_count: Rc::new(Cell::new(0)),
            fail_saves: false,
        }
    }

    /// Backend whose saves always fail
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    /// Records as of the last successful save
    pub fn records(&self) -> Vec<T> {
        self.records.borrow().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl<T: Clone> Default for MemoryBackend<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MemoryBackend<T> {
    fn clone(&self) -> Self {
        Self {
            records: Rc::clone(&self.records),
            save_count: Rc::clone(&self.save_count),
            fail_saves: self.fail_saves,
        }
    }
}

impl<T: Clone> Backend<T> for MemoryBackend<T> {
    fn load(&self) -> ExpenseResult<Vec<T>> {
        Ok(self.records())
    }

    fn save(&self, records: &[T]) -> ExpenseResult<()> {
        if self.fail_saves {
            return Err(ExpenseError::Storage("save rejected by memory backend".into()));
        }
        *self.records.borrow_mut() = records.to_vec();
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }
}
