//! Store doubles for exercising the storage-error paths.

use std::sync::atomic::{AtomicUsize, Ordering};

use store::{Contact, ContactStore, StoreError};

pub const DB_ERROR: &str = "Database error";

pub fn sample_contact(id: &str) -> Contact {
    Contact {
        id: id.to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@example.com".to_string(),
        phone_number: "1234567890".to_string(),
        age: 30,
    }
}

/// A store whose every step is scripted. `find` succeeds with `row` on its first
/// `find_ok_calls` calls and fails afterwards.
pub struct ScriptedStore {
    pub row: Option<Contact>,
    pub find_ok_calls: usize,
    pub fail_all: bool,
    pub fail_insert: bool,
    pub fail_write: bool,
    pub affected: u64,
    find_calls: AtomicUsize,
}

impl Default for ScriptedStore {
    fn default() -> Self {
        Self {
            row: None,
            find_ok_calls: usize::MAX,
            fail_all: false,
            fail_insert: false,
            fail_write: false,
            affected: 1,
            find_calls: AtomicUsize::new(0),
        }
    }
}

impl ScriptedStore {
    /// Existing row that is found by every lookup.
    pub fn with_row(id: &str) -> Self {
        Self {
            row: Some(sample_contact(id)),
            ..Self::default()
        }
    }

    /// Every lookup fails.
    pub fn failing_reads() -> Self {
        Self {
            find_ok_calls: 0,
            fail_all: true,
            ..Self::default()
        }
    }

    pub fn find_ok_calls(mut self, n: usize) -> Self {
        self.find_ok_calls = n;
        self
    }

    pub fn fail_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    pub fn fail_write(mut self) -> Self {
        self.fail_write = true;
        self
    }

    pub fn affected(mut self, n: u64) -> Self {
        self.affected = n;
        self
    }
}

impl ContactStore for ScriptedStore {
    async fn all(&self) -> Result<Vec<Contact>, StoreError> {
        if self.fail_all {
            return Err(StoreError::backend(DB_ERROR));
        }
        Ok(self.row.iter().cloned().collect())
    }

    async fn find(&self, id: &str) -> Result<Option<Contact>, StoreError> {
        let call = self.find_calls.fetch_add(1, Ordering::SeqCst);
        if call >= self.find_ok_calls {
            return Err(StoreError::backend(DB_ERROR));
        }
        Ok(self.row.clone().map(|row| Contact {
            id: id.to_string(),
            ..row
        }))
    }

    async fn insert(&self, _contact: &Contact) -> Result<(), StoreError> {
        if self.fail_insert {
            return Err(StoreError::backend(DB_ERROR));
        }
        Ok(())
    }

    async fn update(&self, _contact: &Contact) -> Result<u64, StoreError> {
        if self.fail_write {
            return Err(StoreError::backend(DB_ERROR));
        }
        Ok(self.affected)
    }

    async fn delete(&self, _id: &str) -> Result<u64, StoreError> {
        if self.fail_write {
            return Err(StoreError::backend(DB_ERROR));
        }
        Ok(self.affected)
    }
}
