//! Keyed JSON document collections
//!
//! A collection maps a document key to a `serde_json::Value`. Readers clone
//! documents out under the read lock; writers replace whole documents under
//! the write lock, so a reader never observes a partially written document.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::error::Error;

pub struct Collection {
    name: &'static str,
    documents: RwLock<HashMap<String, Value>>,
}

impl Collection {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            documents: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.documents.read().get(key).cloned()
    }

    /// Stores `document` only if `key` is free. Returns false when taken.
    pub fn insert_new(&self, key: &str, document: Value) -> bool {
        let mut documents = self.documents.write();
        if documents.contains_key(key) {
            return false;
        }
        documents.insert(key.to_string(), document);
        true
    }

    pub fn remove(&self, key: &str) -> bool {
        self.documents.write().remove(key).is_some()
    }

    /// Copies every document out of the collection.
    pub fn snapshot(&self) -> Vec<Value> {
        self.documents.read().values().cloned().collect()
    }

    /// Runs `f` with exclusive access for read-modify-write sequences.
    pub fn write<R>(&self, f: impl FnOnce(&mut HashMap<String, Value>) -> R) -> R {
        let mut documents = self.documents.write();
        f(&mut documents)
    }
}

pub fn to_document<T: Serialize>(item: &T) -> Result<Value, Box<dyn Error + Send + Sync>> {
    Ok(serde_json::to_value(item)?)
}

pub fn from_document<T: DeserializeOwned>(document: Value) -> Result<T, Box<dyn Error + Send + Sync>> {
    Ok(serde_json::from_value(document)?)
}
