//! In-process [`Store`] backend.
//!
//! Mirrors the Redis behaviour the rest of the stack relies on, so room
//! logic can be exercised without a server. Data lives only as long as the
//! `MemoryStore` value; share it between handles with an `Arc`.

use std::collections::{HashMap, HashSet};

use tokio::sync::Mutex;

use crate::{Store, StoreError};

/// A value held under one key.
#[derive(Debug)]
enum Value {
    Set(HashSet<String>),
    List(Vec<Vec<u8>>),
}

/// A [`Store`] backed by a mutex-guarded map.
///
/// As in Redis, a key never holds an empty collection: removing the last
/// member of a set deletes the key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn wrong_type(key: &str) -> StoreError {
    StoreError::WrongType {
        key: key.to_string(),
    }
}

/// Resolves a possibly negative index against a list of `len` elements.
fn resolve_index(len: usize, index: isize) -> Option<usize> {
    let len = len as isize;
    let i = if index < 0 { len + index } else { index };
    (0..len).contains(&i).then_some(i as usize)
}

/// Resolves inclusive range bounds, clamping to the list. Returns `None`
/// when the range selects nothing.
fn resolve_range(len: usize, start: isize, stop: isize) -> Option<(usize, usize)> {
    let len = len as isize;
    let start = if start < 0 { (len + start).max(0) } else { start };
    let stop = if stop < 0 { len + stop } else { stop.min(len - 1) };
    if start >= len || start > stop {
        return None;
    }
    Some((start as usize, stop as usize))
}

impl Store for MemoryStore {
    async fn set_add(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut data = self.data.lock().await;
        match data
            .entry(key.to_string())
            .or_insert_with(|| Value::Set(HashSet::new()))
        {
            Value::Set(set) => Ok(set.insert(member.to_string())),
            Value::List(_) => Err(wrong_type(key)),
        }
    }

    async fn set_remove(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let mut data = self.data.lock().await;
        let (removed, now_empty) = match data.get_mut(key) {
            None => return Ok(false),
            Some(Value::List(_)) => return Err(wrong_type(key)),
            Some(Value::Set(set)) => (set.remove(member), set.is_empty()),
        };
        if now_empty {
            data.remove(key);
        }
        Ok(removed)
    }

    async fn set_members(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let data = self.data.lock().await;
        match data.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Set(set)) => Ok(set.iter().cloned().collect()),
            Some(Value::List(_)) => Err(wrong_type(key)),
        }
    }

    async fn set_is_member(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let data = self.data.lock().await;
        match data.get(key) {
            None => Ok(false),
            Some(Value::Set(set)) => Ok(set.contains(member)),
            Some(Value::List(_)) => Err(wrong_type(key)),
        }
    }

    async fn list_push(&self, key: &str, value: &[u8]) -> Result<usize, StoreError> {
        let mut data = self.data.lock().await;
        match data
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()))
        {
            Value::List(list) => {
                list.push(value.to_vec());
                Ok(list.len())
            }
            Value::Set(_) => Err(wrong_type(key)),
        }
    }

    async fn list_index(&self, key: &str, index: isize) -> Result<Option<Vec<u8>>, StoreError> {
        let data = self.data.lock().await;
        match data.get(key) {
            None => Ok(None),
            Some(Value::List(list)) => {
                Ok(resolve_index(list.len(), index).map(|i| list[i].clone()))
            }
            Some(Value::Set(_)) => Err(wrong_type(key)),
        }
    }

    async fn list_range(
        &self,
        key: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        let data = self.data.lock().await;
        match data.get(key) {
            None => Ok(Vec::new()),
            Some(Value::List(list)) => Ok(match resolve_range(list.len(), start, stop) {
                Some((from, to)) => list[from..=to].to_vec(),
                None => Vec::new(),
            }),
            Some(Value::Set(_)) => Err(wrong_type(key)),
        }
    }

    async fn list_len(&self, key: &str) -> Result<usize, StoreError> {
        let data = self.data.lock().await;
        match data.get(key) {
            None => Ok(0),
            Some(Value::List(list)) => Ok(list.len()),
            Some(Value::Set(_)) => Err(wrong_type(key)),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.data.lock().await.remove(key).is_some())
    }
}
