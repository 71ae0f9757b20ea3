//! The namespaced accessor: one room's view of the shared store.

use std::sync::Arc;

use crate::{Namespace, Store, StoreError};

/// Prefix placed before every namespace unless configured otherwise.
pub const DEFAULT_KEY_PREFIX: &str = "Chat";

/// Separator between prefix, namespace and logical key.
pub const KEY_DELIMITER: &str = ":";

/// Forwards the [`Store`] catalog with keys rewritten to
/// `prefix:namespace:logical`.
///
/// A `Database` holds no state of its own beyond the shared store handle,
/// so it is cheap to clone and to rebuild per request. Dropping it leaves
/// stored data untouched.
pub struct Database<S: Store> {
    store: Arc<S>,
    prefix: String,
    namespace: Namespace,
}

impl<S: Store> Clone for Database<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            prefix: self.prefix.clone(),
            namespace: self.namespace.clone(),
        }
    }
}

impl<S: Store> Database<S> {
    /// Creates an accessor under [`DEFAULT_KEY_PREFIX`].
    pub fn new(store: Arc<S>, namespace: Namespace) -> Self {
        Self::with_prefix(store, DEFAULT_KEY_PREFIX, namespace)
    }

    /// Creates an accessor under a custom key prefix.
    pub fn with_prefix(
        store: Arc<S>,
        prefix: impl Into<String>,
        namespace: Namespace,
    ) -> Self {
        Self {
            store,
            prefix: prefix.into(),
            namespace,
        }
    }

    /// Returns the namespace this accessor is scoped to.
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Returns the fully-qualified key for a logical key name.
    pub fn namespace_key(&self, logical: &str) -> String {
        [self.prefix.as_str(), self.namespace.as_str(), logical].join(KEY_DELIMITER)
    }

    pub async fn set_add(&self, logical: &str, member: &str) -> Result<bool, StoreError> {
        let key = self.namespace_key(logical);
        let added = self.store.set_add(&key, member).await?;
        tracing::debug!(%key, added, "set add");
        Ok(added)
    }

    pub async fn set_remove(&self, logical: &str, member: &str) -> Result<bool, StoreError> {
        let key = self.namespace_key(logical);
        let removed = self.store.set_remove(&key, member).await?;
        tracing::debug!(%key, removed, "set remove");
        Ok(removed)
    }

    pub async fn set_members(&self, logical: &str) -> Result<Vec<String>, StoreError> {
        let key = self.namespace_key(logical);
        let members = self.store.set_members(&key).await?;
        tracing::debug!(%key, count = members.len(), "set members");
        Ok(members)
    }

    pub async fn set_is_member(&self, logical: &str, member: &str) -> Result<bool, StoreError> {
        let key = self.namespace_key(logical);
        self.store.set_is_member(&key, member).await
    }

    pub async fn list_push(&self, logical: &str, value: &[u8]) -> Result<usize, StoreError> {
        let key = self.namespace_key(logical);
        let len = self.store.list_push(&key, value).await?;
        tracing::debug!(%key, len, bytes = value.len(), "list push");
        Ok(len)
    }

    pub async fn list_index(
        &self,
        logical: &str,
        index: isize,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        let key = self.namespace_key(logical);
        self.store.list_index(&key, index).await
    }

    pub async fn list_range(
        &self,
        logical: &str,
        start: isize,
        stop: isize,
    ) -> Result<Vec<Vec<u8>>, StoreError> {
        let key = self.namespace_key(logical);
        let items = self.store.list_range(&key, start, stop).await?;
        tracing::debug!(%key, start, stop, count = items.len(), "list range");
        Ok(items)
    }

    pub async fn list_len(&self, logical: &str) -> Result<usize, StoreError> {
        let key = self.namespace_key(logical);
        self.store.list_len(&key).await
    }

    pub async fn delete(&self, logical: &str) -> Result<bool, StoreError> {
        let key = self.namespace_key(logical);
        let existed = self.store.delete(&key).await?;
        tracing::debug!(%key, existed, "delete");
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn db(store: &Arc<MemoryStore>, name: &str) -> Database<MemoryStore> {
        Database::new(Arc::clone(store), Namespace::new(name).unwrap())
    }

    #[test]
    fn test_namespace_key_format() {
        let store = Arc::new(MemoryStore::new());
        assert_eq!(db(&store, "lobby").namespace_key("members"), "Chat:lobby:members");
    }

    #[test]
    fn test_custom_prefix() {
        let store = Arc::new(MemoryStore::new());
        let db = Database::with_prefix(store, "test_ab12", Namespace::new("r").unwrap());
        assert_eq!(db.namespace_key("messages"), "test_ab12:r:messages");
    }

    #[tokio::test]
    async fn test_same_namespace_addresses_same_storage() {
        let store = Arc::new(MemoryStore::new());
        let a = db(&store, "name1");
        let b = db(&store, "name1");

        a.set_add("members", "alice").await.unwrap();
        assert!(b.set_is_member("members", "alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_different_namespaces_are_isolated() {
        let store = Arc::new(MemoryStore::new());
        let one = db(&store, "name1");
        let two = db(&store, "name2");

        one.list_push("test", b"test1").await.unwrap();
        two.list_push("test", b"test2").await.unwrap();

        assert_eq!(one.list_index("test", 0).await.unwrap(), Some(b"test1".to_vec()));
        assert_eq!(two.list_index("test", 0).await.unwrap(), Some(b"test2".to_vec()));
    }

    #[tokio::test]
    async fn test_delete_only_touches_own_namespace() {
        let store = Arc::new(MemoryStore::new());
        let one = db(&store, "name1");
        let two = db(&store, "name2");
        one.list_push("messages", b"x").await.unwrap();
        two.list_push("messages", b"y").await.unwrap();

        assert!(one.delete("messages").await.unwrap());
        assert_eq!(one.list_len("messages").await.unwrap(), 0);
        assert_eq!(two.list_len("messages").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_dropping_handle_keeps_data() {
        let store = Arc::new(MemoryStore::new());
        {
            let tmp = db(&store, "keep");
            tmp.set_add("members", "bob").await.unwrap();
        }
        let members = db(&store, "keep").set_members("members").await.unwrap();
        assert_eq!(members, vec!["bob".to_string()]);
    }
}
