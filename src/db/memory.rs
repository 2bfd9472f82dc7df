use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A stored row with a server-assigned identity.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> Uuid;
}

/// An insertion-ordered, id-indexed in-memory table.
///
/// Writers take the exclusive lock for the whole insert, so concurrent
/// creates are serialized; readers share the lock and get owned clones.
pub struct MemTable<T> {
    inner: RwLock<Rows<T>>,
}

struct Rows<T> {
    /// rows in insertion order
    rows: Vec<T>,
    /// id -> position in `rows`
    index: HashMap<Uuid, usize>,
}

impl<T: Record> MemTable<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Rows {
                rows: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }

    /// Insert a row built from a freshly generated v4 id and return it.
    pub async fn insert_with(&self, build: impl FnOnce(Uuid) -> T) -> T {
        let mut inner = self.inner.write().await;

        let mut id = Uuid::new_v4();
        while inner.index.contains_key(&id) {
            id = Uuid::new_v4();
        }

        let row = build(id);
        let position = inner.rows.len();
        inner.index.insert(row.id(), position);
        inner.rows.push(row.clone());
        row
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        let inner = self.inner.read().await;
        inner.index.get(&id).map(|&i| inner.rows[i].clone())
    }

    /// First row, in insertion order, matching `pred`.
    pub async fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        let inner = self.inner.read().await;
        inner.rows.iter().find(|&row| pred(row)).cloned()
    }

    /// Every row matching `pred`, in insertion order.
    pub async fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        let inner = self.inner.read().await;
        inner.rows.iter().filter(|&row| pred(row)).cloned().collect()
    }

    pub async fn all(&self) -> Vec<T> {
        self.inner.read().await.rows.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Record> Default for MemTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: Uuid,
        label: &'static str,
    }

    impl Record for Row {
        fn id(&self) -> Uuid {
            self.id
        }
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let table = MemTable::new();
        for label in ["c", "a", "b"] {
            table.insert_with(|id| Row { id, label }).await;
        }
        let labels: Vec<_> = table.all().await.into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn get_uses_the_assigned_id() {
        let table = MemTable::new();
        let row = table.insert_with(|id| Row { id, label: "x" }).await;
        assert_eq!(table.get(row.id).await, Some(row));
        assert_eq!(table.get(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn find_returns_first_match() {
        let table = MemTable::new();
        let first = table.insert_with(|id| Row { id, label: "dup" }).await;
        table.insert_with(|id| Row { id, label: "dup" }).await;
        assert_eq!(table.find(|r| r.label == "dup").await, Some(first));
        assert_eq!(table.filter(|r| r.label == "dup").await.len(), 2);
    }

    #[tokio::test]
    async fn empty_table_reads_cleanly() {
        let table: MemTable<Row> = MemTable::new();
        assert!(table.is_empty().await);
        assert!(table.all().await.is_empty());
    }
}
