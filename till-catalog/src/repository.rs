use crate::record::ProductRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

/// Repository trait for read-only inventory access
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Resolve a product by id. `Ok(None)` means the id is not in the
    /// inventory; `Err` means the backing source itself failed.
    async fn product(&self, id: i64) -> Result<Option<ProductRecord>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// Catalog backed by a flat JSON array of records, parsed once into an
/// in-memory index. Lookups never touch the filesystem.
#[derive(Debug)]
pub struct JsonCatalog {
    products: HashMap<i64, ProductRecord>,
}

impl JsonCatalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<ProductRecord>) -> Self {
        let mut products = HashMap::with_capacity(records.len());
        for record in records {
            if let Some(previous) = products.insert(record.id, record) {
                tracing::warn!("duplicate product id {} in catalog source, keeping the later entry", previous.id);
            }
        }
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductCatalog for JsonCatalog {
    async fn product(&self, id: i64) -> Result<Option<ProductRecord>, CatalogError> {
        Ok(self.products.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"[
        {"id": 1, "title": "t-shirt", "description": "plain tee", "amount": 100, "is_gift": false},
        {"id": 2, "title": "sticker pack", "description": "assorted stickers", "amount": 50, "is_gift": true}
    ]"#;

    #[tokio::test]
    async fn test_lookup_hit_and_miss() {
        let catalog = JsonCatalog::from_json(SOURCE).unwrap();
        assert_eq!(catalog.len(), 2);

        let record = catalog.product(1).await.unwrap().unwrap();
        assert_eq!(record.title, "t-shirt");
        assert_eq!(record.amount, 100);
        assert!(!record.is_gift);

        assert!(catalog.product(99).await.unwrap().is_none());
    }

    #[test]
    fn test_malformed_source_is_unavailable() {
        let err = JsonCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = JsonCatalog::from_path("does/not/exist.json").unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_duplicate_ids_keep_later_entry() {
        let source = r#"[
            {"id": 1, "title": "old", "description": "", "amount": 10, "is_gift": false},
            {"id": 1, "title": "new", "description": "", "amount": 20, "is_gift": false}
        ]"#;
        let catalog = JsonCatalog::from_json(source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.product(1).await.unwrap().unwrap().title, "new");
    }
}
