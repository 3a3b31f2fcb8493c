pub mod record;
pub mod repository;

pub use record::ProductRecord;
pub use repository::{CatalogError, JsonCatalog, ProductCatalog};
