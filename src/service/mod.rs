//! Business layer between HTTP handlers and persistence.

mod product;
pub use product::ProductService;
