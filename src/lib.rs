//! Category API: in-memory category CRUD and PostgreSQL-backed product CRUD over HTTP.

pub mod config;
pub mod database;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{load_config, AppConfig};
pub use database::init_db;
pub use error::{AppError, ConfigError};
pub use model::{Category, Product};
pub use repository::{PgProductRepository, ProductRepository};
pub use routes::{app, category_routes, common_routes, product_routes};
pub use service::ProductService;
pub use state::AppState;
pub use store::CategoryStore;
