//! ProductService: product operations over any `ProductRepository`.

use crate::error::AppError;
use crate::model::Product;
use crate::repository::ProductRepository;
use std::sync::Arc;

const RESOURCE: &str = "Produk";

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        ProductService { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        self.repo.get_all().await
    }

    pub async fn create(&self, product: Product) -> Result<Product, AppError> {
        self.repo.create(&product).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(AppError::NotFound(RESOURCE))
    }

    /// Full replacement; the returned row keeps `id`.
    pub async fn update(&self, id: i32, product: Product) -> Result<Product, AppError> {
        self.repo
            .update(id, &product)
            .await?
            .ok_or(AppError::NotFound(RESOURCE))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(RESOURCE))
        }
    }
}
