//! Shared test fixtures: an in-memory product repository and request helpers.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use category_api::{app, AppError, AppState, CategoryStore, Product, ProductRepository, ProductService};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Product repository keeping rows in a `Vec`, with ids from a counter like a SERIAL column.
#[derive(Default)]
pub struct MemoryProductRepository {
    rows: Mutex<(Vec<Product>, i32)>,
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.rows.lock().unwrap().0.clone())
    }

    async fn create(&self, product: &Product) -> Result<Product, AppError> {
        let mut guard = self.rows.lock().unwrap();
        guard.1 += 1;
        let row = Product { id: guard.1, ..product.clone() };
        guard.0.push(row.clone());
        Ok(row)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(self.rows.lock().unwrap().0.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: i32, product: &Product) -> Result<Option<Product>, AppError> {
        let mut guard = self.rows.lock().unwrap();
        Ok(guard.0.iter_mut().find(|p| p.id == id).map(|slot| {
            *slot = Product { id, ..product.clone() };
            slot.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let mut guard = self.rows.lock().unwrap();
        let before = guard.0.len();
        guard.0.retain(|p| p.id != id);
        Ok(guard.0.len() < before)
    }
}

pub fn product_service() -> ProductService {
    ProductService::new(Arc::new(MemoryProductRepository::default()))
}

pub fn test_state() -> AppState {
    AppState::new(CategoryStore::seeded(), product_service())
}

pub fn test_app() -> (Router, AppState) {
    let state = test_state();
    (app(state.clone()), state)
}

/// Send one request through the router. Returns the status and the raw body text.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Like `send_raw`, decoding the body as JSON.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let text = body.map(|b| b.to_string());
    let (status, raw) = send_raw(app, method, uri, text.as_deref()).await;
    let value = if raw.is_empty() { Value::Null } else { serde_json::from_str(&raw).unwrap() };
    (status, value)
}
