// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- Produto ---
// price é NUMERIC(10, 2) no banco; quantity é INTEGER.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Filtros de listagem ---
// Todos opcionais e combinados com AND. A categoria é um prefixo
// case-insensitive (ILIKE 'texto%'), não substring.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_stock: Option<i32>,
    pub max_stock: Option<i32>,
    pub store_id: Option<Uuid>,
}

// --- Paginação ---
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

// Página 1-indexada. Valores não-positivos caem nos padrões.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl PageParams {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, params: PageParams, total: i64) -> Self {
        Self {
            data,
            page: params.page,
            limit: params.limit,
            total,
            // ceil(total / limit); limit é sempre >= 1 (ver PageParams::new)
            total_pages: (total + params.limit - 1) / params.limit,
        }
    }
}

// Sem page/limit na query string a rota devolve o array completo;
// com eles, devolve a página com os metadados.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ProductListResponse {
    Paginated(PaginatedResponse<Product>),
    All(Vec<Product>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    fn sample_product() -> Product {
        Product {
            id: Uuid::nil(),
            store_id: Uuid::nil(),
            name: "Laptop Pro 15".to_string(),
            category: "Electronics".to_string(),
            price: Decimal::new(129_999, 2),
            quantity: 15,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn page_params_fall_back_to_defaults() {
        let params = PageParams::new(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);

        // 0 e negativos não são páginas válidas
        let params = PageParams::new(Some(0), Some(-5));
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 10);

        let params = PageParams::new(Some(3), Some(25));
        assert_eq!(params.page, 3);
        assert_eq!(params.limit, 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PageParams::new(Some(1), Some(10));
        let page: PaginatedResponse<Product> = PaginatedResponse::new(vec![], params, 25);
        assert_eq!(page.total_pages, 3);

        let page: PaginatedResponse<Product> = PaginatedResponse::new(vec![], params, 30);
        assert_eq!(page.total_pages, 3);

        let page: PaginatedResponse<Product> = PaginatedResponse::new(vec![], params, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn product_serializes_with_camel_case_and_numeric_price() {
        let value = serde_json::to_value(sample_product()).unwrap();
        assert!(value.get("storeId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("store_id").is_none());
        // serde-float: número JSON, nunca string
        assert_eq!(value["price"], json!(1299.99));
        assert_eq!(value["quantity"], json!(15));
    }

    #[test]
    fn list_response_is_untagged() {
        let all = ProductListResponse::All(vec![sample_product()]);
        let value = serde_json::to_value(all).unwrap();
        assert!(value.is_array());

        let params = PageParams::new(Some(1), Some(10));
        let paginated =
            ProductListResponse::Paginated(PaginatedResponse::new(vec![sample_product()], params, 1));
        let value = serde_json::to_value(paginated).unwrap();
        assert_eq!(value["page"], json!(1));
        assert_eq!(value["limit"], json!(10));
        assert_eq!(value["total"], json!(1));
        assert_eq!(value["totalPages"], json!(1));
        assert!(value["data"].is_array());
    }
}
