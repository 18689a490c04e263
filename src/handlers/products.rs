// src/handlers/products.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::AppError,
        validation::{validate_not_blank, validate_positive},
    },
    config::AppState,
    models::product::{PageParams, Product, ProductFilter, ProductListResponse},
};

// ---
// Payload: CreateProductPayload
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(required(message = "O campo 'storeId' é obrigatório."))]
    pub store_id: Option<Uuid>,

    #[validate(
        required(message = "O campo 'name' é obrigatório."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "O campo 'category' é obrigatório."),
        custom(function = "validate_not_blank")
    )]
    pub category: Option<String>,

    #[validate(
        required(message = "O campo 'price' é obrigatório."),
        custom(function = "validate_positive")
    )]
    pub price: Option<Decimal>,

    #[validate(
        required(message = "O campo 'quantity' é obrigatório."),
        range(min = 0, message = "A quantidade não pode ser negativa.")
    )]
    pub quantity: Option<i32>,
}

// ---
// Payload: UpdateProductPayload (parcial)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    pub store_id: Option<Uuid>,

    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub category: Option<String>,

    #[validate(custom(function = "validate_positive"))]
    pub price: Option<Decimal>,

    #[validate(range(min = 0, message = "A quantidade não pode ser negativa."))]
    pub quantity: Option<i32>,
}

// ---
// Query string da listagem
// ---
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Prefixo de categoria, case-insensitive
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_stock: Option<i32>,
    pub max_stock: Option<i32>,
    pub store_id: Option<Uuid>,
    /// Página 1-indexada; mandar page OU limit ativa a paginação
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ListProductsQuery {
    pub fn filters(&self) -> ProductFilter {
        ProductFilter {
            category: self.category.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_stock: self.min_stock,
            max_stock: self.max_stock,
            store_id: self.store_id,
        }
    }

    pub fn pagination(&self) -> Option<PageParams> {
        if self.page.is_some() || self.limit.is_some() {
            Some(PageParams::new(self.page, self.limit))
        } else {
            None
        }
    }
}

// GET /api/products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    params(ListProductsQuery),
    responses(
        (status = 200, description = "Lista (ou página) de produtos filtrados", body = ProductListResponse)
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let result = app_state
        .product_service
        .list_products(&query.filters(), query.pagination())
        .await?;
    Ok((StatusCode::OK, Json(result)))
}

// GET /api/products/{id}
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 200, description = "Produto encontrado", body = Product),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let product = app_state.product_service.get_product(id).await?;
    Ok((StatusCode::OK, Json(product)))
}

// POST /api/products
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductPayload,
    responses(
        (status = 201, description = "Produto criado", body = Product),
        (status = 400, description = "Payload inválido ou loja inexistente")
    )
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let new_product = app_state
        .product_service
        .create_product(
            payload.store_id.unwrap(),
            payload.name.as_deref().unwrap(),
            payload.category.as_deref().unwrap(),
            payload.price.unwrap(),
            payload.quantity.unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(new_product)))
}

// PUT /api/products/{id}
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    request_body = UpdateProductPayload,
    responses(
        (status = 200, description = "Produto atualizado", body = Product),
        (status = 400, description = "Payload inválido ou loja inexistente"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated_product = app_state
        .product_service
        .update_product(
            id,
            payload.store_id,
            payload.name.as_deref(),
            payload.category.as_deref(),
            payload.price,
            payload.quantity,
        )
        .await?;

    Ok((StatusCode::OK, Json(updated_product)))
}

// DELETE /api/products/{id}
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = Uuid, Path, description = "ID do produto")),
    responses(
        (status = 204, description = "Produto removido"),
        (status = 404, description = "Produto não encontrado")
    )
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.product_service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;
    use serde_json::json;

    fn valid_create() -> serde_json::Value {
        json!({
            "storeId": "550e8400-e29b-41d4-a716-446655440001",
            "name": "Laptop Pro 15",
            "category": "Electronics",
            "price": 1299.99,
            "quantity": 15
        })
    }

    #[test]
    fn create_accepts_valid_input() {
        let payload: CreateProductPayload = serde_json::from_value(valid_create()).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn create_accumulates_all_missing_fields() {
        let payload: CreateProductPayload = serde_json::from_value(json!({})).unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["store_id", "name", "category", "price", "quantity"] {
            assert!(fields.contains_key(field), "faltou erro para {field}");
        }
    }

    #[test]
    fn create_rejects_non_positive_price() {
        let mut body = valid_create();
        body["price"] = json!(0);
        let payload: CreateProductPayload = serde_json::from_value(body).unwrap();
        assert!(payload.validate().is_err());

        let mut body = valid_create();
        body["price"] = json!(-10.5);
        let payload: CreateProductPayload = serde_json::from_value(body).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_rejects_negative_quantity() {
        let mut body = valid_create();
        body["quantity"] = json!(-1);
        let payload: CreateProductPayload = serde_json::from_value(body).unwrap();
        assert!(payload.validate().is_err());

        // zero é estoque válido
        let mut body = valid_create();
        body["quantity"] = json!(0);
        let payload: CreateProductPayload = serde_json::from_value(body).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn fractional_quantity_fails_at_deserialization() {
        let mut body = valid_create();
        body["quantity"] = json!(3.5);
        assert!(serde_json::from_value::<CreateProductPayload>(body).is_err());
    }

    #[test]
    fn non_uuid_store_id_fails_at_deserialization() {
        let mut body = valid_create();
        body["storeId"] = json!("not-a-uuid");
        assert!(serde_json::from_value::<CreateProductPayload>(body).is_err());
    }

    #[test]
    fn update_with_empty_body_is_valid() {
        let payload: UpdateProductPayload = serde_json::from_value(json!({})).unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn update_still_checks_present_fields() {
        let payload: UpdateProductPayload =
            serde_json::from_value(json!({ "price": 0 })).unwrap();
        assert!(payload.validate().is_err());

        let payload: UpdateProductPayload =
            serde_json::from_value(json!({ "category": "  " })).unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn query_string_maps_to_filters_and_pagination() {
        let uri: Uri = "/api/products?category=Elect&minPrice=10.5&maxStock=50&page=2&limit=10"
            .parse()
            .unwrap();
        let Query(query) = Query::<ListProductsQuery>::try_from_uri(&uri).unwrap();

        let filters = query.filters();
        assert_eq!(filters.category.as_deref(), Some("Elect"));
        assert_eq!(filters.min_price, Some(Decimal::new(105, 1)));
        assert_eq!(filters.max_stock, Some(50));
        assert!(filters.store_id.is_none());

        let params = query.pagination().unwrap();
        assert_eq!(params.page, 2);
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset(), 10);
    }

    #[test]
    fn pagination_engages_with_either_parameter() {
        let uri: Uri = "/api/products".parse().unwrap();
        let Query(query) = Query::<ListProductsQuery>::try_from_uri(&uri).unwrap();
        assert!(query.pagination().is_none());

        let uri: Uri = "/api/products?limit=5".parse().unwrap();
        let Query(query) = Query::<ListProductsQuery>::try_from_uri(&uri).unwrap();
        let params = query.pagination().unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.limit, 5);
    }
}
