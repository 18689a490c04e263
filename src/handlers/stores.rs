// src/handlers/stores.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, validation::validate_not_blank},
    config::AppState,
    models::{product::Product, store::Store},
};

// ---
// Payload: CreateStorePayload
// ---
// Campos como Option + required: a ausência vira erro de validação (400 com
// a lista de campos), em vez de falha de desserialização.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorePayload {
    #[validate(
        required(message = "O campo 'name' é obrigatório."),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "O campo 'location' é obrigatório."),
        custom(function = "validate_not_blank")
    )]
    pub location: Option<String>,
}

// ---
// Payload: UpdateStorePayload (parcial: só valida o que veio)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorePayload {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub location: Option<String>,
}

// GET /api/stores
#[utoipa::path(
    get,
    path = "/api/stores",
    tag = "Stores",
    responses(
        (status = 200, description = "Todas as lojas, da mais recente para a mais antiga", body = Vec<Store>)
    )
)]
pub async fn list_stores(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stores = app_state.store_service.get_all_stores().await?;
    Ok((StatusCode::OK, Json(stores)))
}

// GET /api/stores/{id}
#[utoipa::path(
    get,
    path = "/api/stores/{id}",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Loja encontrada", body = Store),
        (status = 404, description = "Loja não encontrada")
    )
)]
pub async fn get_store(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let store = app_state.store_service.get_store(id).await?;
    Ok((StatusCode::OK, Json(store)))
}

// POST /api/stores
#[utoipa::path(
    post,
    path = "/api/stores",
    tag = "Stores",
    request_body = CreateStorePayload,
    responses(
        (status = 201, description = "Loja criada", body = Store),
        (status = 400, description = "Payload inválido")
    )
)]
pub async fn create_store(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateStorePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let new_store = app_state
        .store_service
        .create_store(
            payload.name.as_deref().unwrap(),
            payload.location.as_deref().unwrap(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(new_store)))
}

// PUT /api/stores/{id}
#[utoipa::path(
    put,
    path = "/api/stores/{id}",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da loja")),
    request_body = UpdateStorePayload,
    responses(
        (status = 200, description = "Loja atualizada", body = Store),
        (status = 400, description = "Payload inválido"),
        (status = 404, description = "Loja não encontrada")
    )
)]
pub async fn update_store(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStorePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated_store = app_state
        .store_service
        .update_store(id, payload.name.as_deref(), payload.location.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(updated_store)))
}

// DELETE /api/stores/{id}
#[utoipa::path(
    delete,
    path = "/api/stores/{id}",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 204, description = "Loja removida"),
        (status = 404, description = "Loja não encontrada"),
        (status = 409, description = "A loja ainda possui produtos")
    )
)]
pub async fn delete_store(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.store_service.delete_store(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// GET /api/stores/{id}/products
#[utoipa::path(
    get,
    path = "/api/stores/{id}/products",
    tag = "Stores",
    params(("id" = Uuid, Path, description = "ID da loja")),
    responses(
        (status = 200, description = "Produtos da loja, do mais recente para o mais antigo", body = Vec<Product>)
    )
)]
pub async fn list_store_products(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.product_service.get_products_by_store(id).await?;
    Ok((StatusCode::OK, Json(products)))
}
