use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O IntoResponse abaixo é o ÚNICO lugar que traduz a taxonomia em status HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Loja não encontrada")]
    StoreNotFound,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Rota não encontrada")]
    RouteNotFound,

    // A loja referenciada por um produto não existe. É um erro de entrada (400),
    // diferente de "não encontrado": o alvo da requisição é o produto.
    #[error("A loja informada não existe")]
    StoreDoesNotExist,

    // Exclusão de loja bloqueada pelos produtos dependentes (restrict, não cascade).
    #[error("A loja ainda possui produtos cadastrados")]
    StoreHasProducts,

    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "statusCode": StatusCode::BAD_REQUEST.as_u16(),
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::StoreNotFound => (StatusCode::NOT_FOUND, "Loja não encontrada."),
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, "Produto não encontrado."),
            AppError::RouteNotFound => (StatusCode::NOT_FOUND, "Rota não encontrada."),
            AppError::StoreDoesNotExist => {
                (StatusCode::BAD_REQUEST, "A loja informada não existe.")
            }
            AppError::StoreHasProducts => (
                StatusCode::CONFLICT,
                "Não é possível excluir uma loja com produtos cadastrados.",
            ),

            // Todos os outros erros (DatabaseError, InternalServerError) viram 500.
            // O `tracing` registra a mensagem detalhada; o cliente recebe o genérico.
            e => {
                tracing::error!("Erro interno do servidor: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ocorreu um erro inesperado.",
                )
            }
        };

        // Resposta padrão para erros que só têm uma mensagem.
        let mut body = json!({
            "error": error_message,
            "statusCode": status.as_u16(),
        });

        // Em builds de debug o detalhe interno vai junto (nunca em release).
        if status == StatusCode::INTERNAL_SERVER_ERROR && cfg!(debug_assertions) {
            body["details"] = json!(format!("{:?}", self));
        }

        (status, Json(body)).into_response()
    }
}
