//src/main.rs

use axum::{
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod services;

use crate::common::error::AppError;
use crate::config::{AppState, Config};

#[tokio::main]
async fn main() {
    // Inicializa o logger antes de qualquer outra coisa.
    tracing_subscriber::fmt().with_target(false).compact().init();

    let config = Config::from_env();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new(&config)
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Roda as migrações do SQLx na inicialização
    sqlx::migrate!()
        .run(&app_state.db_pool)
        .await
        .expect("Falha ao rodar as migrações do banco de dados.");

    tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");

    // `cargo run -- seed` recria os dados de demonstração e encerra.
    if std::env::args().any(|arg| arg == "seed") {
        db::seed::run(&app_state.db_pool)
            .await
            .expect("Falha ao popular o banco de dados.");
        app_state.db_pool.close().await;
        return;
    }

    let db_pool = app_state.db_pool.clone();
    let app = build_router(app_state);

    // Inicia o servidor
    let addr = config.server_address();
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr().unwrap());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Erro no servidor Axum");

    // Teardown explícito: devolve as conexões antes de sair.
    db_pool.close().await;
    tracing::info!("Conexões com o banco encerradas.");
}

fn build_router(app_state: AppState) -> Router {
    let store_routes = Router::new()
        .route(
            "/",
            get(handlers::stores::list_stores).post(handlers::stores::create_store),
        )
        .route(
            "/{id}",
            get(handlers::stores::get_store)
                .put(handlers::stores::update_store)
                .delete(handlers::stores::delete_store),
        )
        .route("/{id}/products", get(handlers::stores::list_store_products));

    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::products::list_products).post(handlers::products::create_product),
        )
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        );

    let dashboard_routes = Router::new().route("/", get(handlers::dashboard::get_dashboard));

    // Combina tudo no router principal
    Router::new()
        .route("/health", get(health))
        .nest("/api/stores", store_routes)
        .nest("/api/products", product_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

// Qualquer rota desconhecida cai aqui e vira o 404 padrão em JSON.
async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Falha ao instalar o handler de Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Falha ao instalar o handler de SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Sinal Ctrl+C recebido");
        },
        _ = terminate => {
            tracing::info!("Sinal SIGTERM recebido");
        },
    }

    tracing::info!("Encerrando o servidor...");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
    use tower::ServiceExt;

    // Pool "preguiçosa": nenhuma conexão é aberta, o que basta para
    // exercitar as rotas que não tocam o banco.
    fn test_router() -> Router {
        let options = PgConnectOptions::new().host("localhost").database("test");
        let pool = PgPoolOptions::new().connect_lazy_with(options);
        build_router(AppState::from_pool(pool))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/nao-existe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["statusCode"], 404);
    }
}
