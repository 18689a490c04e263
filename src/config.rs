// src/config.rs

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::{env, time::Duration};

use crate::{
    db::{DashboardRepository, ProductRepository, StoreRepository},
    services::{DashboardService, ProductService, StoreService},
};

// Configurações lidas do ambiente, todas com padrão de desenvolvimento:
//   DB_HOST (localhost), DB_PORT (5432), DB_USER (inventory_user),
//   DB_PASSWORD (inventory_pass), DB_NAME (inventory_db),
//   DB_MAX_CONNECTIONS (20), PORT (3001)
#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("DB_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5432),
            db_user: env::var("DB_USER").unwrap_or_else(|_| "inventory_user".to_string()),
            db_password: env::var("DB_PASSWORD").unwrap_or_else(|_| "inventory_pass".to_string()),
            db_name: env::var("DB_NAME").unwrap_or_else(|_| "inventory_db".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
        }
    }

    pub fn pg_connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
    }

    pub fn server_address(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub store_service: StoreService,
    pub product_service: ProductService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(config.pg_connect_options())
            .await?;

        // Confirma que o banco responde antes de aceitar requisições
        sqlx::query("SELECT 1").execute(&db_pool).await?;
        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    // Monta o gráfico de dependências a partir de uma pool já criada.
    pub fn from_pool(db_pool: PgPool) -> Self {
        let store_repo = StoreRepository::new(db_pool.clone());
        let product_repo = ProductRepository::new(db_pool.clone());
        let dashboard_repo = DashboardRepository::new(db_pool.clone());

        let store_service = StoreService::new(store_repo.clone());
        let product_service = ProductService::new(product_repo, store_repo);
        let dashboard_service = DashboardService::new(dashboard_repo);

        Self {
            db_pool,
            store_service,
            product_service,
            dashboard_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        Config {
            db_host: "db.internal".to_string(),
            db_port: 5433,
            db_user: "app".to_string(),
            db_password: "secret".to_string(),
            db_name: "inventory".to_string(),
            db_max_connections: 5,
            server_port: 8080,
        }
    }

    #[test]
    fn connect_options_carry_every_field() {
        let options = sample_config().pg_connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("inventory"));
    }

    #[test]
    fn server_address_uses_the_configured_port() {
        assert_eq!(sample_config().server_address(), "0.0.0.0:8080");
    }
}
