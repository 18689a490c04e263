// src/db/store_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::store::Store};

// O repositório de lojas, responsável por todas as interações com a tabela 'stores'
#[derive(Clone)]
pub struct StoreRepository {
    pool: PgPool,
}

impl StoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, location: &str) -> Result<Store, AppError> {
        let store = sqlx::query_as::<_, Store>(
            "INSERT INTO stores (name, location) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(location)
        .fetch_one(&self.pool)
        .await?;
        Ok(store)
    }

    // Listagem sempre da mais recente para a mais antiga
    pub async fn find_all(&self) -> Result<Vec<Store>, AppError> {
        let stores = sqlx::query_as::<_, Store>("SELECT * FROM stores ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(stores)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(store)
    }

    // Atualização parcial: campo ausente (NULL no bind) mantém o valor atual.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        location: Option<&str>,
    ) -> Result<Option<Store>, AppError> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            UPDATE stores
            SET name = COALESCE($2, name),
                location = COALESCE($3, location)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(location)
        .fetch_optional(&self.pool)
        .await?;
        Ok(store)
    }

    // DELETE condicional em um único statement: a checagem de produtos e a
    // remoção acontecem atomicamente, sem janela entre contar e excluir.
    pub async fn delete_if_no_products(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM stores
            WHERE id = $1
              AND NOT EXISTS (SELECT 1 FROM products WHERE store_id = $1)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn has_products(&self, id: Uuid) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM products WHERE store_id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
