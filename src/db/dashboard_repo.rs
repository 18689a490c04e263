// src/db/dashboard_repo.rs

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::dashboard::{CategoryStats, DashboardData, OverallStats, StoreStats},
};

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Recalcula tudo a cada chamada, sem cache nem manutenção incremental.
    pub async fn get_stats(&self) -> Result<DashboardData, AppError> {
        // Transação com REPEATABLE READ: todas as queries abaixo leem o MESMO
        // snapshot do banco, então os números nunca saem inconsistentes entre si.
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await?;

        // A. Contadores gerais
        let total_stores: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&mut *tx)
            .await?;

        let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await?;

        // B. Somas do estoque inteiro (zero produtos => 0, nunca NULL)
        let (total_stock_units, total_inventory_value): (i64, Decimal) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(quantity), 0)::BIGINT,
                   COALESCE(SUM(price * quantity), 0)
            FROM products
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        // C. Por loja. LEFT JOIN: loja sem produto aparece com tudo zerado.
        let store_stats = sqlx::query_as::<_, StoreStats>(
            r#"
            SELECT
                s.id AS store_id,
                s.name AS store_name,
                s.location AS store_location,
                COUNT(p.id) AS product_count,
                COALESCE(SUM(p.price * p.quantity), 0) AS total_value,
                COALESCE(SUM(p.quantity), 0)::BIGINT AS total_stock,
                COALESCE(AVG(p.price), 0) AS avg_price
            FROM stores s
            LEFT JOIN products p ON p.store_id = s.id
            GROUP BY s.id, s.name, s.location
            ORDER BY total_value DESC
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        // D. Por categoria. Categoria só existe enquanto houver produto nela.
        let category_stats = sqlx::query_as::<_, CategoryStats>(
            r#"
            SELECT
                category,
                COUNT(id) AS product_count,
                SUM(price * quantity) AS total_value,
                SUM(quantity)::BIGINT AS total_stock
            FROM products
            GROUP BY category
            ORDER BY total_value DESC
            "#,
        )
        .fetch_all(&mut *tx)
        .await?;

        // Fecha a transação (é só leitura, mas commit é clean)
        tx.commit().await?;

        Ok(DashboardData {
            overall: OverallStats {
                total_stores,
                total_products,
                total_stock_units,
                total_inventory_value,
            },
            store_stats,
            category_stats,
        })
    }
}
