// src/db/product_repo.rs

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::product::{PageParams, Product, ProductFilter},
};

#[derive(Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

// Anexa os filtros opcionais à cláusula WHERE (sempre combinados com AND).
// Usada tanto pela query de dados quanto pela de contagem, para que as duas
// enxerguem exatamente o mesmo conjunto.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filters: &ProductFilter) {
    if let Some(category) = &filters.category {
        // prefixo case-insensitive, não substring
        query.push(" AND category ILIKE ");
        query.push_bind(format!("{category}%"));
    }
    if let Some(min_price) = filters.min_price {
        query.push(" AND price >= ");
        query.push_bind(min_price);
    }
    if let Some(max_price) = filters.max_price {
        query.push(" AND price <= ");
        query.push_bind(max_price);
    }
    if let Some(min_stock) = filters.min_stock {
        query.push(" AND quantity >= ");
        query.push_bind(min_stock);
    }
    if let Some(max_stock) = filters.max_stock {
        query.push(" AND quantity <= ");
        query.push_bind(max_stock);
    }
    if let Some(store_id) = filters.store_id {
        query.push(" AND store_id = ");
        query.push_bind(store_id);
    }
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        store_id: Uuid,
        name: &str,
        category: &str,
        price: Decimal,
        quantity: i32,
    ) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (store_id, name, category, price, quantity)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(store_id)
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // A constraint de FK é a segunda barreira contra storeId inválido
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AppError::StoreDoesNotExist;
                }
            }
            e.into()
        })
    }

    pub async fn find_all(
        &self,
        filters: &ProductFilter,
        page: Option<PageParams>,
    ) -> Result<Vec<Product>, AppError> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM products WHERE 1=1");
        push_filters(&mut query, filters);
        query.push(" ORDER BY created_at DESC");

        if let Some(params) = page {
            query.push(" LIMIT ");
            query.push_bind(params.limit);
            query.push(" OFFSET ");
            query.push_bind(params.offset());
        }

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    pub async fn count(&self, filters: &ProductFilter) -> Result<i64, AppError> {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM products WHERE 1=1");
        push_filters(&mut query, filters);

        let total = query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    pub async fn find_by_store_id(&self, store_id: Uuid) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE store_id = $1 ORDER BY created_at DESC",
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    // Atualização parcial; updated_at é renovado em TODA mutação.
    pub async fn update(
        &self,
        id: Uuid,
        store_id: Option<Uuid>,
        name: Option<&str>,
        category: Option<&str>,
        price: Option<Decimal>,
        quantity: Option<i32>,
    ) -> Result<Option<Product>, AppError> {
        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET store_id = COALESCE($2, store_id),
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                price = COALESCE($5, price),
                quantity = COALESCE($6, quantity),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(store_id)
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return AppError::StoreDoesNotExist;
                }
            }
            e.into()
        })
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_add_no_clauses() {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM products WHERE 1=1");
        push_filters(&mut query, &ProductFilter::default());
        assert_eq!(query.sql(), "SELECT * FROM products WHERE 1=1");
    }

    #[test]
    fn category_filter_is_a_prefix_match() {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM products WHERE 1=1");
        push_filters(
            &mut query,
            &ProductFilter {
                category: Some("Elect".to_string()),
                ..Default::default()
            },
        );
        // ILIKE com o curinga só no fim: "Elect" casa "Electronics",
        // mas não "Something-Electronics"
        assert!(query.sql().contains("category ILIKE"));
    }

    #[test]
    fn all_filters_combine_with_and() {
        let mut query: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT * FROM products WHERE 1=1");
        push_filters(
            &mut query,
            &ProductFilter {
                category: Some("Audio".to_string()),
                min_price: Some(Decimal::new(1000, 2)),
                max_price: Some(Decimal::new(20000, 2)),
                min_stock: Some(1),
                max_stock: Some(50),
                store_id: Some(Uuid::nil()),
            },
        );
        let sql = query.sql();
        assert!(sql.contains("category ILIKE"));
        assert!(sql.contains("price >="));
        assert!(sql.contains("price <="));
        assert!(sql.contains("quantity >="));
        assert!(sql.contains("quantity <="));
        assert!(sql.contains("store_id ="));
        assert_eq!(sql.matches(" AND ").count(), 6);
    }
}
