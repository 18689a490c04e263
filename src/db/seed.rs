// src/db/seed.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::error::AppError;

// (id, name, location, created_at)
const STORES: &[(&str, &str, &str, &str)] = &[
    (
        "550e8400-e29b-41d4-a716-446655440001",
        "Tech Central",
        "San Francisco, CA",
        "2024-01-15T10:00:00Z",
    ),
    (
        "550e8400-e29b-41d4-a716-446655440002",
        "Downtown Electronics",
        "New York, NY",
        "2024-02-01T14:30:00Z",
    ),
    (
        "550e8400-e29b-41d4-a716-446655440003",
        "Gadget World",
        "Austin, TX",
        "2024-03-10T09:15:00Z",
    ),
];

// (id, store_id, name, category, price, quantity, created_at)
const PRODUCTS: &[(&str, &str, &str, &str, &str, i32, &str)] = &[
    (
        "650e8400-e29b-41d4-a716-446655440001",
        "550e8400-e29b-41d4-a716-446655440001",
        "Laptop Pro 15",
        "Electronics",
        "1299.99",
        15,
        "2024-01-20T10:00:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440002",
        "550e8400-e29b-41d4-a716-446655440001",
        "Wireless Mouse",
        "Accessories",
        "29.99",
        50,
        "2024-01-20T10:05:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440003",
        "550e8400-e29b-41d4-a716-446655440001",
        "USB-C Cable",
        "Accessories",
        "12.99",
        100,
        "2024-01-20T10:10:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440004",
        "550e8400-e29b-41d4-a716-446655440002",
        "Smartphone X12",
        "Electronics",
        "899.99",
        25,
        "2024-02-05T11:00:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440005",
        "550e8400-e29b-41d4-a716-446655440002",
        "Bluetooth Headphones",
        "Audio",
        "149.99",
        30,
        "2024-02-05T11:15:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440006",
        "550e8400-e29b-41d4-a716-446655440002",
        "Tablet 10-inch",
        "Electronics",
        "399.99",
        18,
        "2024-02-05T11:30:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440007",
        "550e8400-e29b-41d4-a716-446655440003",
        "Smart Watch",
        "Wearables",
        "249.99",
        12,
        "2024-03-12T09:00:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440008",
        "550e8400-e29b-41d4-a716-446655440003",
        "Portable Speaker",
        "Audio",
        "79.99",
        40,
        "2024-03-12T09:15:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440009",
        "550e8400-e29b-41d4-a716-446655440003",
        "Gaming Keyboard",
        "Accessories",
        "119.99",
        22,
        "2024-03-12T09:30:00Z",
    ),
    (
        "650e8400-e29b-41d4-a716-446655440010",
        "550e8400-e29b-41d4-a716-446655440003",
        "External Hard Drive 1TB",
        "Storage",
        "64.99",
        35,
        "2024-03-12T09:45:00Z",
    ),
];

fn parse_uuid(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|e| AppError::InternalServerError(e.into()))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| AppError::InternalServerError(e.into()))?
        .with_timezone(&Utc))
}

fn parse_price(value: &str) -> Result<Decimal, AppError> {
    value
        .parse::<Decimal>()
        .map_err(|e| AppError::InternalServerError(e.into()))
}

// Descarta tudo e recria o conjunto de demonstração do painel.
pub async fn run(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("TRUNCATE products, stores").execute(&mut *tx).await?;

    for (id, name, location, created_at) in STORES {
        sqlx::query("INSERT INTO stores (id, name, location, created_at) VALUES ($1, $2, $3, $4)")
            .bind(parse_uuid(id)?)
            .bind(name)
            .bind(location)
            .bind(parse_timestamp(created_at)?)
            .execute(&mut *tx)
            .await?;
    }
    tracing::info!("{} lojas criadas", STORES.len());

    for (id, store_id, name, category, price, quantity, created_at) in PRODUCTS {
        let created_at = parse_timestamp(created_at)?;
        sqlx::query(
            r#"
            INSERT INTO products (id, store_id, name, category, price, quantity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            "#,
        )
        .bind(parse_uuid(id)?)
        .bind(parse_uuid(store_id)?)
        .bind(name)
        .bind(category)
        .bind(parse_price(price)?)
        .bind(quantity)
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
    }
    tracing::info!("{} produtos criados", PRODUCTS.len());

    tx.commit().await?;
    tracing::info!("✅ Dados de demonstração recriados com sucesso!");
    Ok(())
}
