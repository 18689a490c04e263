// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// 1. Visão Geral (os cards do topo do painel)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_stores: i64,
    pub total_products: i64,
    pub total_stock_units: i64,
    pub total_inventory_value: Decimal,
}

// 2. Estatísticas por loja (LEFT JOIN: loja sem produto aparece zerada)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub store_id: Uuid,
    pub store_name: String,
    pub store_location: String,
    pub product_count: i64,
    pub total_value: Decimal,
    pub total_stock: i64,
    pub avg_price: Decimal,
}

// 3. Estatísticas por categoria (derivadas só dos produtos existentes)
#[derive(Debug, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,
    pub product_count: i64,
    pub total_value: Decimal,
    pub total_stock: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub overall: OverallStats,
    pub store_stats: Vec<StoreStats>,
    pub category_stats: Vec<CategoryStats>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dashboard_serializes_with_camel_case_keys() {
        let data = DashboardData {
            overall: OverallStats {
                total_stores: 1,
                total_products: 1,
                total_stock_units: 5,
                total_inventory_value: Decimal::new(5000, 2),
            },
            store_stats: vec![StoreStats {
                store_id: Uuid::nil(),
                store_name: "Tech Central".to_string(),
                store_location: "San Francisco, CA".to_string(),
                product_count: 1,
                total_value: Decimal::new(5000, 2),
                total_stock: 5,
                avg_price: Decimal::new(1000, 2),
            }],
            category_stats: vec![],
        };

        let value = serde_json::to_value(data).unwrap();
        assert_eq!(value["overall"]["totalStockUnits"], json!(5));
        assert_eq!(value["overall"]["totalInventoryValue"], json!(50.0));
        assert_eq!(value["storeStats"][0]["avgPrice"], json!(10.0));
        assert_eq!(value["storeStats"][0]["productCount"], json!(1));
        assert!(value["categoryStats"].as_array().unwrap().is_empty());
    }
}
