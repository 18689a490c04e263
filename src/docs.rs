// src/docs.rs

use utoipa::OpenApi;

use crate::handlers::products::{CreateProductPayload, UpdateProductPayload};
use crate::handlers::stores::{CreateStorePayload, UpdateStorePayload};
use crate::handlers::{dashboard, products, stores};
use crate::models::dashboard::{CategoryStats, DashboardData, OverallStats, StoreStats};
use crate::models::product::{PaginatedResponse, Product, ProductListResponse};
use crate::models::store::Store;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Lojas ---
        stores::list_stores,
        stores::get_store,
        stores::create_store,
        stores::update_store,
        stores::delete_store,
        stores::list_store_products,

        // --- Produtos ---
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,

        // --- Dashboard ---
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            Store,
            Product,
            ProductListResponse,
            PaginatedResponse<Product>,
            DashboardData,
            OverallStats,
            StoreStats,
            CategoryStats,
            CreateStorePayload,
            UpdateStorePayload,
            CreateProductPayload,
            UpdateProductPayload,
        )
    ),
    tags(
        (name = "Stores", description = "CRUD de lojas"),
        (name = "Products", description = "CRUD de produtos, filtros e paginação"),
        (name = "Dashboard", description = "Estatísticas agregadas do estoque"),
    ),
    info(
        title = "Inventory Backend",
        description = "API REST de controle de estoque: lojas, produtos e painel de estatísticas.",
    )
)]
pub struct ApiDoc;
