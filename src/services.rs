pub mod store_service;
pub use store_service::StoreService;
pub mod product_service;
pub use product_service::ProductService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
