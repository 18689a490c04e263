pub mod store_repo;
pub use store_repo::StoreRepository;
pub mod product_repo;
pub use product_repo::ProductRepository;
pub mod dashboard_repo;
pub use dashboard_repo::DashboardRepository;
pub mod seed;
