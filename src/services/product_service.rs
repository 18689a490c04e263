// src/services/product_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{ProductRepository, StoreRepository},
    models::product::{
        PageParams, PaginatedResponse, Product, ProductFilter, ProductListResponse,
    },
};

#[derive(Clone)]
pub struct ProductService {
    product_repo: ProductRepository,
    store_repo: StoreRepository,
}

impl ProductService {
    pub fn new(product_repo: ProductRepository, store_repo: StoreRepository) -> Self {
        Self {
            product_repo,
            store_repo,
        }
    }

    pub async fn create_product(
        &self,
        store_id: Uuid,
        name: &str,
        category: &str,
        price: Decimal,
        quantity: i32,
    ) -> Result<Product, AppError> {
        // A loja referenciada precisa existir. Erro de entrada (400),
        // não "não encontrado": o alvo da requisição é o produto.
        if self.store_repo.find_by_id(store_id).await?.is_none() {
            return Err(AppError::StoreDoesNotExist);
        }

        self.product_repo
            .create(store_id, name, category, price, quantity)
            .await
    }

    pub async fn list_products(
        &self,
        filters: &ProductFilter,
        page: Option<PageParams>,
    ) -> Result<ProductListResponse, AppError> {
        match page {
            Some(params) => {
                let total = self.product_repo.count(filters).await?;
                let data = self.product_repo.find_all(filters, Some(params)).await?;
                Ok(ProductListResponse::Paginated(PaginatedResponse::new(
                    data, params, total,
                )))
            }
            // Sem parâmetros de paginação a resposta é o conjunto completo
            None => Ok(ProductListResponse::All(
                self.product_repo.find_all(filters, None).await?,
            )),
        }
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product, AppError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn get_products_by_store(&self, store_id: Uuid) -> Result<Vec<Product>, AppError> {
        self.product_repo.find_by_store_id(store_id).await
    }

    pub async fn update_product(
        &self,
        id: Uuid,
        store_id: Option<Uuid>,
        name: Option<&str>,
        category: Option<&str>,
        price: Option<Decimal>,
        quantity: Option<i32>,
    ) -> Result<Product, AppError> {
        // Se a requisição troca a loja do produto, a nova precisa existir
        if let Some(store_id) = store_id {
            if self.store_repo.find_by_id(store_id).await?.is_none() {
                return Err(AppError::StoreDoesNotExist);
            }
        }

        self.product_repo
            .update(id, store_id, name, category, price, quantity)
            .await?
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        if self.product_repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::ProductNotFound)
        }
    }
}
