// src/services/store_service.rs

use uuid::Uuid;

use crate::{common::error::AppError, db::StoreRepository, models::store::Store};

#[derive(Clone)]
pub struct StoreService {
    store_repo: StoreRepository,
}

impl StoreService {
    pub fn new(store_repo: StoreRepository) -> Self {
        Self { store_repo }
    }

    pub async fn create_store(&self, name: &str, location: &str) -> Result<Store, AppError> {
        self.store_repo.create(name, location).await
    }

    pub async fn get_all_stores(&self) -> Result<Vec<Store>, AppError> {
        self.store_repo.find_all().await
    }

    pub async fn get_store(&self, id: Uuid) -> Result<Store, AppError> {
        self.store_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::StoreNotFound)
    }

    pub async fn update_store(
        &self,
        id: Uuid,
        name: Option<&str>,
        location: Option<&str>,
    ) -> Result<Store, AppError> {
        self.store_repo
            .update(id, name, location)
            .await?
            .ok_or(AppError::StoreNotFound)
    }

    // A exclusão em si é atômica (DELETE condicional). Se nada foi removido,
    // descobrimos aqui o porquê só para escolher o erro certo.
    pub async fn delete_store(&self, id: Uuid) -> Result<(), AppError> {
        if self.store_repo.delete_if_no_products(id).await? {
            return Ok(());
        }

        // Produto só existe apontando para loja existente (FK), então
        // has_products == true implica que a loja está lá e tem dependentes.
        if self.store_repo.has_products(id).await? {
            Err(AppError::StoreHasProducts)
        } else {
            Err(AppError::StoreNotFound)
        }
    }
}
