use sea_orm::{DatabaseConnection, EntityTrait, Order, PaginatorTrait};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::notebook;
use crate::db::entities::prelude::Notebook;

#[derive(Clone)]
pub struct NotebookDao {
    db: DatabaseConnection,
}

impl DaoBase for NotebookDao {
    type Entity = Notebook;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl NotebookDao {
    pub async fn create_notebook(&self) -> DaoResult<notebook::Model> {
        self.create(notebook::ActiveModel::default()).await
    }

    pub async fn list_notebooks(&self) -> DaoResult<Vec<notebook::Model>> {
        self.find_all(Some((notebook::Column::CreatedAt, Order::Asc)), |query| query)
            .await
    }

    /// `None` when no notebook has this id.
    pub async fn find_notebook(&self, id: &Uuid) -> DaoResult<Option<notebook::Model>> {
        match self.find_by_id(*id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn delete_notebook(&self, id: &Uuid) -> DaoResult<bool> {
        match self.delete(*id).await {
            Ok(_) => Ok(true),
            Err(DaoLayerError::NotFound { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn count_notebooks(&self) -> DaoResult<u64> {
        Notebook::find()
            .count(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}
