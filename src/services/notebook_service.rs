use uuid::Uuid;

use crate::{db::dao::NotebookDao, db::entities::notebook, error::AppError};

pub const NOTEBOOK_NOT_FOUND: &str = "Notebook not found";

#[derive(Clone)]
pub struct NotebookService {
    notebook_dao: NotebookDao,
}

impl NotebookService {
    pub fn new(notebook_dao: NotebookDao) -> Self {
        Self { notebook_dao }
    }

    pub async fn create_notebook(&self) -> Result<notebook::Model, AppError> {
        let notebook = self.notebook_dao.create_notebook().await?;
        tracing::info!(notebook_id = %notebook.id, "notebook created");
        Ok(notebook)
    }

    pub async fn list_notebooks(&self) -> Result<Vec<notebook::Model>, AppError> {
        Ok(self.notebook_dao.list_notebooks().await?)
    }

    pub async fn require_notebook(&self, id: &Uuid) -> Result<notebook::Model, AppError> {
        self.notebook_dao
            .find_notebook(id)
            .await?
            .ok_or_else(|| AppError::not_found(NOTEBOOK_NOT_FOUND))
    }

    /// Removes the notebook; its notes go with it through the foreign key.
    pub async fn delete_notebook(&self, id: &Uuid) -> Result<(), AppError> {
        if !self.notebook_dao.delete_notebook(id).await? {
            return Err(AppError::not_found(NOTEBOOK_NOT_FOUND));
        }
        tracing::info!(notebook_id = %id, "notebook deleted");
        Ok(())
    }

    pub async fn count_notebooks(&self) -> Result<u64, AppError> {
        Ok(self.notebook_dao.count_notebooks().await?)
    }
}
