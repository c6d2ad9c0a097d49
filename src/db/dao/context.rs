use sea_orm::DatabaseConnection;

use super::{DaoBase, NoteDao, NotebookDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn notebook(&self) -> NotebookDao {
        DaoBase::new(&self.db)
    }

    pub fn note(&self) -> NoteDao {
        DaoBase::new(&self.db)
    }
}
