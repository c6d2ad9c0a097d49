use sea_orm::DatabaseConnection;

use crate::{
    db::dao::DaoContext,
    services::{note_service::NoteService, notebook_service::NotebookService},
    state::AppState,
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            daos: DaoContext::new(db),
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(&state.db)
    }

    pub fn notebook(&self) -> NotebookService {
        NotebookService::new(self.daos.notebook())
    }

    pub fn note(&self) -> NoteService {
        NoteService::new(self.daos.notebook(), self.daos.note())
    }
}
