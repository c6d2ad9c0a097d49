use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::note;
use crate::db::entities::prelude::Note;

#[derive(Clone)]
pub struct NoteDao {
    db: DatabaseConnection,
}

impl DaoBase for NoteDao {
    type Entity = Note;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl NoteDao {
    pub async fn create_note(&self, notebook_id: &Uuid, contents: &str) -> DaoResult<note::Model> {
        let model = note::ActiveModel {
            notebook_id: Set(*notebook_id),
            contents: Set(contents.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Notes of one notebook, oldest first.
    pub async fn list_notes(&self, notebook_id: &Uuid) -> DaoResult<Vec<note::Model>> {
        let notebook_id = *notebook_id;
        self.find_all(Some((note::Column::CreatedAt, Order::Asc)), move |query| {
            query.filter(note::Column::NotebookId.eq(notebook_id))
        })
        .await
    }

    pub async fn find_note(
        &self,
        notebook_id: &Uuid,
        note_id: &Uuid,
    ) -> DaoResult<Option<note::Model>> {
        self.find(1, 1, None, |query| {
            query
                .filter(note::Column::Id.eq(*note_id))
                .filter(note::Column::NotebookId.eq(*notebook_id))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    pub async fn update_contents(
        &self,
        notebook_id: &Uuid,
        note_id: &Uuid,
        contents: &str,
    ) -> DaoResult<Option<note::Model>> {
        let Some(_) = self.find_note(notebook_id, note_id).await? else {
            return Ok(None);
        };
        let contents = contents.to_string();
        let model = self
            .update(*note_id, move |active| {
                active.contents = Set(contents);
            })
            .await?;
        Ok(Some(model))
    }

    /// Deletes in a single statement scoped by both ids, so a note of another
    /// notebook is never touched. Returns whether a row was removed.
    pub async fn delete_note(&self, notebook_id: &Uuid, note_id: &Uuid) -> DaoResult<bool> {
        let result = Note::delete_many()
            .filter(note::Column::Id.eq(*note_id))
            .filter(note::Column::NotebookId.eq(*notebook_id))
            .exec(&self.db)
            .await
            .map_err(DaoLayerError::Db)?;
        Ok(result.rows_affected > 0)
    }

    pub async fn count_by_notebook(&self, notebook_id: &Uuid) -> DaoResult<u64> {
        Note::find()
            .filter(note::Column::NotebookId.eq(*notebook_id))
            .count(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn count_all(&self) -> DaoResult<u64> {
        Note::find()
            .count(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::NoteDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::note;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn note_model(id: Uuid, notebook_id: Uuid, contents: &str) -> note::Model {
        let now = ts();
        note::Model {
            id,
            created_at: now,
            updated_at: now,
            notebook_id,
            contents: contents.to_string(),
        }
    }

    #[tokio::test]
    async fn find_note_returns_none_for_note_outside_notebook() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<note::Model>::new()])
            .into_connection();
        let dao = NoteDao::new(&db);

        let found = dao
            .find_note(&Uuid::new_v4(), &Uuid::new_v4())
            .await
            .expect("query should succeed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn find_note_returns_note_when_present() {
        let notebook_id = Uuid::new_v4();
        let note_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[note_model(note_id, notebook_id, "Note 1")]])
            .into_connection();
        let dao = NoteDao::new(&db);

        let found = dao
            .find_note(&notebook_id, &note_id)
            .await
            .expect("query should succeed");
        assert_eq!(found.map(|note| note.contents), Some("Note 1".to_string()));
    }

    #[tokio::test]
    async fn list_notes_collects_a_single_short_page() {
        let notebook_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[
                note_model(Uuid::new_v4(), notebook_id, "first"),
                note_model(Uuid::new_v4(), notebook_id, "second"),
            ]])
            .into_connection();
        let dao = NoteDao::new(&db);

        let notes = dao
            .list_notes(&notebook_id)
            .await
            .expect("query should succeed");
        let contents: Vec<_> = notes.iter().map(|note| note.contents.as_str()).collect();
        assert_eq!(contents, ["first", "second"]);
    }

    #[tokio::test]
    async fn update_contents_returns_none_when_note_is_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<note::Model>::new()])
            .into_connection();
        let dao = NoteDao::new(&db);

        let updated = dao
            .update_contents(&Uuid::new_v4(), &Uuid::new_v4(), "changed")
            .await
            .expect("query should succeed");
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn delete_note_reports_whether_a_row_was_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let dao = NoteDao::new(&db);
        let notebook_id = Uuid::new_v4();
        let note_id = Uuid::new_v4();

        assert!(dao.delete_note(&notebook_id, &note_id).await.unwrap());
        assert!(!dao.delete_note(&notebook_id, &note_id).await.unwrap());
    }

    #[tokio::test]
    async fn count_by_notebook_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("count failed".to_string())])
            .into_connection();
        let dao = NoteDao::new(&db);

        let err = dao
            .count_by_notebook(&Uuid::new_v4())
            .await
            .expect_err("count should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
