use serde::{Deserialize, Deserializer};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    db::dao::{NoteDao, NotebookDao},
    db::entities::note,
    error::AppError,
    services::notebook_service::NOTEBOOK_NOT_FOUND,
    validation::{Rule, Validate, ValidationErrors, validate_field},
};

pub const NOTE_NOT_FOUND: &str = "Note not found";

const CONTENTS_RULES: &[Rule] = &[Rule::Presence, Rule::MinLength(5)];

/// Writable note attributes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteParams {
    #[serde(default, deserialize_with = "scalar_string")]
    pub contents: Option<String>,
}

/// Numbers and booleans arrive as their text form. `null`, arrays and
/// objects are treated as an absent value.
pub fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

impl NoteParams {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }
}

impl Validate for NoteParams {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        validate_field(
            &mut errors,
            "contents",
            self.contents.as_deref(),
            CONTENTS_RULES,
        );
        errors.into_result()
    }
}

#[derive(Clone)]
pub struct NoteService {
    notebook_dao: NotebookDao,
    note_dao: NoteDao,
}

impl NoteService {
    pub fn new(notebook_dao: NotebookDao, note_dao: NoteDao) -> Self {
        Self {
            notebook_dao,
            note_dao,
        }
    }

    pub async fn list_notes(&self, notebook_id: &Uuid) -> Result<Vec<note::Model>, AppError> {
        self.require_notebook(notebook_id).await?;
        Ok(self.note_dao.list_notes(notebook_id).await?)
    }

    pub async fn get_note(
        &self,
        notebook_id: &Uuid,
        note_id: &Uuid,
    ) -> Result<note::Model, AppError> {
        self.require_notebook(notebook_id).await?;
        self.note_dao
            .find_note(notebook_id, note_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOTE_NOT_FOUND))
    }

    /// The notebook must exist before validation runs; nothing is written
    /// when validation fails.
    pub async fn create_note(
        &self,
        notebook_id: &Uuid,
        params: &NoteParams,
    ) -> Result<note::Model, AppError> {
        self.require_notebook(notebook_id).await?;
        let contents = validated_contents(params)?;
        let note = self.note_dao.create_note(notebook_id, contents).await?;
        tracing::info!(notebook_id = %notebook_id, note_id = %note.id, "note created");
        Ok(note)
    }

    pub async fn update_note(
        &self,
        notebook_id: &Uuid,
        note_id: &Uuid,
        params: &NoteParams,
    ) -> Result<note::Model, AppError> {
        self.require_notebook(notebook_id).await?;
        let contents = validated_contents(params)?;
        self.note_dao
            .update_contents(notebook_id, note_id, contents)
            .await?
            .ok_or_else(|| AppError::not_found(NOTE_NOT_FOUND))
    }

    pub async fn delete_note(&self, notebook_id: &Uuid, note_id: &Uuid) -> Result<(), AppError> {
        if !self.note_dao.delete_note(notebook_id, note_id).await? {
            return Err(AppError::not_found(NOTE_NOT_FOUND));
        }
        tracing::info!(notebook_id = %notebook_id, note_id = %note_id, "note deleted");
        Ok(())
    }

    pub async fn count_by_notebook(&self, notebook_id: &Uuid) -> Result<u64, AppError> {
        Ok(self.note_dao.count_by_notebook(notebook_id).await?)
    }

    pub async fn count_all(&self) -> Result<u64, AppError> {
        Ok(self.note_dao.count_all().await?)
    }

    async fn require_notebook(&self, notebook_id: &Uuid) -> Result<(), AppError> {
        match self.notebook_dao.find_notebook(notebook_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(NOTEBOOK_NOT_FOUND)),
        }
    }
}

fn validated_contents(params: &NoteParams) -> Result<&str, AppError> {
    if let Err(errors) = params.validate() {
        tracing::debug!(errors = %errors, "note rejected by validation");
        return Err(errors.into());
    }
    // Presence passed, so the value is set.
    Ok(params.contents.as_deref().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    use super::{NoteParams, NoteService};
    use crate::{
        db::dao::{DaoBase, NoteDao, NotebookDao},
        db::entities::notebook,
        error::AppError,
        validation::Validate,
    };

    fn notebook_model(id: Uuid) -> notebook::Model {
        let now = FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid");
        notebook::Model {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn params_without_contents_fail_both_rules() {
        let errors = NoteParams::default()
            .validate()
            .expect_err("missing contents should be invalid");
        assert_eq!(errors.messages("contents").len(), 2);
    }

    #[test]
    fn params_deserialize_ignoring_unknown_keys() {
        let params: NoteParams =
            serde_json::from_str(r#"{"contents":"New Note","notebook":{"id":1}}"#)
                .expect("params should parse");
        assert_eq!(params.contents.as_deref(), Some("New Note"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn scalar_contents_are_coerced_to_text() {
        let number: NoteParams =
            serde_json::from_str(r#"{"contents":12345}"#).expect("params should parse");
        assert_eq!(number.contents.as_deref(), Some("12345"));
        assert!(number.validate().is_ok());

        let flag: NoteParams =
            serde_json::from_str(r#"{"contents":true}"#).expect("params should parse");
        assert_eq!(flag.contents.as_deref(), Some("true"));
    }

    #[test]
    fn structured_contents_count_as_missing() {
        let params: NoteParams =
            serde_json::from_str(r#"{"contents":["a","b"]}"#).expect("params should parse");
        assert!(params.contents.is_none());
        assert_eq!(
            params
                .validate()
                .expect_err("structured contents should be invalid")
                .messages("contents"),
            ["can't be blank", "is too short (minimum is 5 characters)"]
        );
    }

    #[tokio::test]
    async fn create_note_rejects_invalid_contents_before_writing() {
        let notebook_id = Uuid::new_v4();
        // Only the notebook lookup is scripted; an insert would exhaust the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[notebook_model(notebook_id)]])
            .into_connection();
        let service = NoteService::new(NotebookDao::new(&db), NoteDao::new(&db));

        let err = service
            .create_note(&notebook_id, &NoteParams::new("abc"))
            .await
            .expect_err("short contents should be rejected");

        match err {
            AppError::Unprocessable(errors) => assert_eq!(
                errors.messages("contents"),
                ["is too short (minimum is 5 characters)"]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_notebook_wins_over_validation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<notebook::Model>::new()])
            .into_connection();
        let service = NoteService::new(NotebookDao::new(&db), NoteDao::new(&db));

        let err = service
            .create_note(&Uuid::new_v4(), &NoteParams::default())
            .await
            .expect_err("unknown notebook should be rejected");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
