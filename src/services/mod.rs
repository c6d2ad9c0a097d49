pub mod context;
pub mod note_service;
pub mod notebook_service;

pub use context::ServiceContext;
pub use note_service::{NoteParams, NoteService};
pub use notebook_service::NotebookService;
