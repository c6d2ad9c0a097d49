pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod note_dao;
pub mod notebook_dao;

pub use base::{DaoBase, PaginatedResponse};
pub use base_traits::{HasCreatedAtColumn, HasIdActiveModel, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use note_dao::NoteDao;
pub use notebook_dao::NotebookDao;
