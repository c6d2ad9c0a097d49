#[allow(unused_imports)]
pub mod prelude {
    pub use super::note::Entity as Note;
    pub use super::notebook::Entity as Notebook;
}

pub mod note;
pub mod notebook;
