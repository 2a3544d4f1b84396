pub use super::comment::Entity as Comment;
pub use super::member::Entity as Member;
pub use super::photo::Entity as Photo;
pub use super::quote::Entity as Quote;
