pub mod author;
pub mod comment;
pub mod file;
pub mod purchase;
pub mod user;

pub use author::Author;
pub use comment::Comment;
pub use file::StoredFile;
pub use purchase::Purchase;
pub use user::User;
