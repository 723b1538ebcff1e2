pub mod index_handlers;
pub mod user_handlers;

pub use index_handlers::{index, protected};
pub use user_handlers::{create_user, get_user, list_users};
