pub mod middleware;

pub use middleware::{require_login, AuthPolicy};
