mod credentials;
mod engine;
mod password;

pub use credentials::Credentials;
pub use engine::DatabaseEngine;
pub use password::Password;
