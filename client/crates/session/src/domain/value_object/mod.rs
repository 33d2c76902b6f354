pub mod credentials;
pub mod email;
pub mod password;

pub use credentials::{AuthMode, Credentials, ValidatedCredentials};
pub use email::Email;
pub use password::{Password, PasswordPolicy};
