// Re-export all models from their respective modules
pub mod catalog;
pub mod forms;
pub mod profile;
pub mod session;
pub mod user;

// Re-export commonly used models
pub use catalog::*;
pub use forms::{LoginForm, RegisterForm, SearchForm};
pub use profile::*;
pub use session::*;
pub use user::*;
