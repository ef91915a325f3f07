pub mod file_name;
pub mod layout;
pub mod request;
pub mod template;
pub mod variables;

pub use crate::domain::DomainError;
pub use file_name::FileNamePair;
pub use layout::ProjectLayout;
pub use request::ProjectRequest;
pub use template::Template;
pub use variables::VariableSet;
