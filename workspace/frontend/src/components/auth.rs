pub mod auth_layout;
pub mod credentials_form;

pub use auth_layout::AuthLayout;
pub use credentials_form::CredentialsForm;
