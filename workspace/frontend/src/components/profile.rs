pub mod profile_edit;
pub mod profile_header;

pub use profile_edit::ProfileEdit;
pub use profile_header::ProfileHeader;
