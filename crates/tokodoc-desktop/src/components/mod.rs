//! UI components

mod document_table;
mod login;
mod modals;
mod store_form;
mod toast;
mod upload_section;

pub use document_table::DocumentTable;
pub use login::Login;
pub use modals::{ErrorModal, LogoutModal, SuccessModal, WarningModal};
pub use store_form::StoreForm;
pub use toast::Toast;
pub use upload_section::UploadSection;
