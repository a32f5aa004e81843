//! Data models for tokodoc

mod attachment;
mod document;
mod session;

pub use attachment::{filename_is_image, parse_file_links, FileCategory, RemoteFileRef, IMAGE_EXTENSIONS};
pub use document::{filter_documents, format_area, page_count, page_slice, StoreDocument, PAGE_SIZE};
pub use session::{Session, SessionPersistence, HEAD_OFFICE_BRANCH};
