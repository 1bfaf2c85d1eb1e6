//! Data models: virtual files and the text buffer behind the editing surface.

pub mod file_collection;
pub mod file_record;
pub mod text_buffer;

pub use file_collection::FileCollection;
pub use file_record::{extension_of, FileIcon, FileId, FileRecord};
pub use text_buffer::{slice_to_cow, TextBuffer};
