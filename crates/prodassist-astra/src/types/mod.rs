//! Wire types for the Astra JSON Data API.

mod document;
mod find;

pub use document::AstraDocument;
pub use find::{ApiErrorDetail, ApiResponse, FindCommand, FindData, FindOptions, FindRequest};
