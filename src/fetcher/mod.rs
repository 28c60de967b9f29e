pub mod client;
pub mod decode;
pub mod errors;
pub mod types;

pub use client::{fetch, fetch_document, get_client};
pub use errors::FetchError;
pub use types::{Charset, PageResponse};
