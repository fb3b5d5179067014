pub mod client;
pub mod error;
pub mod types;

pub use client::{PublicationApi, PublicationClient};
pub use error::ApiError;
pub use types::{
    Pagination, PorStatus, Publication, PublicationFilters, PublicationPage, PublicationStats,
    PublicationStatus, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
