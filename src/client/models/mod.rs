//! Registry data models
//!
//! Compile-time shapes of the search input and of the paginated response.
//! The runtime counterparts live in [`crate::schema`].

mod input;
mod organization;
mod page;

pub use input::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, SearchInput};
pub use organization::{Bfo, Organization, StatusCode};
pub use page::{Pageable, SearchOutput, Sort};
