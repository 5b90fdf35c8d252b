//! Listing invariants:
//!
//! 1. Items only grow while a descriptor is active
//! 2. A new descriptor empties the list and resets the page to 1
//! 3. At most one of loading-initial / loading-more holds at a time
//! 4. `Exhausted` never requests another page

pub mod state;

pub use state::{ListPhase, ListState, Page};

use crate::domain::{DomainError, DomainResult};

/// Default number of games per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page the metadata service will serve
pub const MAX_PAGE_SIZE: u32 = 40;

/// Page size must be between 1 and `MAX_PAGE_SIZE`
pub fn validate_page_size(page_size: u32) -> DomainResult<u32> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(DomainError::InvariantViolation(format!(
            "Page size {} must be between 1 and {}",
            page_size, MAX_PAGE_SIZE
        )));
    }
    Ok(page_size)
}
