//! Allocation module - derives ledger entries from investor assignments.

mod allocation_policy;
mod allocation_service;


pub use allocation_policy::AllocationPolicy;
pub use allocation_service::{AllocationService, AllocationServiceTrait};
