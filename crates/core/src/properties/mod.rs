//! Properties module - domain models and traits.

mod properties_model;
mod properties_traits;

pub use properties_model::{AcquisitionMethod, InvestorShare, Property, PropertyStatus};
pub use properties_traits::PropertyRepositoryTrait;
