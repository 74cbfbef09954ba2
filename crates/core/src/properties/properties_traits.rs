use crate::errors::Result;
use crate::properties::properties_model::Property;

/// Trait defining the contract for Property repository operations.
///
/// The ledger core consumes the property store through this seam; it never
/// owns property lifecycle beyond reading shares and sale outcomes.
pub trait PropertyRepositoryTrait: Send + Sync {
    fn get_property_by_id(&self, property_id: &str) -> Result<Option<Property>>;
    fn get_properties(&self) -> Result<Vec<Property>>;
    fn save_property(&self, property: Property) -> Result<Property>;
    fn delete_property(&self, property_id: &str) -> Result<()>;
}
