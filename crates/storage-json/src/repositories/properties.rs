use std::sync::Arc;

use crate::repositories::Collection;
use crate::store::KeyValueStore;
use propfolio_core::constants::PROPERTIES_KEY;
use propfolio_core::properties::{Property, PropertyRepositoryTrait};
use propfolio_core::Result;

/// Property repository over the key-value store.
pub struct KvPropertyRepository {
    collection: Collection<Property>,
}

impl KvPropertyRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, PROPERTIES_KEY),
        }
    }
}

impl PropertyRepositoryTrait for KvPropertyRepository {
    fn get_property_by_id(&self, property_id: &str) -> Result<Option<Property>> {
        Ok(self
            .collection
            .load()?
            .into_iter()
            .find(|p| p.id == property_id))
    }

    fn get_properties(&self) -> Result<Vec<Property>> {
        self.collection.load()
    }

    fn save_property(&self, property: Property) -> Result<Property> {
        self.collection.mutate(|properties| {
            match properties.iter_mut().find(|p| p.id == property.id) {
                Some(existing) => *existing = property.clone(),
                None => properties.push(property.clone()),
            }
            property
        })
    }

    fn delete_property(&self, property_id: &str) -> Result<()> {
        self.collection
            .mutate(|properties| properties.retain(|p| p.id != property_id))
    }
}
