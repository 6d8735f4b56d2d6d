use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools as _;
use model::{ids::GroupTypeId, training::GroupTrainingType};
use parking_lot::RwLock;

#[derive(Clone, Default)]
pub struct GroupTypeStore {
    group_types: Arc<RwLock<BTreeMap<GroupTypeId, GroupTrainingType>>>,
}

impl GroupTypeStore {
    pub fn add(&self, group_type: GroupTrainingType) {
        self.group_types.write().insert(group_type.id, group_type);
    }

    pub fn get(&self, id: GroupTypeId) -> Option<GroupTrainingType> {
        self.group_types.read().get(&id).cloned()
    }

    pub fn list(&self) -> Vec<GroupTrainingType> {
        self.group_types
            .read()
            .values()
            .cloned()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    pub fn delete(&self, id: GroupTypeId) -> Option<GroupTrainingType> {
        self.group_types.write().remove(&id)
    }
}
