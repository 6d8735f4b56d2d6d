use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools as _;
use model::{ids::WorkScheduleId, schedule::WorkSchedule};
use parking_lot::RwLock;

use crate::StoreError;

#[derive(Clone, Default)]
pub struct ScheduleStore {
    schedules: Arc<RwLock<BTreeMap<WorkScheduleId, WorkSchedule>>>,
}

impl ScheduleStore {
    pub fn add(&self, schedule: WorkSchedule) -> Result<(), StoreError> {
        schedule.validate()?;
        self.schedules.write().insert(schedule.id, schedule);
        Ok(())
    }

    pub fn update(&self, schedule: WorkSchedule) -> Result<(), StoreError> {
        schedule.validate()?;
        let mut schedules = self.schedules.write();
        if !schedules.contains_key(&schedule.id) {
            return Err(StoreError::NotFound("work schedule"));
        }
        schedules.insert(schedule.id, schedule);
        Ok(())
    }

    pub fn get(&self, id: WorkScheduleId) -> Option<WorkSchedule> {
        self.schedules.read().get(&id).copied()
    }

    pub fn list(&self) -> Vec<WorkSchedule> {
        self.schedules
            .read()
            .values()
            .copied()
            .sorted_by_key(|s| s.start_time)
            .collect()
    }

    pub fn delete(&self, id: WorkScheduleId) -> Option<WorkSchedule> {
        self.schedules.write().remove(&id)
    }
}
