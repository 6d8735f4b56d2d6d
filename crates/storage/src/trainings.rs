use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveTime;
use itertools::Itertools as _;
use model::{
    errors::ValidationError,
    ids::{GroupTypeId, RoomId, TrainerId, TrainingId},
    training::Training,
};
use parking_lot::RwLock;

use crate::StoreError;

#[derive(Clone, Default)]
pub struct TrainingStore {
    trainings: Arc<RwLock<BTreeMap<TrainingId, Training>>>,
}

impl TrainingStore {
    pub fn add(&self, training: &Training) -> Result<(), StoreError> {
        check_time_order(training)?;
        self.trainings
            .write()
            .insert(training.id, training.clone());
        Ok(())
    }

    pub fn update(&self, training: &Training) -> Result<(), StoreError> {
        check_time_order(training)?;
        let mut trainings = self.trainings.write();
        if !trainings.contains_key(&training.id) {
            return Err(StoreError::NotFound("training"));
        }
        trainings.insert(training.id, training.clone());
        Ok(())
    }

    pub fn get(&self, id: TrainingId) -> Option<Training> {
        self.trainings.read().get(&id).cloned()
    }

    pub fn list(&self) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .cloned()
            .sorted_by_key(|t| t.start_time)
            .collect()
    }

    pub fn delete(&self, id: TrainingId) -> Option<Training> {
        self.trainings.write().remove(&id)
    }

    pub fn find_by_room(&self, room: RoomId) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .filter(|t| t.room == room)
            .cloned()
            .collect()
    }

    pub fn find_by_trainer(&self, trainer: TrainerId) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .filter(|t| t.trainer == Some(trainer))
            .cloned()
            .collect()
    }

    /// Sessions of the same trainer and group label whose window fully
    /// contains the given interval. The caller decides whether the
    /// candidate itself counts.
    pub fn find_containing(
        &self,
        trainer: TrainerId,
        group_type: GroupTypeId,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .filter(|t| {
                t.trainer == Some(trainer)
                    && t.group_type == Some(group_type)
                    && t.start_time <= start
                    && t.end_time >= end
            })
            .cloned()
            .collect()
    }

    pub fn find_starting_after(&self, after: NaiveTime) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .filter(|t| t.start_time >= after)
            .cloned()
            .sorted_by_key(|t| t.start_time)
            .collect()
    }
}

fn check_time_order(training: &Training) -> Result<(), StoreError> {
    if training.start_time >= training.end_time {
        return Err(StoreError::Constraint(ValidationError::TimeOrder));
    }
    Ok(())
}
