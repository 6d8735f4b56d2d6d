use std::collections::BTreeMap;
use std::sync::Arc;

use log::info;
use model::{
    ids::{TrainerId, UserId, WorkScheduleId},
    trainer::Trainer,
};
use parking_lot::RwLock;

use crate::StoreError;

#[derive(Clone, Default)]
pub struct TrainerStore {
    trainers: Arc<RwLock<BTreeMap<TrainerId, Trainer>>>,
}

impl TrainerStore {
    pub fn add(&self, trainer: Trainer) {
        self.trainers.write().insert(trainer.id, trainer);
    }

    pub fn update(&self, trainer: Trainer) -> Result<(), StoreError> {
        let mut trainers = self.trainers.write();
        if !trainers.contains_key(&trainer.id) {
            return Err(StoreError::NotFound("trainer"));
        }
        trainers.insert(trainer.id, trainer);
        Ok(())
    }

    pub fn get(&self, id: TrainerId) -> Option<Trainer> {
        self.trainers.read().get(&id).cloned()
    }

    /// Idempotent get-or-create for the role hook. Runs under the write
    /// lock so two racing saves of the same user cannot double-create.
    pub fn ensure(&self, user: UserId) -> Trainer {
        let mut trainers = self.trainers.write();
        if let Some(trainer) = trainers.values().find(|t| t.user == user) {
            return trainer.clone();
        }
        let trainer = Trainer::new(user);
        trainers.insert(trainer.id, trainer.clone());
        trainer
    }

    pub fn get_by_user(&self, user: UserId) -> Option<Trainer> {
        self.trainers
            .read()
            .values()
            .find(|t| t.user == user)
            .cloned()
    }

    pub fn list(&self) -> Vec<Trainer> {
        self.trainers.read().values().cloned().collect()
    }

    pub fn delete(&self, id: TrainerId) -> Option<Trainer> {
        self.trainers.write().remove(&id)
    }

    /// Deleting a work schedule keeps the trainers, only the reference is
    /// cleared.
    pub fn clear_schedule(&self, schedule: WorkScheduleId) -> usize {
        let mut trainers = self.trainers.write();
        let mut cleared = 0;
        for trainer in trainers.values_mut() {
            if trainer.work_schedule == Some(schedule) {
                trainer.work_schedule = None;
                cleared += 1;
            }
        }
        if cleared > 0 {
            info!("cleared schedule {} from {} trainers", schedule, cleared);
        }
        cleared
    }
}
