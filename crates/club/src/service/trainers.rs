use chrono::NaiveTime;
use eyre::{eyre, Result};
use log::info;
use model::{
    ids::{RoomId, TrainerId, UserId, WorkScheduleId},
    schedule::WorkSchedule,
    trainer::{Gender, Trainer},
};
use storage::{schedules::ScheduleStore, trainers::TrainerStore};

#[derive(Clone)]
pub struct Trainers {
    store: TrainerStore,
    schedules: ScheduleStore,
}

impl Trainers {
    pub(crate) fn new(store: TrainerStore, schedules: ScheduleStore) -> Self {
        Trainers { store, schedules }
    }

    /// Get-or-create behind the trainer-role hook. Idempotent: an existing
    /// profile is returned untouched.
    pub fn ensure_for(&self, user: UserId) -> Trainer {
        let trainer = self.store.ensure(user);
        info!("trainer profile {} for user {}", trainer.id, user);
        trainer
    }

    pub fn get(&self, id: TrainerId) -> Option<Trainer> {
        self.store.get(id)
    }

    pub fn get_by_user(&self, user: UserId) -> Option<Trainer> {
        self.store.get_by_user(user)
    }

    pub fn list(&self) -> Vec<Trainer> {
        self.store.list()
    }

    pub fn schedule_of(&self, trainer: TrainerId) -> Option<WorkSchedule> {
        self.store
            .get(trainer)?
            .work_schedule
            .and_then(|id| self.schedules.get(id))
    }

    /// A trainer without a work schedule is never available.
    pub fn is_available(&self, trainer: TrainerId, start: NaiveTime, end: NaiveTime) -> bool {
        match self.schedule_of(trainer) {
            Some(schedule) => schedule.is_available(start, end),
            None => false,
        }
    }

    pub fn assign_schedule(&self, trainer: TrainerId, schedule: WorkScheduleId) -> Result<()> {
        let mut trainer = self
            .store
            .get(trainer)
            .ok_or_else(|| eyre!("Trainer not found"))?;
        if self.schedules.get(schedule).is_none() {
            return Err(eyre!("Work schedule not found"));
        }
        trainer.work_schedule = Some(schedule);
        self.store.update(trainer)?;
        Ok(())
    }

    /// Clearing the reference keeps the trainer; they just stop being
    /// available.
    pub fn clear_schedule(&self, trainer: TrainerId) -> Result<()> {
        let mut trainer = self
            .store
            .get(trainer)
            .ok_or_else(|| eyre!("Trainer not found"))?;
        trainer.work_schedule = None;
        self.store.update(trainer)?;
        Ok(())
    }

    pub fn set_gender(&self, trainer: TrainerId, gender: Gender) -> Result<()> {
        let mut trainer = self
            .store
            .get(trainer)
            .ok_or_else(|| eyre!("Trainer not found"))?;
        trainer.gender = Some(gender);
        self.store.update(trainer)?;
        Ok(())
    }

    pub fn add_room(&self, trainer: TrainerId, room: RoomId) -> Result<()> {
        let mut trainer = self
            .store
            .get(trainer)
            .ok_or_else(|| eyre!("Trainer not found"))?;
        trainer.add_room(room);
        self.store.update(trainer)?;
        Ok(())
    }

    pub fn remove_room(&self, trainer: TrainerId, room: RoomId) -> Result<()> {
        let mut trainer = self
            .store
            .get(trainer)
            .ok_or_else(|| eyre!("Trainer not found"))?;
        trainer.remove_room(room);
        self.store.update(trainer)?;
        Ok(())
    }
}
