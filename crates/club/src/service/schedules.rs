use eyre::{eyre, Result};
use log::info;
use model::{ids::WorkScheduleId, schedule::WorkSchedule};
use storage::{schedules::ScheduleStore, trainers::TrainerStore};

#[derive(Clone)]
pub struct Schedules {
    store: ScheduleStore,
    trainers: TrainerStore,
}

impl Schedules {
    pub(crate) fn new(store: ScheduleStore, trainers: TrainerStore) -> Self {
        Schedules { store, trainers }
    }

    pub fn add(&self, schedule: WorkSchedule) -> Result<()> {
        schedule.validate()?;
        self.store.add(schedule)?;
        Ok(())
    }

    pub fn update(&self, schedule: WorkSchedule) -> Result<()> {
        schedule.validate()?;
        self.store.update(schedule)?;
        Ok(())
    }

    pub fn get(&self, id: WorkScheduleId) -> Option<WorkSchedule> {
        self.store.get(id)
    }

    pub fn list(&self) -> Vec<WorkSchedule> {
        self.store.list()
    }

    /// Trainers referencing the schedule keep their profile; only the
    /// reference is cleared.
    pub fn delete(&self, id: WorkScheduleId) -> Result<()> {
        self.store
            .delete(id)
            .ok_or_else(|| eyre!("Work schedule not found"))?;
        let cleared = self.trainers.clear_schedule(id);
        info!("deleted schedule {}, detached {} trainers", id, cleared);
        Ok(())
    }
}
