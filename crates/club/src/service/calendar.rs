use chrono::{DateTime, Local, NaiveTime, Utc};
use log::info;
use model::{
    errors::ValidationError,
    ids::{GroupTypeId, TrainingId},
    training::{GroupTrainingType, Training, TrainingType},
};
use storage::{
    bookings::BookingStore, group_types::GroupTypeStore, rooms::RoomStore,
    trainings::TrainingStore, StoreError,
};
use thiserror::Error;

use super::trainers::Trainers;

/// Training administration and the booking admission rule.
#[derive(Clone)]
pub struct Calendar {
    trainings: TrainingStore,
    bookings: BookingStore,
    rooms: RoomStore,
    group_types: GroupTypeStore,
    trainers: Trainers,
}

impl Calendar {
    pub(crate) fn new(
        trainings: TrainingStore,
        bookings: BookingStore,
        rooms: RoomStore,
        group_types: GroupTypeStore,
        trainers: Trainers,
    ) -> Self {
        Calendar {
            trainings,
            bookings,
            rooms,
            group_types,
            trainers,
        }
    }

    pub fn add_training(&self, training: &Training) -> Result<(), TrainingError> {
        self.validate(training)?;
        self.trainings.add(training)?;
        info!(
            "scheduled {} training {} ({}-{})",
            training.training_type, training.id, training.start_time, training.end_time
        );
        Ok(())
    }

    pub fn update_training(&self, training: &Training) -> Result<(), TrainingError> {
        self.validate(training)?;
        self.trainings.update(training)?;
        Ok(())
    }

    /// Structural validation run on every save: the local rules plus the
    /// room authorization rule, which needs the trainer record.
    pub fn validate(&self, training: &Training) -> Result<(), TrainingError> {
        training.validate()?;
        if let Some(trainer_id) = training.trainer {
            let trainer = self
                .trainers
                .get(trainer_id)
                .ok_or(TrainingError::TrainerNotFound)?;
            if !trainer.works_in(training.room) {
                return Err(ValidationError::TrainerNotInRoom.into());
            }
        }
        Ok(())
    }

    pub fn get(&self, id: TrainingId) -> Option<Training> {
        self.trainings.get(id)
    }

    pub fn list(&self) -> Vec<Training> {
        self.trainings.list()
    }

    /// Deleting a training deletes its bookings.
    pub fn delete_training(&self, id: TrainingId) -> Result<(), TrainingError> {
        self.trainings.delete(id).ok_or(TrainingError::NotFound)?;
        let cascaded = self.bookings.delete_by_training(id);
        info!("deleted training {}, cascaded {} bookings", id, cascaded);
        Ok(())
    }

    pub fn add_group_type(&self, group_type: GroupTrainingType) {
        self.group_types.add(group_type);
    }

    pub fn group_type(&self, id: GroupTypeId) -> Option<GroupTrainingType> {
        self.group_types.get(id)
    }

    pub fn group_types(&self) -> Vec<GroupTrainingType> {
        self.group_types.list()
    }

    /// First filter of the listing query: some booking already sits inside
    /// the training's exact window.
    pub fn has_booking_in_window(&self, training: &Training) -> bool {
        self.bookings
            .exists_in_window(training.id, training.start_time, training.end_time)
    }

    /// Second filter of the listing query: total bookings stay below the
    /// room capacity.
    pub fn has_free_seats(&self, training: &Training) -> bool {
        self.bookings.count_for_training(training.id) < self.room_capacity(training)
    }

    /// Trainings starting at or after the given time that pass both
    /// filters above.
    pub fn available_trainings(&self, after: NaiveTime) -> Vec<Training> {
        self.trainings
            .find_starting_after(after)
            .into_iter()
            .filter(|t| !self.has_booking_in_window(t) && self.has_free_seats(t))
            .collect()
    }

    /// The admission rule. Pure read over current trainer/room/booking
    /// state; callers that insert afterwards must hold the training's
    /// booking lock across both steps.
    pub fn can_book(&self, training: &Training, at: DateTime<Utc>) -> bool {
        let time = at.with_timezone(&Local).time();
        let bookings_count = self
            .bookings
            .count_in_hours(training.id, training.hour_range());
        let capacity = self.room_capacity(training);

        // Break time is always blocked. Without a resolvable schedule
        // there is no break to hit; the per-type checks below decide.
        if let Some(schedule) = training.trainer.and_then(|id| self.trainers.schedule_of(id)) {
            if schedule.in_break(time) {
                return false;
            }
        }

        match training.training_type {
            TrainingType::Group => {
                let Some(trainer) = training.trainer else {
                    return false;
                };
                if !self
                    .trainers
                    .is_available(trainer, training.start_time, training.end_time)
                {
                    return false;
                }
                let Some(group_type) = training.group_type else {
                    return false;
                };
                // the session must belong to a recognized recurring slot:
                // another training, same trainer and label, containing window
                let has_slot = self
                    .trainings
                    .find_containing(trainer, group_type, training.start_time, training.end_time)
                    .iter()
                    .any(|t| t.id != training.id);
                if !has_slot {
                    return false;
                }
                return bookings_count < capacity;
            }
            TrainingType::Personal => {
                if bookings_count > 0 {
                    return false;
                }
                let Some(trainer) = training.trainer else {
                    return false;
                };
                if !self
                    .trainers
                    .is_available(trainer, training.start_time, training.end_time)
                {
                    return false;
                }
                // no early accept; falls through to the shared capacity check
            }
            TrainingType::Free => return bookings_count < capacity,
        }

        bookings_count < capacity
    }

    fn room_capacity(&self, training: &Training) -> usize {
        self.rooms
            .get(training.room)
            .map(|room| room.capacity as usize)
            .unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("training not found")]
    NotFound,
    #[error("trainer not found")]
    TrainerNotFound,
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Store(#[from] StoreError),
}
