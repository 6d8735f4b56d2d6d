pub mod bookings;
pub mod dump;
pub mod group_types;
pub mod rooms;
pub mod schedules;
pub mod trainers;
pub mod trainings;
pub mod users;

use model::{
    errors::ValidationError,
    ids::{TrainingId, UserId},
};
use thiserror::Error;

use bookings::BookingStore;
use group_types::GroupTypeStore;
use rooms::RoomStore;
use schedules::ScheduleStore;
use trainers::TrainerStore;
use trainings::TrainingStore;
use users::UserStore;

/// Write failures raised by the store itself, beneath application-level
/// validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {user} already booked training {training}")]
    DuplicateBooking { user: UserId, training: TrainingId },
    #[error("username is already taken: {0}")]
    DuplicateUsername(String),
    #[error("constraint violated: {0}")]
    Constraint(#[from] ValidationError),
    #[error("{0} not found")]
    NotFound(&'static str),
}

#[derive(Clone, Default)]
pub struct Storage {
    pub users: UserStore,
    pub schedules: ScheduleStore,
    pub trainers: TrainerStore,
    pub rooms: RoomStore,
    pub group_types: GroupTypeStore,
    pub trainings: TrainingStore,
    pub bookings: BookingStore,
}

impl Storage {
    pub fn new() -> Self {
        Storage::default()
    }
}
