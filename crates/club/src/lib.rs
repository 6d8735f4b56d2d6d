use chrono::{DateTime, Utc};
use log::info;
use model::{
    booking::Booking,
    ids::{BookingId, TrainingId, UserId},
};
use storage::Storage;

pub mod service;

pub use service::bookings::{BookError, Bookings};
pub use service::calendar::{Calendar, TrainingError};
pub use service::rooms::Rooms;
pub use service::schedules::Schedules;
pub use service::trainers::Trainers;
pub use service::users::{UserError, Users};

#[derive(Clone)]
pub struct Club {
    pub users: Users,
    pub schedules: Schedules,
    pub trainers: Trainers,
    pub rooms: Rooms,
    pub calendar: Calendar,
    pub bookings: Bookings,
}

impl Club {
    pub fn new(storage: Storage) -> Self {
        let trainers = Trainers::new(storage.trainers.clone(), storage.schedules.clone());
        let schedules = Schedules::new(storage.schedules.clone(), storage.trainers.clone());
        let users = Users::new(storage.users.clone(), trainers.clone());
        let calendar = Calendar::new(
            storage.trainings.clone(),
            storage.bookings.clone(),
            storage.rooms.clone(),
            storage.group_types.clone(),
            trainers.clone(),
        );
        let rooms = Rooms::new(
            storage.rooms.clone(),
            storage.trainings.clone(),
            storage.bookings.clone(),
        );
        let bookings = Bookings::new(storage.bookings, storage.users, calendar.clone());
        Club {
            users,
            schedules,
            trainers,
            rooms,
            calendar,
            bookings,
        }
    }

    /// Book a training for a client at the current time.
    pub fn book(&self, user: UserId, training: TrainingId) -> Result<Booking, BookError> {
        self.book_at(user, training, Utc::now())
    }

    /// High-level booking path: explicit validation first, then the
    /// guarded insert, which re-checks the rule inside the per-training
    /// critical section. Both layers enforce the rule on their own.
    pub fn book_at(
        &self,
        user: UserId,
        training: TrainingId,
        at: DateTime<Utc>,
    ) -> Result<Booking, BookError> {
        let booking = Booking::at(user, training, at);
        self.bookings.validate(&booking)?;
        self.bookings.add(booking.clone())?;
        info!("user {} booked training {}", user, training);
        Ok(booking)
    }

    pub fn cancel(&self, booking: BookingId) -> eyre::Result<Booking> {
        self.bookings.cancel(booking)
    }
}
