use std::collections::HashMap;
use std::sync::Arc;

use eyre::{eyre, Result};
use log::info;
use model::{
    booking::Booking,
    errors::ValidationError,
    ids::{BookingId, TrainingId, UserId},
};
use parking_lot::Mutex;
use storage::{bookings::BookingStore, users::UserStore, StoreError};
use thiserror::Error;

use super::calendar::Calendar;

/// Booking admission. Admission and insertion for one training are a
/// single critical section, serialized on a per-training mutex.
#[derive(Clone)]
pub struct Bookings {
    store: BookingStore,
    users: UserStore,
    calendar: Calendar,
    locks: Arc<Mutex<HashMap<TrainingId, Arc<Mutex<()>>>>>,
}

impl Bookings {
    pub(crate) fn new(store: BookingStore, users: UserStore, calendar: Calendar) -> Self {
        Bookings {
            store,
            users,
            calendar,
            locks: Arc::default(),
        }
    }

    /// The booking rule, re-checkable on its own: the user is a client and
    /// the training admits a booking at the given time.
    pub fn validate(&self, booking: &Booking) -> Result<(), BookError> {
        let user = self.users.get(booking.user).ok_or(BookError::UserNotFound)?;
        if !user.is_client() {
            return Err(ValidationError::NotClient.into());
        }
        let training = self
            .calendar
            .get(booking.training)
            .ok_or(BookError::TrainingNotFound)?;
        if !self.calendar.can_book(&training, booking.booking_time) {
            return Err(ValidationError::NotBookable.into());
        }
        Ok(())
    }

    /// Pre-insert guard. Every booking goes through here, including ones
    /// built outside the high-level path: the rule is re-run inside the
    /// critical section and the insert happens while it is still held, so
    /// two racing attempts at the last seat cannot both pass. The store's
    /// unique (user, training) index stays as the last line of defense.
    pub fn add(&self, booking: Booking) -> Result<(), BookError> {
        let lock = self.lock_for(booking.training);
        let _guard = lock.lock();
        self.validate(&booking)?;
        self.store.add(booking)?;
        Ok(())
    }

    /// Cancellation deletes the booking; nothing else is touched.
    pub fn cancel(&self, id: BookingId) -> Result<Booking> {
        let booking = self
            .store
            .delete(id)
            .ok_or_else(|| eyre!("Booking not found"))?;
        info!("cancelled booking {} of user {}", booking.id, booking.user);
        Ok(booking)
    }

    pub fn get(&self, id: BookingId) -> Option<Booking> {
        self.store.get(id)
    }

    pub fn find_by_user(&self, user: UserId) -> Vec<Booking> {
        self.store.find_by_user(user)
    }

    pub fn find_by_training(&self, training: TrainingId) -> Vec<Booking> {
        self.store.find_by_training(training)
    }

    fn lock_for(&self, training: TrainingId) -> Arc<Mutex<()>> {
        self.locks.lock().entry(training).or_default().clone()
    }
}

#[derive(Debug, Error)]
pub enum BookError {
    #[error("user not found")]
    UserNotFound,
    #[error("training not found")]
    TrainingNotFound,
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Store(#[from] StoreError),
}
