use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use chrono::{NaiveTime, Timelike as _};
use itertools::Itertools as _;
use model::{
    booking::Booking,
    ids::{BookingId, TrainingId, UserId},
};
use parking_lot::RwLock;

use crate::StoreError;

#[derive(Clone, Default)]
pub struct BookingStore {
    bookings: Arc<RwLock<BTreeMap<BookingId, Booking>>>,
}

impl BookingStore {
    /// The unique (user, training) index is checked under the write lock,
    /// so two racing inserts for the same pair cannot both land.
    pub fn add(&self, booking: Booking) -> Result<(), StoreError> {
        let mut bookings = self.bookings.write();
        if bookings
            .values()
            .any(|b| b.user == booking.user && b.training == booking.training)
        {
            return Err(StoreError::DuplicateBooking {
                user: booking.user,
                training: booking.training,
            });
        }
        bookings.insert(booking.id, booking);
        Ok(())
    }

    pub fn get(&self, id: BookingId) -> Option<Booking> {
        self.bookings.read().get(&id).cloned()
    }

    pub fn list(&self) -> Vec<Booking> {
        self.bookings
            .read()
            .values()
            .cloned()
            .sorted_by_key(|b| b.booking_time)
            .collect()
    }

    /// Bookings whose local time of day falls in the given hour bucket.
    pub fn count_in_hours(&self, training: TrainingId, hours: RangeInclusive<u32>) -> usize {
        self.bookings
            .read()
            .values()
            .filter(|b| b.training == training && hours.contains(&b.time_of_day().hour()))
            .count()
    }

    pub fn count_for_training(&self, training: TrainingId) -> usize {
        self.bookings
            .read()
            .values()
            .filter(|b| b.training == training)
            .count()
    }

    pub fn count_for_trainings(&self, trainings: &[TrainingId]) -> usize {
        self.bookings
            .read()
            .values()
            .filter(|b| trainings.contains(&b.training))
            .count()
    }

    /// Some booking for the training lands inside [start, end], inclusive.
    pub fn exists_in_window(&self, training: TrainingId, start: NaiveTime, end: NaiveTime) -> bool {
        self.bookings.read().values().any(|b| {
            b.training == training && {
                let at = b.time_of_day();
                start <= at && at <= end
            }
        })
    }

    pub fn find_by_user(&self, user: UserId) -> Vec<Booking> {
        self.bookings
            .read()
            .values()
            .filter(|b| b.user == user)
            .cloned()
            .sorted_by_key(|b| b.booking_time)
            .collect()
    }

    pub fn find_by_training(&self, training: TrainingId) -> Vec<Booking> {
        self.bookings
            .read()
            .values()
            .filter(|b| b.training == training)
            .cloned()
            .sorted_by_key(|b| b.booking_time)
            .collect()
    }

    pub fn delete(&self, id: BookingId) -> Option<Booking> {
        self.bookings.write().remove(&id)
    }

    /// Cascade used when a training is removed.
    pub fn delete_by_training(&self, training: TrainingId) -> usize {
        let mut bookings = self.bookings.write();
        let before = bookings.len();
        bookings.retain(|_, b| b.training != training);
        before - bookings.len()
    }
}
