use chrono::{DateTime, Local, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{BookingId, TrainingId, UserId};

/// A client's reservation against one training.
/// Never mutated after creation; cancellation deletes it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    pub id: BookingId,
    pub user: UserId,
    pub training: TrainingId,
    pub booking_time: DateTime<Utc>,
}

impl Booking {
    pub fn new(user: UserId, training: TrainingId) -> Booking {
        Booking::at(user, training, Utc::now())
    }

    pub fn at(user: UserId, training: TrainingId, booking_time: DateTime<Utc>) -> Booking {
        Booking {
            id: BookingId::new(),
            user,
            training,
            booking_time,
        }
    }

    /// Local time of day the schedule windows are matched against.
    pub fn time_of_day(&self) -> NaiveTime {
        self.booking_time.with_timezone(&Local).time()
    }
}
