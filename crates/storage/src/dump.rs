use model::{
    booking::Booking, rooms::Room, schedule::WorkSchedule, trainer::Trainer,
    training::GroupTrainingType, training::Training, user::User,
};
use serde::{Deserialize, Serialize};

use crate::Storage;

/// A point-in-time copy of every collection, for JSON export.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub schedules: Vec<WorkSchedule>,
    pub trainers: Vec<Trainer>,
    pub rooms: Vec<Room>,
    pub group_types: Vec<GroupTrainingType>,
    pub trainings: Vec<Training>,
    pub bookings: Vec<Booking>,
}

impl Storage {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            users: self.users.list(),
            schedules: self.schedules.list(),
            trainers: self.trainers.list(),
            rooms: self.rooms.list(),
            group_types: self.group_types.list(),
            trainings: self.trainings.list(),
            bookings: self.bookings.list(),
        }
    }
}
