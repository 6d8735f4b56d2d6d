use serde::{Deserialize, Serialize};

use crate::ids::{RoomId, TrainerId, UserId, WorkScheduleId};

/// Trainer profile attached to a user with the trainer role.
/// Created by the role hook, so everything but the user link starts empty.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Trainer {
    pub id: TrainerId,
    pub user: UserId,
    pub gender: Option<Gender>,
    pub work_schedule: Option<WorkScheduleId>,
    rooms: Vec<RoomId>,
}

impl Trainer {
    pub fn new(user: UserId) -> Trainer {
        Trainer {
            id: TrainerId::new(),
            user,
            gender: None,
            work_schedule: None,
            rooms: Vec::new(),
        }
    }

    pub fn add_room(&mut self, room: RoomId) {
        if !self.rooms.contains(&room) {
            self.rooms.push(room);
        }
    }

    pub fn remove_room(&mut self, room: RoomId) {
        self.rooms.retain(|id| *id != room);
    }

    pub fn works_in(&self, room: RoomId) -> bool {
        self.rooms.contains(&room)
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Gender {
    Male,
    Female,
}
