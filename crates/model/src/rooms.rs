use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::ids::RoomId;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub category: RoomCategory,
    pub capacity: u32,
}

impl Room {
    pub fn new(name: String, category: RoomCategory, capacity: u32) -> Room {
        Room {
            id: RoomId::new(),
            name,
            category,
            capacity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum RoomCategory {
    Gym,
    GroupFitness,
    Pool,
    Yoga,
}
