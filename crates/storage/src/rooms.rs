use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools as _;
use model::{ids::RoomId, rooms::Room};
use parking_lot::RwLock;

use crate::StoreError;

#[derive(Clone, Default)]
pub struct RoomStore {
    rooms: Arc<RwLock<BTreeMap<RoomId, Room>>>,
}

impl RoomStore {
    pub fn add(&self, room: Room) {
        self.rooms.write().insert(room.id, room);
    }

    pub fn update(&self, room: Room) -> Result<(), StoreError> {
        let mut rooms = self.rooms.write();
        if !rooms.contains_key(&room.id) {
            return Err(StoreError::NotFound("room"));
        }
        rooms.insert(room.id, room);
        Ok(())
    }

    pub fn get(&self, id: RoomId) -> Option<Room> {
        self.rooms.read().get(&id).cloned()
    }

    pub fn list(&self) -> Vec<Room> {
        self.rooms
            .read()
            .values()
            .cloned()
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    pub fn delete(&self, id: RoomId) -> Option<Room> {
        self.rooms.write().remove(&id)
    }
}
