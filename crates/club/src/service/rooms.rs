use eyre::{eyre, Result};
use log::info;
use model::{ids::RoomId, rooms::Room};
use storage::{bookings::BookingStore, rooms::RoomStore, trainings::TrainingStore, StoreError};

#[derive(Clone)]
pub struct Rooms {
    store: RoomStore,
    trainings: TrainingStore,
    bookings: BookingStore,
}

impl Rooms {
    pub(crate) fn new(store: RoomStore, trainings: TrainingStore, bookings: BookingStore) -> Self {
        Rooms {
            store,
            trainings,
            bookings,
        }
    }

    pub fn add(&self, room: Room) {
        self.store.add(room);
    }

    pub fn update(&self, room: Room) -> Result<(), StoreError> {
        self.store.update(room)
    }

    pub fn get(&self, id: RoomId) -> Option<Room> {
        self.store.get(id)
    }

    pub fn list(&self) -> Vec<Room> {
        self.store.list()
    }

    /// Capacity minus bookings across all of the room's trainings.
    pub fn available_seats(&self, room: RoomId) -> Result<u32> {
        let room = self.store.get(room).ok_or_else(|| eyre!("Room not found"))?;
        let trainings: Vec<_> = self
            .trainings
            .find_by_room(room.id)
            .into_iter()
            .map(|t| t.id)
            .collect();
        let booked = self.bookings.count_for_trainings(&trainings) as u32;
        Ok(room.capacity.saturating_sub(booked))
    }

    /// Removing a room removes its trainings and their bookings.
    pub fn delete(&self, id: RoomId) -> Result<()> {
        self.store.delete(id).ok_or_else(|| eyre!("Room not found"))?;
        let mut cascaded = 0;
        for training in self.trainings.find_by_room(id) {
            self.trainings.delete(training.id);
            cascaded += self.bookings.delete_by_training(training.id);
        }
        info!("deleted room {}, cascaded {} bookings", id, cascaded);
        Ok(())
    }
}
