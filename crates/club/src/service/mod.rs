pub mod bookings;
pub mod calendar;
pub mod rooms;
pub mod schedules;
pub mod trainers;
pub mod users;
