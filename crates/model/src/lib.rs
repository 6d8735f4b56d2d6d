pub mod booking;
pub mod errors;
pub mod ids;
pub mod rooms;
pub mod schedule;
pub mod trainer;
pub mod training;
pub mod user;
