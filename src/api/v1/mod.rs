pub mod admin;
pub mod auth;
pub mod bookings;
pub mod grounds;
pub mod leagues;
pub mod matches;
pub mod news;
pub mod teams;
