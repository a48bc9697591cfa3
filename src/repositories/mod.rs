pub mod bookings;
pub mod grounds;
pub mod leagues;
pub mod matches;
pub mod news;
pub mod reviews;
pub mod sessions;
pub mod teams;
pub mod users;
