pub mod appointment;
pub mod session;
pub mod user;
