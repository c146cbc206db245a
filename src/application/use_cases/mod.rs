pub mod account;
pub mod appointment;
