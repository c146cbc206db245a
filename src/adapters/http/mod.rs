pub mod app_error_impl;
pub mod app_state;
pub mod session;
pub mod views;
pub mod routes;
