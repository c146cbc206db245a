pub mod http;
pub mod notification;
pub mod persistence;
