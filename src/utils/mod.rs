pub mod api;
pub mod observer;
pub mod scroll;
pub mod tracking;
