pub mod ports;
pub mod event_bus;
pub mod providers;
pub mod controller;
