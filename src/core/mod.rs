pub mod data;
pub mod flight;
