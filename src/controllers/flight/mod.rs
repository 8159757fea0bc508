pub mod clock;
pub mod ports;
pub mod simulator;

pub use clock::{FrameClock, FrameTicks};
pub use simulator::FlightSimulator;
