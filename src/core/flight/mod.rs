pub mod controls;
pub mod idle;
pub mod limits;
pub mod mode;
pub mod motion;
pub mod pose;
pub mod state;
pub mod status;

pub use controls::PilotInputs;
pub use idle::step_idle;
pub use limits::FlightLimits;
pub use mode::FlightMode;
pub use motion::step_flying;
pub use pose::{AvatarPose, perch_transform};
pub use state::{Basis, FlightState, WingState};
pub use status::{AltitudeGuard, FlightStepReport};
