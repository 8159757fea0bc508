/// The two states of the avatar's flight state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightMode {
    #[default]
    Idle,
    Flying,
}

impl FlightMode {
    /// Game-state value that asks for a flight to end with a reset.
    pub const RESET_GAME_STATE: i32 = 0;

    /// Decodes the controller's game-state field: only 1 means flying.
    #[must_use]
    pub fn from_game_state(game_state: i32) -> Self {
        if game_state == 1 {
            Self::Flying
        } else {
            Self::Idle
        }
    }

    #[must_use]
    pub fn is_flying(self) -> bool {
        self == Self::Flying
    }
}
