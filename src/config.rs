use crate::ship::Roster;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
pub const SHIP_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 3, 2];

/// The standard fleet as a validated roster.
pub fn standard_roster() -> Roster {
    Roster::from_checked(SHIP_LENGTHS.to_vec())
}
