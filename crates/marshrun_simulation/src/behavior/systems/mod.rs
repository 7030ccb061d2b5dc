//! Hound behavior systems (transitions, movement, debug shapes).

pub mod debug;
pub mod fsm;
pub mod movement;
