//! FSM components

pub mod fsm;


// Re-export all components
pub use fsm::*;
