//! ECS Components игровых entity
//!
//! Организация по доменам:
//! - hound: гончая (маркер + изменяемое состояние преследования)
//! - player: преследуемый игрок (маркер)
//! Утки и их реестр живут в crate::ducks, состояния FSM в crate::behavior.

pub mod hound;
pub mod player;

// Re-exports для удобного импорта
pub use hound::*;
pub use player::*;
