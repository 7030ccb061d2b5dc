//! Physics simulation module
//!
//! Kinematic контроллер: гравитация, probe земли, интеграция velocity.
//! Rapier используем для коллайдеров и velocity sync, силы не используем.

pub mod movement;

// Re-export основных типов
pub use movement::{
    spawn_hound, spawn_player, KinematicController, KinematicControllerPlugin, KinematicSet,
    PhysicsBody, GROUND_PROBE_DISTANCE,
};
