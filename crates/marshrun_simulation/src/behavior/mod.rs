//! Поведенческое ядро гончей
//!
//! Конечный автомат: HuntPlayer → GetDuck → PresentDuck → HuntPlayer,
//! и ветка атаки HuntPlayer → PrepareToAttack → Launch → HuntPlayer.
//! Ровно одно активное состояние на гончую; переход заменяет вариант
//! целиком, без частичной мутации отставленного состояния.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::fsm::{HoundConfig, HoundState};
pub use events::{BarkKind, BarkRequested, DuckRetrieved};
pub use systems::debug::DebugDraw;

/// Метка поведенческого набора систем (физика упорядочивается после него)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BehaviorSet;

/// Behavior Plugin
///
/// Регистрирует системы гончей в FixedUpdate. Порядок выполнения:
/// 1. hound_state_transitions: проверка переходов, строго до движения
/// 2. hound_movement: активное состояние → velocity
/// 3. collect_debug_shapes: фигуры для внешнего оверлея
pub struct BehaviorPlugin;

impl Plugin for BehaviorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::ducks::DuckRegistry>()
            .init_resource::<DebugDraw>()
            .add_event::<BarkRequested>()
            .add_event::<DuckRetrieved>()
            .add_systems(
                FixedUpdate,
                (
                    systems::fsm::hound_state_transitions,
                    systems::movement::hound_movement,
                    systems::debug::collect_debug_shapes,
                )
                    .chain() // Последовательное выполнение для детерминизма
                    .in_set(BehaviorSet),
            );
    }
}
