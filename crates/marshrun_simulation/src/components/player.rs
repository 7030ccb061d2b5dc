//! Маркер преследуемого игрока

use bevy::prelude::*;

/// Преследуемый игрок (pursued actor)
///
/// Позиция и направление взгляда читаются из Transform; управление
/// живёт снаружи симуляции.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PursuedPlayer;
