//! Данные для внешнего debug-оверлея
//!
//! Симуляция только публикует фигуры; рисует их оверлей снаружи.
//! Набор очищается и наполняется каждый тик, пока enabled.

use bevy::prelude::*;

use crate::behavior::components::fsm::{HoundConfig, HoundState};
use crate::components::Hound;
use crate::ducks::Duck;

/// Цвет отладочной фигуры
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    Blue,
    Yellow,
}

/// Фигура для оверлея
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DebugShape {
    WireSphere {
        center: Vec3,
        radius: f32,
        color: DebugColor,
    },
    Line {
        from: Vec3,
        to: Vec3,
        color: DebugColor,
    },
}

/// Resource с фигурами текущего тика
#[derive(Resource, Debug, Default)]
pub struct DebugDraw {
    pub enabled: bool,
    pub shapes: Vec<DebugShape>,
}

/// Система: состояние гончей → фигуры оверлея
///
/// HuntPlayer: два радиуса чутья (утки синим, игрок жёлтым).
/// GetDuck: линия до цели. Остальные состояния не рисуют ничего.
pub fn collect_debug_shapes(
    mut draw: ResMut<DebugDraw>,
    hounds: Query<(&HoundState, &HoundConfig, &Transform), With<Hound>>,
    ducks: Query<&Transform, (With<Duck>, Without<Hound>)>,
) {
    if !draw.enabled {
        return;
    }

    draw.shapes.clear();

    for (state, config, transform) in hounds.iter() {
        match state {
            HoundState::HuntPlayer => {
                draw.shapes.push(DebugShape::WireSphere {
                    center: transform.translation,
                    radius: config.duck_scent_radius,
                    color: DebugColor::Blue,
                });
                draw.shapes.push(DebugShape::WireSphere {
                    center: transform.translation,
                    radius: config.player_scent_radius,
                    color: DebugColor::Yellow,
                });
            }

            HoundState::GetDuck { target } => {
                if let Ok(duck_tf) = ducks.get(*target) {
                    draw.shapes.push(DebugShape::Line {
                        from: transform.translation,
                        to: duck_tf.translation,
                        color: DebugColor::Blue,
                    });
                }
            }

            _ => {}
        }
    }
}
