//! FSM гончей: состояния и тюнинг

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Дистанция, на которой гончая начинает предъявлять добычу (метры)
pub const PRESENT_RADIUS: f32 = 1.8;

/// Длительность предъявления добычи (секунды)
pub const PRESENT_DURATION: f32 = 2.0;

/// Длительность замаха перед прыжком (секунды)
pub const WINDUP_DURATION: f32 = 1.0;

/// Минимальное время полёта после прыжка, до первой проверки земли (секунды)
pub const LAUNCH_AIR_TIME: f32 = 1.0;

/// Величина импульса прыжка
pub const LAUNCH_IMPULSE: f32 = 2000.0;

/// Вертикальное смещение точки прицеливания прыжка: примерно голова игрока (метры)
pub const LAUNCH_ARC_OFFSET: f32 = 1.0;

/// Состояния FSM гончей
///
/// Payload каждого варианта: всё, что состояние получает при
/// конструировании. Таймеры и флаги отставленного состояния не
/// переживают переход.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum HoundState {
    /// Кружит вокруг игрока по касательной, зигзагами, с разгоном
    HuntPlayer,

    /// Бежит по прямой к найденной утке
    GetDuck {
        target: Entity,
    },

    /// Догнала утку: пауза с предъявлением, утка потребляется по таймеру
    PresentDuck {
        target: Entity,
        /// Оставшееся время предъявления (секунды)
        time_left: f32,
        /// Голос уже подан (подаётся ровно один раз)
        announced: bool,
    },

    /// Замах: гончая замерла перед прыжком на игрока
    PrepareToAttack {
        time_left: f32,
        announced: bool,
    },

    /// Прыжок: одноразовый импульс, затем ожидание приземления
    Launch {
        /// Минимальное оставшееся время полёта (секунды)
        time_left: f32,
        /// Импульс уже применён
        has_launched: bool,
    },
}

impl Default for HoundState {
    fn default() -> Self {
        Self::HuntPlayer
    }
}

impl HoundState {
    pub fn get_duck(target: Entity) -> Self {
        Self::GetDuck { target }
    }

    pub fn present_duck(target: Entity) -> Self {
        Self::PresentDuck {
            target,
            time_left: PRESENT_DURATION,
            announced: false,
        }
    }

    pub fn prepare_to_attack() -> Self {
        Self::PrepareToAttack {
            time_left: WINDUP_DURATION,
            announced: false,
        }
    }

    pub fn launch() -> Self {
        Self::Launch {
            time_left: LAUNCH_AIR_TIME,
            has_launched: false,
        }
    }
}

/// Тюнинг гончей
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct HoundConfig {
    /// Максимальная скорость преследования (m/s)
    pub max_speed: f32,
    /// Разгон во время охоты (m/s²)
    pub hunt_acceleration: f32,
    /// Угол увода касательной к игроку (градусы)
    pub hunt_strength: f32,
    /// Минимум таймера зигзага (секунды)
    pub min_zig_time: f32,
    /// Максимум таймера зигзага (секунды)
    pub max_zig_time: f32,
    /// Радиус чутья на игрока (метры)
    pub player_scent_radius: f32,
    /// Радиус чутья на сбитых уток (метры)
    pub duck_scent_radius: f32,
}

impl Default for HoundConfig {
    fn default() -> Self {
        Self {
            max_speed: 10.0,
            hunt_acceleration: 1.0,
            hunt_strength: 30.0, // заметный увод к игроку, но орбита не схлопывается
            min_zig_time: 0.5,
            max_zig_time: 2.0,
            player_scent_radius: 5.0,
            duck_scent_radius: 12.0,
        }
    }
}
