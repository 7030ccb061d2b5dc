//! Компоненты гончей: маркер + изменяемое состояние преследования

use bevy::prelude::*;

use crate::behavior::components::fsm::{HoundConfig, HoundState};
use crate::physics::{KinematicController, PhysicsBody};

/// Гончая (the pursuer), базовый маркер
///
/// Автоматически добавляет тюнинг, состояние преследования, FSM и
/// kinematic физику через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(HoundConfig, PursuitMotion, HoundState, PhysicsBody, KinematicController)]
pub struct Hound;

/// Изменяемое состояние преследования
///
/// Живёт на entity гончей и переживает смену состояний FSM: скорость
/// не сбрасывается при переходе, зигзаг продолжается с того же места.
///
/// Инварианты:
/// - 0 ≤ speed ≤ max_speed (clamp в [`PursuitMotion::accelerate`])
/// - zig_timer пересеивается в [min_zig_time, max_zig_time) ровно в момент
///   пересечения нуля вниз, одновременно с переворотом is_zigging
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PursuitMotion {
    /// Текущая скорость (m/s)
    pub speed: f32,
    /// Обратный отсчёт до смены стороны зигзага (секунды)
    pub zig_timer: f32,
    /// Текущая сторона зигзага
    pub is_zigging: bool,
}

impl Default for PursuitMotion {
    fn default() -> Self {
        Self {
            speed: 2.0, // базовая скорость рыси
            zig_timer: 1.0,
            is_zigging: false,
        }
    }
}

impl PursuitMotion {
    /// Разгон во время охоты, с clamp на максимум.
    pub fn accelerate(&mut self, config: &HoundConfig, delta: f32) {
        self.speed = (self.speed + config.hunt_acceleration * delta).min(config.max_speed);
    }

    /// Тик зигзага: отсчёт вниз, на пересечении нуля пересев таймера
    /// из RNG и переворот стороны.
    pub fn tick_zig<R: rand::Rng>(&mut self, config: &HoundConfig, delta: f32, rng: &mut R) {
        self.zig_timer -= delta;

        if self.zig_timer < 0.0 {
            self.zig_timer = rng.gen_range(config.min_zig_time..config.max_zig_time);
            self.is_zigging = !self.is_zigging;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_accelerate_clamps_to_max_speed() {
        let config = HoundConfig::default();
        let mut motion = PursuitMotion {
            speed: config.max_speed - 0.5,
            ..Default::default()
        };

        motion.accelerate(&config, 1.0);
        assert_eq!(motion.speed, config.max_speed);

        // Повторный разгон не выводит за максимум
        motion.accelerate(&config, 10.0);
        assert_eq!(motion.speed, config.max_speed);
    }

    #[test]
    fn test_zig_reseed_and_flip() {
        let config = HoundConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut motion = PursuitMotion {
            zig_timer: 0.3,
            is_zigging: false,
            ..Default::default()
        };

        motion.tick_zig(&config, 1.0, &mut rng);

        assert!(motion.is_zigging);
        assert!(motion.zig_timer >= config.min_zig_time);
        assert!(motion.zig_timer < config.max_zig_time);
    }

    #[test]
    fn test_zig_no_flip_before_zero() {
        let config = HoundConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut motion = PursuitMotion {
            zig_timer: 1.0,
            is_zigging: false,
            ..Default::default()
        };

        motion.tick_zig(&config, 0.5, &mut rng);

        assert!(!motion.is_zigging);
        assert_eq!(motion.zig_timer, 0.5);
    }

    #[test]
    fn test_zig_flip_alternates() {
        let config = HoundConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut motion = PursuitMotion::default();

        let mut flips = 0;
        let mut last = motion.is_zigging;
        for _ in 0..100 {
            motion.tick_zig(&config, 0.5, &mut rng);
            if motion.is_zigging != last {
                flips += 1;
                last = motion.is_zigging;
            }
        }

        // За 50 секунд при таймере < 2 сек сторона должна смениться много раз
        assert!(flips > 10);
    }
}
