//! Движение гончей от активного состояния
//!
//! Выполняется после переходов. Пишет горизонтальную velocity
//! (вертикаль принадлежит гравитации), интеграция в позицию живёт в
//! физике. Здесь же тикают таймеры состояний и одноразовые эффекты:
//! голос и импульс прыжка.

use bevy::prelude::*;

use crate::behavior::components::fsm::{
    HoundConfig, HoundState, LAUNCH_ARC_OFFSET, LAUNCH_IMPULSE,
};
use crate::behavior::events::{BarkKind, BarkRequested};
use crate::components::{Hound, PursuedPlayer, PursuitMotion};
use crate::ducks::Duck;
use crate::physics::{KinematicController, PhysicsBody};
use crate::sensing;
use crate::DeterministicRng;

/// Направление орбиты вокруг игрока с учётом зигзага
///
/// Касательная к окружности вокруг игрока, увод на hunt_strength
/// градусов в сторону игрока; сторона зигзага меняет знак касательной
/// и знак увода. Результат плоский, единичной длины (или ZERO при
/// вырожденном входе).
pub fn hunt_direction(to_player: Vec3, is_zigging: bool, hunt_strength: f32) -> Vec3 {
    let tangent = sensing::orbit_tangent(to_player);

    let dir = if is_zigging {
        sensing::rotate_about_up(-tangent, -hunt_strength)
    } else {
        sensing::rotate_about_up(tangent, hunt_strength)
    };

    sensing::flatten(dir)
}

/// Направление импульса прыжка
///
/// К игроку, вертикаль переопределена на высоту его головы: прыжок
/// идёт дугой вверх, а не настильно.
pub fn launch_direction(hound_pos: Vec3, player_pos: Vec3) -> Vec3 {
    let mut diff = player_pos - hound_pos;
    diff.y = player_pos.y + LAUNCH_ARC_OFFSET;
    diff.normalize_or_zero()
}

/// Система: активное состояние → velocity + тики таймеров
pub fn hound_movement(
    mut hounds: Query<
        (
            Entity,
            &mut HoundState,
            &HoundConfig,
            &mut PursuitMotion,
            &Transform,
            &mut PhysicsBody,
            &mut KinematicController,
        ),
        With<Hound>,
    >,
    player: Query<&Transform, (With<PursuedPlayer>, Without<Hound>)>,
    ducks: Query<&Transform, (With<Duck>, Without<Hound>)>,
    mut barks: EventWriter<BarkRequested>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (entity, mut state, config, mut motion, transform, mut body, mut controller) in
        hounds.iter_mut()
    {
        match state.as_mut() {
            HoundState::HuntPlayer => {
                let Ok(player_tf) = player.single() else {
                    body.velocity.x = 0.0;
                    body.velocity.z = 0.0;
                    continue;
                };

                let to_player = player_tf.translation - transform.translation;
                let dir = hunt_direction(to_player, motion.is_zigging, config.hunt_strength);

                body.velocity.x = dir.x * motion.speed;
                body.velocity.z = dir.z * motion.speed;

                motion.accelerate(config, delta);
                motion.tick_zig(config, delta, &mut rng.rng);
            }

            HoundState::GetDuck { target } => {
                // Скорость здесь не растёт, в отличие от охоты
                if let Ok(duck_tf) = ducks.get(*target) {
                    let dir = (duck_tf.translation - transform.translation).normalize_or_zero();
                    body.velocity.x = dir.x * motion.speed;
                    body.velocity.z = dir.z * motion.speed;
                } else {
                    body.velocity.x = 0.0;
                    body.velocity.z = 0.0;
                }
            }

            HoundState::PresentDuck { time_left, announced, .. } => {
                if !*announced {
                    *announced = true;
                    barks.write(BarkRequested {
                        hound: entity,
                        kind: BarkKind::Present,
                    });
                }

                *time_left -= delta;
                body.velocity.x = 0.0;
                body.velocity.z = 0.0;
            }

            HoundState::PrepareToAttack { time_left, announced } => {
                if !*announced {
                    *announced = true;
                    barks.write(BarkRequested {
                        hound: entity,
                        kind: BarkKind::AttackWindup,
                    });
                }

                *time_left -= delta;
                body.velocity.x = 0.0;
                body.velocity.z = 0.0;
            }

            HoundState::Launch { time_left, has_launched } => {
                if !*has_launched {
                    *has_launched = true;
                    controller.gravity_affected = true;

                    if let Ok(player_tf) = player.single() {
                        let dir = launch_direction(transform.translation, player_tf.translation);
                        body.apply_impulse(dir * LAUNCH_IMPULSE);
                    }

                    crate::log(&format!("Hound {:?}: launch impulse applied", entity));
                } else {
                    *time_left -= delta;
                }
                // Баллистика: velocity не трогаем, дальше работает гравитация
            }
        }
    }
}
