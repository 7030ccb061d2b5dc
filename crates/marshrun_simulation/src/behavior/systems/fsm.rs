//! Переходы FSM гончей
//!
//! Выполняется первым в тике, строго до движения: решение о смене
//! состояния принимается на позициях предыдущего тика. Новое состояние
//! собирается целиком (new_state = match ...), активный вариант
//! заменяется атомарно.

use bevy::prelude::*;

use crate::behavior::components::fsm::{HoundConfig, HoundState, PRESENT_RADIUS};
use crate::behavior::events::DuckRetrieved;
use crate::components::{Hound, PursuedPlayer};
use crate::ducks::{Duck, DuckRegistry};
use crate::physics::{KinematicController, PhysicsBody};
use crate::sensing;

/// Система: переходы между состояниями
///
/// Приоритеты HuntPlayer:
/// 1. Игрок в радиусе чутья и гончая у него за спиной → PrepareToAttack
/// 2. Первая сбитая утка реестра в радиусе чутья → GetDuck
///    (ранние утки приоритетнее поздних, скан останавливается на первой)
pub fn hound_state_transitions(
    mut commands: Commands,
    mut hounds: Query<
        (
            Entity,
            &mut HoundState,
            &HoundConfig,
            &Transform,
            &mut PhysicsBody,
            &KinematicController,
        ),
        With<Hound>,
    >,
    player: Query<&Transform, (With<PursuedPlayer>, Without<Hound>)>,
    ducks: Query<(&Duck, &Transform), Without<Hound>>,
    mut registry: ResMut<DuckRegistry>,
    mut retrieved: EventWriter<DuckRetrieved>,
) {
    for (entity, mut state, config, transform, mut body, controller) in hounds.iter_mut() {
        let new_state = match state.as_ref() {
            HoundState::HuntPlayer => {
                let mut next = None;

                if let Ok(player_tf) = player.single() {
                    let distance = transform.translation.distance(player_tf.translation);

                    if distance < config.player_scent_radius
                        && sensing::is_behind(
                            transform.translation,
                            player_tf.translation,
                            *player_tf.forward(),
                        )
                    {
                        crate::log(&format!(
                            "Hound {:?}: HuntPlayer → PrepareToAttack (behind player, {:.1}m)",
                            entity, distance
                        ));
                        next = Some(HoundState::prepare_to_attack());
                    }
                }

                if next.is_none() {
                    for duck_entity in registry.iter() {
                        // Мёртвый handle пропускаем
                        let Ok((duck, duck_tf)) = ducks.get(duck_entity) else {
                            continue;
                        };

                        if duck.is_dead
                            && transform.translation.distance(duck_tf.translation)
                                < config.duck_scent_radius
                        {
                            crate::log(&format!(
                                "Hound {:?}: HuntPlayer → GetDuck (duck {:?})",
                                entity, duck_entity
                            ));
                            next = Some(HoundState::get_duck(duck_entity));
                            break;
                        }
                    }
                }

                next.unwrap_or(HoundState::HuntPlayer)
            }

            HoundState::GetDuck { target } => match ducks.get(*target) {
                Ok((_, duck_tf)) => {
                    if transform.translation.distance(duck_tf.translation) < PRESENT_RADIUS {
                        crate::log(&format!(
                            "Hound {:?}: GetDuck → PresentDuck (duck {:?})",
                            entity, target
                        ));
                        HoundState::present_duck(*target)
                    } else {
                        state.as_ref().clone()
                    }
                }
                Err(_) => {
                    // Утку убрали из-под носа: возвращаемся к охоте
                    crate::log_warning(&format!(
                        "Hound {:?}: duck {:?} vanished mid-chase, back to HuntPlayer",
                        entity, target
                    ));
                    HoundState::HuntPlayer
                }
            },

            HoundState::PresentDuck { target, time_left, .. } => {
                if *time_left < 0.0 {
                    // Единственная точка потребления утки. Оба шага
                    // идемпотентны: повторное удаление из реестра no-op,
                    // despawn только если entity ещё жив.
                    registry.remove(*target);

                    if ducks.get(*target).is_ok() {
                        commands.entity(*target).despawn();
                        retrieved.write(DuckRetrieved {
                            hound: entity,
                            duck: *target,
                        });
                        crate::log(&format!(
                            "🦆 Hound {:?}: duck {:?} retrieved, back to the hunt",
                            entity, target
                        ));
                    }

                    HoundState::HuntPlayer
                } else if ducks.get(*target).is_err() {
                    // Добыча исчезла до конца предъявления
                    crate::log_warning(&format!(
                        "Hound {:?}: duck {:?} vanished mid-present, back to HuntPlayer",
                        entity, target
                    ));
                    registry.remove(*target);
                    HoundState::HuntPlayer
                } else {
                    state.as_ref().clone()
                }
            }

            HoundState::PrepareToAttack { time_left, .. } => {
                if *time_left < 0.0 {
                    crate::log(&format!("Hound {:?}: PrepareToAttack → Launch", entity));
                    HoundState::launch()
                } else {
                    state.as_ref().clone()
                }
            }

            HoundState::Launch { time_left, has_launched } => {
                // Ждём приземления сколько потребуется: без контакта с
                // землёй состояние не меняется
                if *has_launched && *time_left < 0.0 && controller.grounded {
                    body.velocity = Vec3::ZERO;
                    crate::log(&format!("Hound {:?}: landed, Launch → HuntPlayer", entity));
                    HoundState::HuntPlayer
                } else {
                    state.as_ref().clone()
                }
            }
        };

        if *state != new_state {
            *state = new_state;
        }
    }
}
