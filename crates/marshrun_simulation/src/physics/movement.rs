//! Kinematic контроллер гончей и игрока
//!
//! Архитектура:
//! - Rapier для коллизий (RigidBody::KinematicPositionBased)
//! - Custom velocity integration (не используем Rapier forces)
//! - Gravity + ground probe + интеграция в Transform
//!
//! Детерминизм: fixed timestep, никакого wall-clock внутри систем

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Дальность нижнего probe: контакт с землёй засчитывается в этих пределах (метры)
pub const GROUND_PROBE_DISTANCE: f32 = 0.5;

/// Custom velocity + масса
///
/// Импульсы переводим в скорость сами: impulse / mass.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec3,
    pub mass: f32,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            mass: 70.0,
        }
    }
}

impl PhysicsBody {
    /// Мгновенный импульс: velocity += impulse / mass.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse / self.mass;
    }
}

/// Kinematic контроллер
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct KinematicController {
    /// Сила гравитации (m/s²)
    pub gravity: f32,
    /// Гравитация выключена, пока персонаж бегает по земле;
    /// прыжок включает её и больше не выключает
    pub gravity_affected: bool,
    /// Контакт с землёй в пределах GROUND_PROBE_DISTANCE
    pub grounded: bool,
}

impl Default for KinematicController {
    fn default() -> Self {
        Self {
            gravity: -9.81, // Earth gravity
            gravity_affected: false,
            grounded: false,
        }
    }
}

/// Система: probe земли
///
/// Короткий probe вниз: пока без rapier raycast, контакт если нижняя
/// точка тела в пределах GROUND_PROBE_DISTANCE от пола y=0.
///
/// TODO: заменить на ray cast через ReadRapierContext когда подключим
/// полный rapier plugin
pub fn ground_probe(mut query: Query<(&Transform, &mut KinematicController)>) {
    for (transform, mut controller) in query.iter_mut() {
        controller.grounded = transform.translation.y <= GROUND_PROBE_DISTANCE;
    }
}

/// Система: гравитация в velocity
///
/// Применяется только к телам с включённой гравитацией и без контакта
/// с землёй. Работает в FixedUpdate для детерминизма.
pub fn apply_gravity(
    mut query: Query<(&KinematicController, &mut PhysicsBody)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (controller, mut body) in query.iter_mut() {
        if controller.gravity_affected && !controller.grounded {
            body.velocity.y += controller.gravity * delta;
        }
    }
}

/// Система: интеграция velocity → Transform
///
/// position += velocity * dt. Rapier здесь только для коллизий,
/// позицию двигаем сами.
pub fn integrate_velocity_to_transform(
    mut query: Query<(&PhysicsBody, &mut Transform), With<KinematicController>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        transform.translation += body.velocity * delta;
    }
}

/// Система: синхронизация нашей velocity с Rapier
pub fn sync_velocity_to_rapier(
    mut query: Query<(&PhysicsBody, &mut Velocity), With<KinematicController>>,
) {
    for (body, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = body.velocity;
    }
}

/// Метка физического набора систем
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KinematicSet;

/// Plugin для kinematic контроллера
///
/// Все системы в FixedUpdate, последовательно, до rapier physics step.
pub struct KinematicControllerPlugin;

impl Plugin for KinematicControllerPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.add_systems(
            FixedUpdate,
            (
                ground_probe,
                apply_gravity,
                integrate_velocity_to_transform,
                sync_velocity_to_rapier,
            )
                .chain()
                .in_set(KinematicSet)
                .before(PhysicsSet::SyncBackend),
        );
    }
}

/// Spawn helper: гончая со всем набором компонентов
///
/// Тюнинг, состояние преследования и FSM добавляются через Required
/// Components маркера Hound.
pub fn spawn_hound(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            crate::components::Hound,
            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.4, 0.3),
            Velocity::default(),
        ))
        .id()
}

/// Spawn helper: преследуемый игрок (движение приходит снаружи)
pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            crate::components::PursuedPlayer,
            PhysicsBody::default(),
            KinematicController::default(),
            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4),
            Velocity::default(),
        ))
        .id()
}
