//! MARSHRUN Simulation Core
//!
//! Headless ECS-симуляция охотничьей гончей на Bevy 0.16.
//! Гончая живёт в конечном автомате: кружит вокруг игрока, подбирает
//! сбитых уток, предъявляет добычу и прыгает на игрока со спины.
//!
//! Слои:
//! - ECS: состояния, переходы, движение, kinematic физика
//! - Рендер/аудио/спавн уток живут снаружи и слушают события

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod behavior;
pub mod components;
pub mod ducks;
pub mod logger;
pub mod physics;
pub mod sensing;

// Re-export базовых типов для удобства
pub use behavior::{BehaviorPlugin, BehaviorSet};
pub use behavior::components::fsm::*;
pub use behavior::events::*;
pub use behavior::systems::debug::{DebugColor, DebugDraw, DebugShape};
pub use components::*;
pub use ducks::*;
pub use logger::*;
pub use physics::*;

/// Главный plugin симуляции (поведение + kinematic физика)
///
/// Поведенческие системы выполняются строго до физических:
/// переходы и velocity решаются на состоянии предыдущего тика,
/// интеграция применяет их к позиции.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .configure_sets(FixedUpdate, BehaviorSet.before(KinematicSet))
            .add_plugins((BehaviorPlugin, KinematicControllerPlugin));

        // Детерминистичный RNG: seed по умолчанию, если встраивающий
        // слой не вставил свой (create_headless_app вставляет)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Собирает компоненты типа T в стабильном порядке (по Entity ID) и
/// сериализует через Debug. Достаточно для побайтового сравнения прогонов.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
