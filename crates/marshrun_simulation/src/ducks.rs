//! Утки и их реестр
//!
//! # Архитектура
//!
//! **Duck**: компонент утки; гончую интересуют только сбитые (is_dead).
//!
//! **DuckRegistry**: упорядоченный реестр целей. Хранит Entity id
//! (generation-tagged handle), а не индексы: держатель handle обязан
//! резолвить его через Query::get на каждом обращении и получает явный
//! Err для уже удалённой утки вместо чтения по чужому индексу.
//!
//! Владение: спавнер вставляет (spawn_duck), поведенческое ядро удаляет
//! при потреблении добычи. Порядок записей стабилен, ранние утки имеют
//! приоритет при поиске цели.

use bevy::prelude::*;

/// Утка: цель преследования
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Duck {
    /// Сбитая утка; только такие привлекают гончую
    pub is_dead: bool,
}

/// Упорядоченный реестр уток
#[derive(Resource, Debug, Clone, Default)]
pub struct DuckRegistry {
    ducks: Vec<Entity>,
}

impl DuckRegistry {
    /// Регистрирует утку в конце реестра.
    pub fn register(&mut self, duck: Entity) {
        self.ducks.push(duck);
    }

    /// Убирает утку из реестра. No-op (false), если её там уже нет;
    /// порядок остальных записей не меняется.
    pub fn remove(&mut self, duck: Entity) -> bool {
        let before = self.ducks.len();
        self.ducks.retain(|&d| d != duck);
        self.ducks.len() != before
    }

    /// Утки в порядке регистрации.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.ducks.iter().copied()
    }

    pub fn contains(&self, duck: Entity) -> bool {
        self.ducks.contains(&duck)
    }

    pub fn len(&self) -> usize {
        self.ducks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ducks.is_empty()
    }
}

/// Spawn helper: утка + запись в реестр
pub fn spawn_duck(
    commands: &mut Commands,
    registry: &mut DuckRegistry,
    position: Vec3,
    is_dead: bool,
) -> Entity {
    let duck = commands
        .spawn((Transform::from_translation(position), Duck { is_dead }))
        .id();

    registry.register(duck);
    duck
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_ducks(world: &mut World) -> (Entity, Entity, Entity) {
        (
            world.spawn_empty().id(),
            world.spawn_empty().id(),
            world.spawn_empty().id(),
        )
    }

    #[test]
    fn test_registry_preserves_order() {
        let mut world = World::new();
        let (d0, d1, d2) = three_ducks(&mut world);

        let mut registry = DuckRegistry::default();
        registry.register(d0);
        registry.register(d1);
        registry.register(d2);

        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![d0, d1, d2]);
    }

    #[test]
    fn test_remove_middle_keeps_relative_order() {
        let mut world = World::new();
        let (d0, d1, d2) = three_ducks(&mut world);

        let mut registry = DuckRegistry::default();
        registry.register(d0);
        registry.register(d1);
        registry.register(d2);

        assert!(registry.remove(d1));
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![d0, d2]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut world = World::new();
        let (d0, _, _) = three_ducks(&mut world);

        let mut registry = DuckRegistry::default();
        registry.register(d0);

        assert!(registry.remove(d0));
        assert!(!registry.remove(d0));
        assert!(registry.is_empty());
    }
}
