//! События поведенческого ядра
//!
//! Аудио, счёт и удаление визуалов живут снаружи симуляции и
//! подписываются на эти события.

use bevy::prelude::*;

/// Какой голос подаёт гончая
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarkKind {
    /// Предъявление добычи
    Present,
    /// Замах перед прыжком
    AttackWindup,
}

/// Событие: гончая подаёт голос (ровно один раз на состояние)
#[derive(Event, Debug, Clone)]
pub struct BarkRequested {
    pub hound: Entity,
    pub kind: BarkKind,
}

/// Событие: утка принесена и потреблена
///
/// Единственная точка, где утка навсегда исчезает из мира.
#[derive(Event, Debug, Clone)]
pub struct DuckRetrieved {
    pub hound: Entity,
    pub duck: Entity,
}
