//! Геометрия восприятия: чистые функции без доступа к ECS
//!
//! Всё, что гончая "чувствует", считается здесь: касательная орбиты,
//! повороты вокруг вертикали, проверка "наблюдатель сзади цели".
//! Вырожденные вектора (нулевая длина) дают нулевой результат, не NaN.

use bevy::prelude::*;

/// Касательная к орбите вокруг цели: cross вектора на цель с мировым up.
///
/// Нормализована; при нулевом или вертикальном входе возвращает ZERO.
pub fn orbit_tangent(to_target: Vec3) -> Vec3 {
    to_target.cross(Vec3::Y).normalize_or_zero()
}

/// Поворот вектора вокруг вертикальной оси на угол в градусах.
pub fn rotate_about_up(v: Vec3, degrees: f32) -> Vec3 {
    Quat::from_rotation_y(degrees.to_radians()) * v
}

/// Убирает вертикальную составляющую (движение по земле остаётся плоским).
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Наблюдатель находится позади цели?
///
/// Dot вектора цель→наблюдатель с направлением взгляда цели:
/// отрицательный dot означает "за спиной".
pub fn is_behind(observer: Vec3, target: Vec3, target_forward: Vec3) -> bool {
    (observer - target).dot(target_forward) < 0.0
}
