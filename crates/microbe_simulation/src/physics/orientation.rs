//! Smoothed rotation — клетка плавно поворачивается к look-at точке
//!
//! Каждый physics step: slerp(current, target, factor). С постоянным factor
//! (0.2) сходимость экспоненциальная, без фиксированной длительности.

use bevy::prelude::*;

/// Минимальная дистанция до look-at точки, ближе — направление не определено
const MIN_LOOK_DISTANCE_SQ: f32 = 1e-8;

/// Новый поворот клетки, смещённый к цели на `factor`
///
/// - target: -Z (forward) смотрит из `origin` на `look_at`, `up` — опорная ось
/// - factor зажимается в (0, 1]; 1.0 — мгновенный snap
/// - look_at == origin или NaN на входе → current без изменений
pub fn smoothed_rotation(current: Quat, origin: Vec3, look_at: Vec3, up: Vec3, factor: f32) -> Quat {
    if !origin.is_finite() || !look_at.is_finite() || !current.is_finite() {
        return current;
    }

    if origin.distance_squared(look_at) <= MIN_LOOK_DISTANCE_SQ {
        return current;
    }

    let factor = if factor.is_nan() { 1.0 } else { factor.clamp(f32::EPSILON, 1.0) };
    let target = Transform::from_translation(origin).looking_at(look_at, up).rotation;

    // slerp у glam идёт по кратчайшей дуге
    current.slerp(target, factor).normalize()
}
