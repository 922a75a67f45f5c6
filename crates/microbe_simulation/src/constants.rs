//! Игровые константы microbe stage
//!
//! Значения по умолчанию для MicrobeConfig. Меняются через конфиг,
//! а не правкой кода.

use bevy::prelude::Vec3;

/// ATP за секунду движения на один hex
pub const BASE_MOVEMENT_ATP_COST: f32 = 1.0;

/// Базовая тяга клетки (force units)
pub const CELL_BASE_THRUST: f32 = 50.6;

/// Множитель тяги когда ATP не хватило на кадр
pub const STARVED_THRUST_MULTIPLIER: f32 = 0.5;

/// Общая вместимость CompoundBag (не per-compound)
pub const MICROBE_COMPOUND_CAPACITY: f32 = 50.0;

/// Радиус захвата compounds из облаков (world units)
///
/// TODO: считать из membrane encompassing circle (с минимумом 3.0), когда
/// body plan начнёт отдавать hexes.
pub const ABSORPTION_RADIUS: f32 = 3.0;

/// Бактерии захватывают в половинном радиусе
pub const BACTERIA_ABSORPTION_SCALE: f32 = 0.5;

/// Доля slerp к целевому повороту за один physics step
pub const ROTATION_SLERP_FACTOR: f32 = 0.2;

/// Up-ось для look-at
pub const ROTATION_UP: Vec3 = Vec3::Y;

/// Куда смотрит свежая клетка
pub const DEFAULT_LOOK_AT_POINT: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Радиус physics коллайдера клетки (1 hex)
pub const MICROBE_COLLIDER_RADIUS: f32 = 1.0;

/// Частота physics step (FixedUpdate)
pub const PHYSICS_HZ: f64 = 60.0;
