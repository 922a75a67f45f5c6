//! Movement force для клетки
//!
//! Модель:
//! - cost = atp_cost_per_hex * hex_count * delta
//! - берём cost ATP из CompoundBag (может прийти меньше)
//! - не хватило хоть сколько-то → тяга x0.5 (бинарно, не пропорционально)
//! - force = direction * thrust в локальных координатах клетки
//!
//! Нулевое направление сюда не передаётся: caller пропускает вызов,
//! иначе ATP списался бы за кадр без движения.

use bevy::prelude::*;

use crate::compounds::{Compound, CompoundBag};
use crate::constants::STARVED_THRUST_MULTIPLIER;

/// Результат расчёта тяги за кадр
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementForce {
    /// Сила в локальном базисе клетки
    pub local_force: Vec3,
    /// Сколько ATP запросили
    pub cost: f32,
    /// Сколько ATP реально получили
    pub obtained: f32,
    /// Итоговая тяга (base или base * 0.5)
    pub thrust: f32,
}

impl MovementForce {
    /// ATP не хватило → половинная тяга
    pub fn is_starved(&self) -> bool {
        self.obtained < self.cost
    }

    /// Перевод в мировые координаты текущим поворотом клетки
    pub fn to_world(&self, rotation: Quat) -> Vec3 {
        rotation * self.local_force
    }
}

/// Рассчитать тягу и списать ATP
pub fn compute_movement_force(
    direction: Vec3,
    delta: f32,
    hex_count: u32,
    atp_cost_per_hex: f32,
    base_thrust: f32,
    energy: &Compound,
    bag: &mut CompoundBag,
) -> MovementForce {
    let cost = atp_cost_per_hex * hex_count as f32 * delta.max(0.0);
    let obtained = bag.take_compound(energy, cost);

    let mut thrust = base_thrust;
    if obtained < cost {
        thrust *= STARVED_THRUST_MULTIPLIER;
    }

    MovementForce {
        local_force: direction * thrust,
        cost,
        obtained,
        thrust,
    }
}
