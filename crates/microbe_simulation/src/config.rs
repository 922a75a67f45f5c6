//! Конфигурация клетки (MicrobeConfig resource)
//!
//! Все поля с `#[serde(default)]` → частичный конфиг валиден,
//! недостающее берётся из `constants`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compounds::Compound;
use crate::constants::*;

/// Ошибки валидации конфига
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite and >= 0 (got {value})")]
    Negative { field: &'static str, value: f32 },

    #[error("rotation_slerp_factor must be in (0, 1] (got {0})")]
    SlerpFactorOutOfRange(f32),

    #[error("absorption_radius must be > 0 (got {0})")]
    ZeroAbsorptionRadius(f32),
}

/// Параметры одной клетки: движение, поглощение, поворот
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrobeConfig {
    /// ATP/сек на hex при движении
    pub base_movement_atp_cost: f32,
    /// Тяга при полной оплате ATP
    pub cell_base_thrust: f32,
    /// Общая вместимость CompoundBag
    pub compound_capacity: f32,
    /// Радиус захвата compounds (пока константа, см. ABSORPTION_RADIUS)
    pub absorption_radius: f32,
    /// Множитель радиуса для бактерий
    pub bacteria_radius_scale: f32,
    /// Доля slerp за physics step (экспоненциальная сходимость)
    pub rotation_slerp_factor: f32,
    /// Compound, который тратится на движение
    pub movement_compound: Compound,
}

impl Default for MicrobeConfig {
    fn default() -> Self {
        Self {
            base_movement_atp_cost: BASE_MOVEMENT_ATP_COST,
            cell_base_thrust: CELL_BASE_THRUST,
            compound_capacity: MICROBE_COMPOUND_CAPACITY,
            absorption_radius: ABSORPTION_RADIUS,
            bacteria_radius_scale: BACTERIA_ABSORPTION_SCALE,
            rotation_slerp_factor: ROTATION_SLERP_FACTOR,
            movement_compound: Compound::ATP,
        }
    }
}

impl MicrobeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("base_movement_atp_cost", self.base_movement_atp_cost),
            ("cell_base_thrust", self.cell_base_thrust),
            ("compound_capacity", self.compound_capacity),
            ("bacteria_radius_scale", self.bacteria_radius_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.absorption_radius.is_nan() || self.absorption_radius <= 0.0 {
            return Err(ConfigError::ZeroAbsorptionRadius(self.absorption_radius));
        }

        if !(0.0..=1.0).contains(&self.rotation_slerp_factor) || self.rotation_slerp_factor == 0.0 {
            return Err(ConfigError::SlerpFactorOutOfRange(self.rotation_slerp_factor));
        }

        Ok(())
    }

    /// Радиус поглощения с учётом bacteria scale
    pub fn grab_radius(&self, is_bacteria: bool) -> f32 {
        let scale = if is_bacteria { self.bacteria_radius_scale } else { 1.0 };
        self.absorption_radius * scale
    }
}
