//! Узкие интерфейсы клетки для внешних подсистем
//!
//! Spawn registry, process system и AI видят клетку только через свой trait.

use bevy::prelude::*;

use crate::compounds::{AbsorbedTally, CompoundBag};

/// Процесс с подстроенной скоростью (заполняет process system)
#[derive(Debug, Clone, PartialEq)]
pub struct TweakedProcess {
    pub process: String,
    pub tweak_rate: f32,
}

/// Для spawn/despawn registry
pub trait SpawnedEntity {
    fn despawn_radius_sqr(&self) -> i32;

    fn set_despawn_radius_sqr(&mut self, radius_sqr: i32);
}

/// Для process system (метаболизм снаружи)
pub trait ProcessParticipant {
    fn active_processes(&self) -> &[TweakedProcess];

    fn process_compound_storage(&mut self) -> &mut CompoundBag;
}

/// Для AI: куда смотреть, куда плыть, что уже поглощено
pub trait AiControllable {
    fn look_at_point(&self) -> Vec3;

    fn set_look_at_point(&mut self, point: Vec3);

    fn movement_direction(&self) -> Vec3;

    fn set_movement_direction(&mut self, direction: Vec3);

    fn time_until_next_ai_update(&self) -> f32;

    fn set_time_until_next_ai_update(&mut self, seconds: f32);

    /// Для run and tumble к источникам
    fn total_absorbed_compounds(&self) -> &AbsorbedTally;
}
