//! Microbe domain — клетка microbe stage
//!
//! ECS ответственность:
//! - Microbe state: CompoundBag, look-at, movement intent, species
//! - Правила: ATP cost движения, поглощение из облаков, venting gate
//!
//! Physics ответственность (Rapier):
//! - интеграция импульсов (ExternalImpulse)
//! - коллизии
//!
//! AI/input пишут `look_at_point` и `movement_direction`, остальное — здесь.

use bevy::prelude::*;
use bevy_rapier3d::plugin::PhysicsSet;

use crate::config::MicrobeConfig;

pub mod capabilities;
pub mod components;
pub mod error;
pub mod species;
pub mod systems;


// Re-export основных типов
pub use capabilities::{AiControllable, ProcessParticipant, SpawnedEntity, TweakedProcess};
pub use components::{FrameReport, Microbe, VentingOutcome};
pub use error::MicrobeError;
pub use species::MicrobeSpecies;
pub use systems::{spawn_microbe, AtpStarved, Deactivated, MicrobeFailed};

/// Microbe Plugin
///
/// Update (переменный шаг, delta из Time):
/// 1. microbe_process — движение, импульс, поглощение, venting gate
/// 2. detect_atp_starvation — AtpStarved маркер
///
/// FixedUpdate (physics step, до Rapier SyncBackend):
/// - microbe_integrate_forces — поворот к look-at точке
///
/// CompoundClouds resource вставляет хост (поле живёт вне клеток).
pub struct MicrobePlugin;

impl Plugin for MicrobePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MicrobeConfig>()
            .add_event::<MicrobeFailed>();

        app.add_systems(
            Update,
            (
                systems::microbe_process,
                systems::detect_atp_starvation,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            systems::microbe_integrate_forces.before(PhysicsSet::SyncBackend),
        );
    }
}
