//! Microbe systems (ECS обёртка над Microbe::process / integrate_forces)

pub mod physics;
pub mod process;
pub mod spawn;

use bevy::prelude::*;

use super::error::MicrobeError;
use crate::logger::log_error;

pub use physics::microbe_integrate_forces;
pub use process::{detect_atp_starvation, microbe_process};
pub use spawn::spawn_microbe;

/// Клетка выключена после ошибки инициализации — системы её пропускают
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Deactivated;

/// Маркер: движение идёт на половинной тяге (ATP не хватает)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AtpStarved;

/// Event: клетка упала с ошибкой и выключена
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MicrobeFailed {
    pub entity: Entity,
    pub error: MicrobeError,
}

/// Выключить клетку: лог + event + Deactivated
fn deactivate(
    commands: &mut Commands,
    failures: &mut EventWriter<MicrobeFailed>,
    entity: Entity,
    error: MicrobeError,
) {
    log_error(&format!("Microbe {:?} deactivated: {}", entity, error));
    commands.entity(entity).insert(Deactivated);
    failures.write(MicrobeFailed { entity, error });
}
