//! Spawn helper для клетки

use std::sync::Arc;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::cloud::CompoundClouds;
use crate::config::MicrobeConfig;
use crate::constants::MICROBE_COLLIDER_RADIUS;
use crate::logger::log_info;
use crate::microbe::{Microbe, MicrobeError, MicrobeSpecies};

/// Создаёт клетку с полным набором компонентов:
/// - Transform
/// - Microbe (init(cloud) → ready() → apply_species)
/// - Rapier: RigidBody::Dynamic + Collider (ball 1 hex), без гравитации
/// - ExternalImpulse (сюда пишет frame update)
///
/// Движение в плоскости XZ: Y translation и вращение от физики заблокированы,
/// поворот задаёт integrate_forces.
pub fn spawn_microbe(
    commands: &mut Commands,
    position: Vec3,
    species: Arc<MicrobeSpecies>,
    clouds: &CompoundClouds,
    config: &MicrobeConfig,
) -> Result<Entity, MicrobeError> {
    let mut microbe = Microbe::new(config.clone());
    microbe.init(clouds.handle());
    microbe.ready()?;
    microbe.apply_species(species);

    let entity = commands
        .spawn((
            Transform::from_translation(position),
            microbe,
            RigidBody::Dynamic,
            Collider::ball(MICROBE_COLLIDER_RADIUS),
            GravityScale(0.0),
            LockedAxes::TRANSLATION_LOCKED_Y | LockedAxes::ROTATION_LOCKED,
            ExternalImpulse::default(),
        ))
        .id();

    log_info(&format!("Microbe {:?} spawned at {:?}", entity, position));
    Ok(entity)
}
