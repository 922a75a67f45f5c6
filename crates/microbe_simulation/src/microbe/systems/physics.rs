//! Physics step (FixedUpdate schedule)

use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalImpulse;

use super::{deactivate, Deactivated, MicrobeFailed};
use crate::microbe::Microbe;
use crate::physics::RapierMicrobeBody;

/// Система: плавный поворот клеток к look-at точке
///
/// Только rotation; translation двигают импульсы из frame update.
pub fn microbe_integrate_forces(
    mut commands: Commands,
    mut microbes: Query<(Entity, &Microbe, &mut Transform, &mut ExternalImpulse), Without<Deactivated>>,
    mut failures: EventWriter<MicrobeFailed>,
) {
    for (entity, microbe, mut transform, mut impulse) in microbes.iter_mut() {
        let mut state = RapierMicrobeBody {
            transform: &mut *transform,
            impulse: &mut *impulse,
        };

        if let Err(error) = microbe.integrate_forces(&mut state) {
            deactivate(&mut commands, &mut failures, entity, error);
        }
    }
}
