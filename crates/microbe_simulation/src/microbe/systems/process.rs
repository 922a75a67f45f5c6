//! Frame update систем (Update schedule)

use bevy::prelude::*;
use bevy_rapier3d::prelude::ExternalImpulse;

use super::{deactivate, AtpStarved, Deactivated, MicrobeFailed};
use crate::microbe::Microbe;
use crate::physics::RapierMicrobeBody;

/// Система: frame update всех активных клеток
///
/// delta из `Time` (переменный шаг). Импульс копится в ExternalImpulse,
/// Rapier применяет его на своём step.
pub fn microbe_process(
    mut commands: Commands,
    time: Res<Time>,
    mut microbes: Query<(Entity, &mut Microbe, &mut Transform, &mut ExternalImpulse), Without<Deactivated>>,
    mut failures: EventWriter<MicrobeFailed>,
) {
    let delta = time.delta_secs();

    for (entity, mut microbe, mut transform, mut impulse) in microbes.iter_mut() {
        let mut body = RapierMicrobeBody {
            transform: &mut *transform,
            impulse: &mut *impulse,
        };

        if let Err(error) = microbe.process(delta, &mut body) {
            deactivate(&mut commands, &mut failures, entity, error);
        }
    }
}

/// Система: AtpStarved маркер по состоянию последнего кадра движения
///
/// Добавляет маркер когда тяга упала вдвое, убирает когда ATP снова хватает.
pub fn detect_atp_starvation(
    mut commands: Commands,
    query: Query<(Entity, &Microbe, Option<&AtpStarved>), Without<Deactivated>>,
) {
    for (entity, microbe, starved) in query.iter() {
        if microbe.is_starved() && starved.is_none() {
            commands.entity(entity).insert(AtpStarved);
        } else if !microbe.is_starved() && starved.is_some() {
            commands.entity(entity).remove::<AtpStarved>();
        }
    }
}
