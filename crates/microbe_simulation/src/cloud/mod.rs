//! Compound clouds — общее поле веществ, из которого клетки поглощают
//!
//! Архитектура:
//! - CompoundCloud trait — узкий интерфейс к полю (внешний коллаборатор)
//! - CompoundCloudGrid — детерминированная grid-реализация (headless/тесты)
//! - CompoundClouds resource — shared handle, который раздаётся клеткам при spawn
//!
//! Истощение поля между вызовами — ответственность реализации поля.

use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::compounds::{AbsorbedTally, CompoundBag};
use crate::config::MicrobeConfig;

pub mod grid;

pub use grid::CompoundCloudGrid;

/// Поле веществ (resource field)
///
/// Реализация обязана:
/// - переносить в `bag` не больше, чем bag принял (add_compound clipping)
/// - записывать в `tally` ровно то, что bag принял
/// - не считать один и тот же pocket дважды за вызов
pub trait CompoundCloud: Send + Debug {
    fn absorb_compounds(
        &mut self,
        position: Vec3,
        radius: f32,
        bag: &mut CompoundBag,
        tally: &mut AbsorbedTally,
    );
}

/// Shared handle на поле (один на мир, много клеток)
pub type CloudHandle = Arc<Mutex<dyn CompoundCloud>>;

/// Resource: поле, которое получают все новые клетки
#[derive(Resource, Clone, Debug)]
pub struct CompoundClouds {
    handle: CloudHandle,
}

impl CompoundClouds {
    pub fn new(cloud: impl CompoundCloud + 'static) -> Self {
        Self {
            handle: Arc::new(Mutex::new(cloud)),
        }
    }

    pub fn handle(&self) -> CloudHandle {
        Arc::clone(&self.handle)
    }
}

/// Поглощение веществ вокруг позиции клетки
///
/// Радиус берётся из конфига (бактерии — с bacteria_radius_scale).
/// Возвращает радиус, с которым реально опросили поле.
pub fn absorb_nearby(
    position: Vec3,
    config: &MicrobeConfig,
    is_bacteria: bool,
    cloud: &mut dyn CompoundCloud,
    bag: &mut CompoundBag,
    tally: &mut AbsorbedTally,
) -> f32 {
    let radius = config.grab_radius(is_bacteria);
    cloud.absorb_compounds(position, radius, bag, tally);
    radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compounds::Compound;

    /// Поле-заглушка: отдаёт фиксированный набор и запоминает радиус
    #[derive(Debug, Default)]
    struct FixedCloud {
        offer: Vec<(Compound, f32)>,
        last_radius: Option<f32>,
    }

    impl CompoundCloud for FixedCloud {
        fn absorb_compounds(
            &mut self,
            _position: Vec3,
            radius: f32,
            bag: &mut CompoundBag,
            tally: &mut AbsorbedTally,
        ) {
            self.last_radius = Some(radius);
            for (compound, amount) in &self.offer {
                let accepted = bag.add_compound(compound, *amount);
                tally.record(compound, accepted);
            }
        }
    }

    #[test]
    fn test_absorb_nearby_uses_configured_radius() {
        let config = MicrobeConfig::default();
        let mut cloud = FixedCloud::default();
        let mut bag = CompoundBag::new(50.0);
        let mut tally = AbsorbedTally::new();

        let radius = absorb_nearby(Vec3::ZERO, &config, false, &mut cloud, &mut bag, &mut tally);
        assert_eq!(radius, 3.0);
        assert_eq!(cloud.last_radius, Some(3.0));

        let radius = absorb_nearby(Vec3::ZERO, &config, true, &mut cloud, &mut bag, &mut tally);
        assert_eq!(radius, 1.5);

        let config = MicrobeConfig { absorption_radius: 8.0, ..default() };
        let radius = absorb_nearby(Vec3::ZERO, &config, false, &mut cloud, &mut bag, &mut tally);
        assert_eq!(radius, 8.0);
    }

    #[test]
    fn test_tally_matches_bag_delta_when_clipped() {
        let config = MicrobeConfig::default();
        let mut cloud = FixedCloud {
            offer: vec![(Compound::GLUCOSE, 5.0)],
            ..default()
        };
        let mut bag = CompoundBag::new(50.0);
        bag.add_compound(&Compound::ATP, 47.0); // headroom = 3
        let mut tally = AbsorbedTally::new();

        absorb_nearby(Vec3::ZERO, &config, false, &mut cloud, &mut bag, &mut tally);

        assert_eq!(bag.get_compound_amount(&Compound::GLUCOSE), 3.0);
        assert_eq!(tally.get(&Compound::GLUCOSE), 3.0);
    }

    #[test]
    fn test_clouds_resource_shares_one_field() {
        let clouds = CompoundClouds::new(CompoundCloudGrid::new(4, 4, 1.0));
        let a = clouds.handle();
        let b = clouds.handle();

        assert!(Arc::ptr_eq(&a, &b));
    }
}
