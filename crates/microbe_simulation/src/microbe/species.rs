//! Species template — неизменяемый, shared через Arc
//!
//! Клетка держит Arc<MicrobeSpecies> и никогда его не мутирует.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::compounds::Compound;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrobeSpecies {
    pub name: String,
    /// Бактерии поглощают в уменьшенном радиусе
    pub is_bacteria: bool,
    /// Стартовый набор compounds клетки
    pub initial_compounds: BTreeMap<Compound, f32>,
}

impl MicrobeSpecies {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn bacteria(mut self) -> Self {
        self.is_bacteria = true;
        self
    }

    pub fn with_compound(mut self, compound: Compound, amount: f32) -> Self {
        self.initial_compounds.insert(compound, amount);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let species = MicrobeSpecies::new("Primum thrivium")
            .with_compound(Compound::ATP, 30.0)
            .with_compound(Compound::GLUCOSE, 10.0);

        assert!(!species.is_bacteria);
        assert_eq!(species.initial_compounds.get(&Compound::ATP), Some(&30.0));
        assert!(MicrobeSpecies::new("b").bacteria().is_bacteria);
    }

    #[test]
    fn test_species_from_json() {
        let species: MicrobeSpecies = serde_json::from_str(
            r#"{ "name": "Coccus", "is_bacteria": true, "initial_compounds": { "atp": 12.5 } }"#,
        )
        .expect("species parses");

        assert!(species.is_bacteria);
        assert_eq!(species.initial_compounds.get(&Compound::ATP), Some(&12.5));
    }
}
