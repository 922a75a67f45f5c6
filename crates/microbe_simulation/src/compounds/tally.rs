use std::collections::BTreeMap;

use super::Compound;

/// Накопленные количества поглощённых веществ
///
/// Только растёт. Пишет CompoundCloud при absorb, читает AI
/// (run and tumble к источникам).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbsorbedTally {
    totals: BTreeMap<Compound, f32>,
}

impl AbsorbedTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Учесть поглощённое количество (≤ 0 игнорируется)
    pub fn record(&mut self, compound: &Compound, amount: f32) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }

        *self.totals.entry(compound.clone()).or_insert(0.0) += amount;
    }

    pub fn get(&self, compound: &Compound) -> f32 {
        self.totals.get(compound).copied().unwrap_or(0.0)
    }

    /// Слить другой tally (кадровый → lifetime)
    pub fn merge(&mut self, other: &AbsorbedTally) {
        for (compound, amount) in other.iter() {
            self.record(compound, amount);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Compound, f32)> {
        self.totals.iter().map(|(compound, amount)| (compound, *amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creates_and_accumulates() {
        let mut tally = AbsorbedTally::new();
        tally.record(&Compound::GLUCOSE, 2.0);
        tally.record(&Compound::GLUCOSE, 1.5);

        assert_eq!(tally.get(&Compound::GLUCOSE), 3.5);
        assert_eq!(tally.get(&Compound::ATP), 0.0);
    }

    #[test]
    fn test_record_ignores_non_positive() {
        let mut tally = AbsorbedTally::new();
        tally.record(&Compound::GLUCOSE, 0.0);
        tally.record(&Compound::GLUCOSE, -4.0);
        tally.record(&Compound::GLUCOSE, f32::NAN);

        assert!(tally.is_empty());
    }

    #[test]
    fn test_merge_is_monotonic() {
        let mut lifetime = AbsorbedTally::new();
        lifetime.record(&Compound::AMMONIA, 1.0);

        let mut frame = AbsorbedTally::new();
        frame.record(&Compound::AMMONIA, 0.5);
        frame.record(&Compound::GLUCOSE, 2.0);

        lifetime.merge(&frame);

        assert_eq!(lifetime.get(&Compound::AMMONIA), 1.5);
        assert_eq!(lifetime.get(&Compound::GLUCOSE), 2.0);
    }
}
