//! CompoundBag — bounded storage веществ
//!
//! Инварианты:
//! - каждое количество ≥ 0
//! - сумма всех количеств ≤ capacity (add обрезает излишек)
//! - take никогда не отдаёт больше запрошенного или имеющегося
//!
//! Нехватка — нормальный результат (take вернул меньше), не ошибка.

use std::collections::BTreeMap;

use super::Compound;

/// Хранилище веществ клетки
///
/// BTreeMap вместо HashMap: детерминированный порядок итерации.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundBag {
    capacity: f32,
    compounds: BTreeMap<Compound, f32>,
    /// Флаги "полезности" — пишет process system (внешний)
    useful: BTreeMap<Compound, bool>,
    /// Хоть один флаг был true с последнего clear (сбрасывает только clear)
    any_set_useful: bool,
}

/// NaN и отрицательные значения → 0
fn sanitize(amount: f32) -> f32 {
    if amount.is_nan() {
        0.0
    } else {
        amount.max(0.0)
    }
}

impl CompoundBag {
    pub fn new(capacity: f32) -> Self {
        Self {
            capacity: sanitize(capacity),
            ..Default::default()
        }
    }

    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    /// Задать общую вместимость (при ready / переинициализации)
    pub fn set_capacity(&mut self, capacity: f32) {
        self.capacity = sanitize(capacity);
    }

    pub fn get_compound_amount(&self, compound: &Compound) -> f32 {
        self.compounds.get(compound).copied().unwrap_or(0.0)
    }

    /// Сумма по всем compounds
    pub fn total_stored(&self) -> f32 {
        self.compounds.values().sum()
    }

    /// Сколько ещё влезет
    pub fn free_space(&self) -> f32 {
        (self.capacity - self.total_stored()).max(0.0)
    }

    /// Добавить вещество, излишек сверх capacity отбрасывается
    ///
    /// Возвращает реально добавленное количество.
    pub fn add_compound(&mut self, compound: &Compound, amount: f32) -> f32 {
        let added = sanitize(amount).min(self.free_space());

        if added <= 0.0 {
            return 0.0;
        }

        *self.compounds.entry(compound.clone()).or_insert(0.0) += added;
        added
    }

    /// Забрать до `amount` вещества
    ///
    /// Возвращает `min(amount, stored)`.
    pub fn take_compound(&mut self, compound: &Compound, amount: f32) -> f32 {
        let requested = sanitize(amount);

        let Some(stored) = self.compounds.get_mut(compound) else {
            return 0.0;
        };

        let taken = requested.min(*stored);
        *stored -= taken;

        // float остаток не должен уйти в минус
        if *stored <= 0.0 {
            *stored = 0.0;
        }

        taken
    }

    /// Обнулить все вещества и флаги полезности (capacity не трогаем)
    pub fn clear_compounds(&mut self) {
        self.compounds.clear();
        self.useful.clear();
        self.any_set_useful = false;
    }

    pub fn set_useful(&mut self, compound: &Compound, useful: bool) {
        self.useful.insert(compound.clone(), useful);
        self.any_set_useful |= useful;
    }

    pub fn is_useful(&self, compound: &Compound) -> bool {
        self.useful.get(compound).copied().unwrap_or(false)
    }

    /// true если process system хоть раз пометил что-то полезным с последнего clear
    pub fn has_any_been_set_useful(&self) -> bool {
        self.any_set_useful
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Compound, f32)> {
        self.compounds.iter().map(|(compound, amount)| (compound, *amount))
    }
}
