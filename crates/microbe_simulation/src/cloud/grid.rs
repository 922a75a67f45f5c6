//! Grid-реализация CompoundCloud
//!
//! 2D сетка в плоскости XZ (Y игнорируется), центр сетки в origin.
//! Каждая ячейка хранит концентрацию каждого compound отдельным слоем.

use std::collections::BTreeMap;

use bevy::prelude::*;
use rand::Rng;

use super::CompoundCloud;
use crate::compounds::{AbsorbedTally, Compound, CompoundBag};

#[derive(Debug, Clone)]
pub struct CompoundCloudGrid {
    width: usize,
    height: usize,
    cell_size: f32,
    /// compound → концентрации по ячейкам (row-major, z * width + x)
    layers: BTreeMap<Compound, Vec<f32>>,
}

impl CompoundCloudGrid {
    pub fn new(width: usize, height: usize, cell_size: f32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            cell_size: if cell_size > 0.0 { cell_size } else { 1.0 },
            layers: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Мировая координата левого-нижнего угла сетки
    fn grid_origin(&self) -> Vec2 {
        Vec2::new(
            -(self.width as f32) * self.cell_size * 0.5,
            -(self.height as f32) * self.cell_size * 0.5,
        )
    }

    /// Индекс ячейки по мировой позиции (None — за пределами поля)
    fn cell_index(&self, position: Vec3) -> Option<(usize, usize)> {
        let local = (Vec2::new(position.x, position.z) - self.grid_origin()) / self.cell_size;

        if !local.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }

        let (cx, cz) = (local.x.floor() as usize, local.y.floor() as usize);
        (cx < self.width && cz < self.height).then_some((cx, cz))
    }

    fn cell_center(&self, cx: usize, cz: usize) -> Vec2 {
        self.grid_origin() + (Vec2::new(cx as f32, cz as f32) + Vec2::splat(0.5)) * self.cell_size
    }

    /// Добавить облако вещества в ячейку под `position`
    ///
    /// Возвращает false, если позиция вне поля.
    pub fn add_cloud(&mut self, compound: &Compound, position: Vec3, amount: f32) -> bool {
        if amount.is_nan() || amount <= 0.0 {
            return false;
        }

        let Some((cx, cz)) = self.cell_index(position) else {
            return false;
        };

        let cells = self.width * self.height;
        let layer = self
            .layers
            .entry(compound.clone())
            .or_insert_with(|| vec![0.0; cells]);
        layer[cz * self.width + cx] += amount;
        true
    }

    /// Концентрация в ячейке под `position`
    pub fn amount_at(&self, compound: &Compound, position: Vec3) -> f32 {
        match (self.cell_index(position), self.layers.get(compound)) {
            (Some((cx, cz)), Some(layer)) => layer[cz * self.width + cx],
            _ => 0.0,
        }
    }

    /// Суммарное количество вещества в поле
    pub fn total(&self, compound: &Compound) -> f32 {
        self.layers.get(compound).map(|layer| layer.iter().sum()).unwrap_or(0.0)
    }

    /// Разбросать `count` облаков по полю (детерминированно от RNG)
    pub fn scatter(
        &mut self,
        rng: &mut impl Rng,
        compound: &Compound,
        count: usize,
        amount_range: std::ops::Range<f32>,
    ) {
        if amount_range.is_empty() {
            return;
        }

        let origin = self.grid_origin();
        let extent = Vec2::new(self.width as f32, self.height as f32) * self.cell_size;

        for _ in 0..count {
            let x = origin.x + rng.gen::<f32>() * extent.x;
            let z = origin.y + rng.gen::<f32>() * extent.y;
            let amount = rng.gen_range(amount_range.clone());
            self.add_cloud(compound, Vec3::new(x, 0.0, z), amount);
        }
    }

    /// Ячейки, которые попадают в круг захвата
    ///
    /// Ячейка считается, если её центр внутри radius. Ячейка под самой
    /// позицией берётся всегда (маленький радиус < половины ячейки).
    fn cells_in_radius(&self, position: Vec3, radius: f32) -> Vec<usize> {
        let mut cells = Vec::new();
        let center = Vec2::new(position.x, position.z);
        let radius = radius.max(0.0);

        if let Some((cx, cz)) = self.cell_index(position) {
            cells.push(cz * self.width + cx);
        }

        if !center.is_finite() || !radius.is_finite() {
            return cells;
        }

        let origin = self.grid_origin();
        let min = ((center - Vec2::splat(radius) - origin) / self.cell_size).floor();
        let max = ((center + Vec2::splat(radius) - origin) / self.cell_size).floor();

        let (x0, x1) = ((min.x as isize).max(0), (max.x as isize).min(self.width as isize - 1));
        let (z0, z1) = ((min.y as isize).max(0), (max.y as isize).min(self.height as isize - 1));

        for cz in z0..=z1 {
            for cx in x0..=x1 {
                let (cx, cz) = (cx as usize, cz as usize);
                let index = cz * self.width + cx;
                if cells.contains(&index) {
                    continue;
                }
                if self.cell_center(cx, cz).distance_squared(center) <= radius * radius {
                    cells.push(index);
                }
            }
        }

        cells
    }
}

impl CompoundCloud for CompoundCloudGrid {
    fn absorb_compounds(
        &mut self,
        position: Vec3,
        radius: f32,
        bag: &mut CompoundBag,
        tally: &mut AbsorbedTally,
    ) {
        let cells = self.cells_in_radius(position, radius);

        for (compound, layer) in self.layers.iter_mut() {
            for &index in &cells {
                let available = layer[index];
                if available <= 0.0 {
                    continue;
                }

                // Поле теряет ровно то, что bag принял
                let accepted = bag.add_compound(compound, available);
                layer[index] = (available - accepted).max(0.0);
                tally.record(compound, accepted);
            }
        }
    }
}
