//! FILENAME: tests/common/mod.rs
//! Fixtures for cube-layout integration tests.

#![allow(dead_code)]

use std::borrow::Cow;
use cube_layout::{Cube, CubeData, CubeValue, DimensionData};

/// Population fixture: Sex x Age x Year, 2 x 3 x 2 = 12 values.
pub struct PopulationFixture;

impl PopulationFixture {
    pub fn dimensions() -> Vec<DimensionData> {
        vec![
            DimensionData::new("Sex", ["Male", "Female"]),
            DimensionData::new("Age", ["0-17", "18-64", "65+"]),
            DimensionData::new("Year", ["2023", "2024"]),
        ]
    }

    /// Values 1..=12 in row-major order.
    pub fn values() -> Vec<CubeValue> {
        (1..=12).map(|n| CubeValue::Number(n as f64)).collect()
    }

    pub fn cube() -> CubeData {
        CubeData::from_dimensions(Self::dimensions(), Self::values())
    }
}

/// Builds a cube of the given sizes with generated labels ("D0", "d0c1", ...)
/// and values equal to their flat offset.
pub fn generated_cube(sizes: &[usize]) -> CubeData {
    let dimensions = sizes
        .iter()
        .enumerate()
        .map(|(d, &size)| {
            DimensionData::new(
                format!("D{}", d),
                (0..size).map(|c| format!("d{}c{}", d, c)),
            )
        })
        .collect();
    let count: usize = sizes.iter().product();
    let values = (0..count).map(|o| CubeValue::Number(o as f64)).collect();
    CubeData::new(sizes.to_vec(), values, dimensions)
}

/// A cube whose labels are computed on demand and whose values are missing
/// at every offset divisible by `gap`.
pub struct ComputedCube {
    pub sizes: Vec<usize>,
    pub gap: usize,
    /// Dimension whose category labels cannot be resolved.
    pub broken_dim: Option<usize>,
}

impl Cube for ComputedCube {
    fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    fn value_count(&self) -> usize {
        self.sizes.iter().product()
    }

    fn value_text(&self, offset: usize) -> Option<Cow<'_, str>> {
        if offset % self.gap == 0 {
            None
        } else {
            Some(Cow::Owned(format!("v{}", offset)))
        }
    }

    fn dimension_label(&self, dim: usize) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(format!("dim{}", dim)))
    }

    fn category_label(&self, dim: usize, category: usize) -> Option<Cow<'_, str>> {
        if Some(dim) == self.broken_dim || category >= *self.sizes.get(dim)? {
            return None;
        }
        Some(Cow::Owned(format!("{}:{}", dim, category)))
    }
}
