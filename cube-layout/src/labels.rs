//! FILENAME: cube-layout/src/labels.rs
//! Label resolution for a single layout run.
//!
//! Header rows ask for the same category label once per value column, so
//! resolved labels are memoized. The memo lives only as long as one
//! assembly; nothing is cached across calls.

use rustc_hash::FxHashMap;
use crate::cube::Cube;
use crate::error::LayoutError;

pub struct LabelResolver<'a, C: Cube + ?Sized> {
    cube: &'a C,
    categories: FxHashMap<(usize, usize), String>,
}

impl<'a, C: Cube + ?Sized> LabelResolver<'a, C> {
    pub fn new(cube: &'a C) -> Self {
        LabelResolver {
            cube,
            categories: FxHashMap::default(),
        }
    }

    /// Label of `category` in dimension `dim`.
    pub fn category(&mut self, dim: usize, category: usize) -> Result<String, LayoutError> {
        if let Some(label) = self.categories.get(&(dim, category)) {
            return Ok(label.clone());
        }

        let label = self
            .cube
            .category_label(dim, category)
            .ok_or_else(|| LayoutError::missing_category(dim, category))?
            .into_owned();
        self.categories.insert((dim, category), label.clone());
        Ok(label)
    }

    /// Name of dimension `dim`. Requested once per row dimension, not memoized.
    pub fn dimension(&self, dim: usize) -> Result<String, LayoutError> {
        self.cube
            .dimension_label(dim)
            .map(|label| label.into_owned())
            .ok_or_else(|| LayoutError::missing_dimension(dim))
    }

    /// Number of distinct category labels resolved so far.
    pub fn resolved_count(&self) -> usize {
        self.categories.len()
    }
}
