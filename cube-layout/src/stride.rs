//! FILENAME: cube-layout/src/stride.rs
//! PURPOSE: Row-major offset arithmetic over dimension sizes.
//! CONTEXT: A cube stores its values flat, with the last dimension varying
//! fastest. Every row label and column header in the grid is found by
//! decomposing an offset into per-dimension category indices with
//! `category_index`, applied to either the row or the column dimension group.

use smallvec::SmallVec;

/// Per-dimension category indices for one offset.
/// Cubes rarely exceed four dimensions, so the path usually stays inline.
pub type IndexPath = SmallVec<[usize; 4]>;

/// Product of all sizes. The empty product is 1.
pub fn product(sizes: &[usize]) -> usize {
    sizes.iter().product()
}

/// Product of all sizes, or `None` if it does not fit in a `usize`.
pub fn checked_product(sizes: &[usize]) -> Option<usize> {
    sizes.iter().try_fold(1usize, |acc, &s| acc.checked_mul(s))
}

/// Product of `sizes[idx..]`. Returns 1 when `idx` is at or past the end.
pub fn product_from(sizes: &[usize], idx: usize) -> usize {
    sizes.get(idx..).map_or(1, product)
}

/// Product of `sizes[..idx]`. `idx` is clamped to the length.
pub fn product_before(sizes: &[usize], idx: usize) -> usize {
    product(&sizes[..idx.min(sizes.len())])
}

/// Category index of dimension `idx` for flat `offset` within `sizes`.
///
/// `product_from(sizes, idx)` is the block holding dimension `idx` and every
/// faster-varying dimension after it; `product_from(sizes, idx + 1)` is the
/// stride of one step along `idx`.
pub fn category_index(sizes: &[usize], idx: usize, offset: usize) -> usize {
    let block = product_from(sizes, idx);
    let stride = product_from(sizes, idx + 1);
    (offset % block) / stride
}

/// Splits a flat offset into one category index per dimension.
pub fn decompose(sizes: &[usize], offset: usize) -> IndexPath {
    (0..sizes.len())
        .map(|idx| category_index(sizes, idx, offset))
        .collect()
}

/// Inverse of `decompose`. Returns `None` if the path has the wrong length
/// or any index is outside its dimension.
pub fn compose(sizes: &[usize], indices: &[usize]) -> Option<usize> {
    if indices.len() != sizes.len() {
        return None;
    }

    let mut offset = 0usize;
    for (&size, &idx) in sizes.iter().zip(indices) {
        if idx >= size {
            return None;
        }
        offset = offset.checked_mul(size)?.checked_add(idx)?;
    }
    Some(offset)
}
