use crate::error::Error;

/// Match-count histogram, indexed by match count: `counts[k]` is the number
/// of translations whose element-wise equality count was exactly `k`.
#[derive(Debug, Clone)]
pub struct Histogram(pub Vec<u64>);

impl Histogram {
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0u64; len.max(1)])
    }

    /// Same as [`Histogram::zeroed`], but reserves capacity with
    /// `try_reserve_exact` first, surfacing an [`Error::Alloc`] instead of
    /// aborting on allocation failure.
    pub fn try_zeroed(len: usize) -> Result<Self, Error> {
        let len = len.max(1);
        let mut v: Vec<u64> = Vec::new();
        v.try_reserve_exact(len)
            .map_err(|_| Error::Alloc { what: "histogram", requested_bytes: len * std::mem::size_of::<u64>() })?;
        v.resize(len, 0);
        Ok(Self(v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single pair's full translation map for one rotation: one match count
/// per output cell, laid out row-major at the kernel's output shape.
#[derive(Debug, Clone)]
pub struct FullMap {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl FullMap {
    pub fn zeroed(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![0i32; rows * cols] }
    }

    /// Fallible counterpart of [`FullMap::zeroed`].
    pub fn try_zeroed(rows: usize, cols: usize) -> Result<Self, Error> {
        let len = rows * cols;
        let mut data: Vec<i32> = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::Alloc { what: "full map", requested_bytes: len * std::mem::size_of::<i32>() })?;
        data.resize(len, 0);
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }
}

/// The `nA x nB` grid of per-pair full maps for one rotation. A `None` cell
/// means that pair/rotation combination
/// was not computed (smart-mode pruning, or the rotation wasn't
/// requested for a non-smart run — in which case the whole slot is
/// `None` instead, see [`ComputeResult`]).
#[derive(Debug, Clone)]
pub struct RotationMaps {
    cells: Vec<Vec<Option<FullMap>>>,
}

impl RotationMaps {
    pub fn empty(n_a: usize, n_b: usize) -> Self {
        Self { cells: (0..n_a).map(|_| (0..n_b).map(|_| None).collect()).collect() }
    }

    pub fn set(&mut self, i_a: usize, i_b: usize, map: FullMap) {
        self.cells[i_a][i_b] = Some(map);
    }

    pub fn get(&self, i_a: usize, i_b: usize) -> Option<&FullMap> {
        self.cells[i_a][i_b].as_ref()
    }

    pub fn rows(&self) -> &[Vec<Option<FullMap>>] {
        &self.cells
    }
}

/// The ordered 6-slot bundle returned by `compute`.
#[derive(Debug, Clone, Default)]
pub struct ComputeResult {
    pub histogram: Option<Histogram>,
    pub r0: Option<RotationMaps>,
    pub r90: Option<RotationMaps>,
    pub r180: Option<RotationMaps>,
    pub r270: Option<RotationMaps>,
    pub worst_pairs: Option<Vec<(usize, usize)>>,
}
