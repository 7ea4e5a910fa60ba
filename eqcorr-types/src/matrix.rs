/// A borrowed view over a 2-D unsigned-8-bit matrix.
///
/// Strides are element counts, not byte offsets — since cells are a single
/// byte, the two coincide, so there is no separate byte/element distinction
/// to carry around in the Rust core (the host bindings crate is where a
/// NumPy array's byte-strides get divided down to this representation).
#[derive(Clone, Copy, Debug)]
pub struct MatrixView<'a> {
    data: &'a [u8],
    rows: usize,
    cols: usize,
    row_stride: isize,
    col_stride: isize,
}

impl<'a> MatrixView<'a> {
    /// Wraps a row-major, contiguous buffer of shape `(rows, cols)`.
    pub fn contiguous(data: &'a [u8], rows: usize, cols: usize) -> Self {
        Self {
            data,
            rows,
            cols,
            row_stride: cols as isize,
            col_stride: 1,
        }
    }

    /// Wraps a buffer addressed with explicit row/column strides.
    ///
    /// `data` must be large enough that every in-bounds `(row, col)` maps to
    /// a valid index; callers (the host bindings crate) are responsible for
    /// checking this against the originating array's buffer length.
    pub fn strided(data: &'a [u8], rows: usize, cols: usize, row_stride: isize, col_stride: isize) -> Self {
        Self {
            data,
            rows,
            cols,
            row_stride,
            col_stride,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn row_stride(&self) -> isize {
        self.row_stride
    }

    #[inline]
    pub fn col_stride(&self) -> isize {
        self.col_stride
    }

    /// True when both dimensions are at least 2 — the smart-mode policy's
    /// "truly two-dimensional" predicate.
    #[inline]
    pub fn is_truly_2d(&self) -> bool {
        self.rows >= 2 && self.cols >= 2
    }

    /// Row-major, contiguous when `col_stride == 1`.
    #[inline]
    pub fn is_contiguous_inner(&self) -> bool {
        self.col_stride == 1
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        let offset = row as isize * self.row_stride + col as isize * self.col_stride;
        self.data[offset as usize]
    }

    /// Borrows the row `row` as a contiguous slice of length `cols`.
    ///
    /// Only valid when `is_contiguous_inner()`; the kernel's fast path is
    /// the only caller.
    #[inline]
    pub fn row_slice(&self, row: usize) -> &'a [u8] {
        debug_assert!(self.is_contiguous_inner());
        let start = (row as isize * self.row_stride) as usize;
        &self.data[start..start + self.cols]
    }

    /// Checks that this view's shape/stride combination only ever addresses
    /// bytes within its backing slice, and that both strides are
    /// non-negative — the kernel's index arithmetic (`row_slice`, `get`)
    /// assumes forward-only addressing, which the struct itself doesn't
    /// enforce since a caller can build a `MatrixView` directly rather than
    /// through the host bindings crate's own stride check.
    ///
    /// Returns a description of the mismatch on failure.
    pub fn validate(&self) -> Result<(), String> {
        if self.row_stride < 0 || self.col_stride < 0 {
            return Err(format!(
                "matrix view has a negative stride (row_stride={}, col_stride={}); only non-negative strides are supported",
                self.row_stride, self.col_stride
            ));
        }
        if self.rows == 0 || self.cols == 0 {
            return Ok(());
        }
        let max_offset = (self.rows - 1) as isize * self.row_stride + (self.cols - 1) as isize * self.col_stride;
        let required = max_offset as usize + 1;
        if required > self.data.len() {
            return Err(format!(
                "matrix view of shape ({}, {}) with strides ({}, {}) requires {} bytes but only {} are available",
                self.rows, self.cols, self.row_stride, self.col_stride, required, self.data.len()
            ));
        }
        Ok(())
    }
}
