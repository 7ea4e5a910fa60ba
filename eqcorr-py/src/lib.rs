//! PyO3 extension module exposing [`eqcorr_core::compute`] to Python.
//!
//! Takes nine required keyword arguments (the A/B matrix lists, the four
//! rotation flags, the three aggregator flags) plus an optional smart-mode
//! flag, and returns the same six-slot result tuple the core crate
//! produces, using PyO3's GIL-aware smart pointers and the `numpy` crate's
//! typed array wrappers. This module owns no correlation logic; it only
//! translates.

use numpy::{PyArray1, PyArray2, PyReadonlyArray2, ToPyArray};
use pyo3::exceptions::{PyMemoryError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyList;

use eqcorr_core::{compute, AggregatorRequest, ComputeResult, Error, FullMap, MatrixView, RotationMaps, RotationRequest};

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::InvalidShape(msg) => PyValueError::new_err(msg),
        Error::Alloc { what, requested_bytes } => {
            PyMemoryError::new_err(format!("failed to allocate {requested_bytes} bytes for {what}"))
        }
    }
}

/// Borrows a read-only NumPy `uint8` array as a [`MatrixView`], without
/// copying. Only non-negative strides are supported; a reversed view (a
/// negative-stride slice, e.g. `arr[::-1]`) is rejected rather than
/// mishandled.
fn view_from_readonly<'py>(arr: &PyReadonlyArray2<'py, u8>) -> PyResult<MatrixView<'py>> {
    let array = arr.as_array();
    let shape = array.shape();
    let (rows, cols) = (shape[0], shape[1]);
    let strides = array.strides();
    let (row_stride, col_stride) = (strides[0], strides[1]);
    if row_stride < 0 || col_stride < 0 {
        return Err(PyValueError::new_err("reversed (negative-stride) array views are not supported"));
    }

    let data: &[u8] = if rows == 0 || cols == 0 {
        &[]
    } else {
        let max_offset = (rows - 1) as isize * row_stride + (cols - 1) as isize * col_stride;
        let len = max_offset as usize + 1;
        // SAFETY: the GIL token behind `'py` keeps the backing NumPy buffer
        // alive for the borrow's duration; `len` is the address of the
        // furthest element any (row, col) pair can reach under these
        // non-negative strides, so every offset `correlate` computes falls
        // within `0..len`.
        unsafe { std::slice::from_raw_parts(array.as_ptr(), len) }
    };

    Ok(MatrixView::strided(data, rows, cols, row_stride, col_stride))
}

fn views_from_pylist<'py>(list: &Bound<'py, PyList>) -> PyResult<Vec<MatrixView<'py>>> {
    list.iter().map(|item| view_from_readonly(&item.extract::<PyReadonlyArray2<'py, u8>>()?)).collect()
}

fn full_map_to_py<'py>(py: Python<'py>, map: &FullMap) -> Bound<'py, PyArray2<i32>> {
    let data: Vec<i32> = map.as_slice().to_vec();
    PyArray2::from_vec2_bound(py, &data.chunks(map.cols()).map(|row| row.to_vec()).collect::<Vec<_>>())
        .expect("FullMap rows all share the same length by construction")
}

fn rotation_maps_to_py<'py>(py: Python<'py>, maps: &Option<RotationMaps>) -> PyResult<Option<Py<PyList>>> {
    let Some(maps) = maps else { return Ok(None) };
    let outer = PyList::empty_bound(py);
    for row in maps.rows() {
        let inner = PyList::empty_bound(py);
        for cell in row {
            match cell {
                Some(map) => inner.append(full_map_to_py(py, map))?,
                None => inner.append(py.None())?,
            }
        }
        outer.append(inner)?;
    }
    Ok(Some(outer.into()))
}

/// Runs the equality-correlation sweep and returns the six-slot result
/// bundle described in the core crate's `ComputeResult`:
/// `(histogram, r0, r90, r180, r270, worst_pairs)`, each `None` when its
/// corresponding flag was false.
#[pyfunction]
#[pyo3(signature = (a_list, b_list, r0, r90, r180, r270, do_hist, do_full, do_worst, do_smart=false))]
#[allow(clippy::too_many_arguments)]
fn eqcorr2d<'py>(
    py: Python<'py>,
    a_list: Bound<'py, PyList>,
    b_list: Bound<'py, PyList>,
    r0: bool,
    r90: bool,
    r180: bool,
    r270: bool,
    do_hist: bool,
    do_full: bool,
    do_worst: bool,
    do_smart: bool,
) -> PyResult<(Option<Py<PyArray1<u64>>>, Option<Py<PyList>>, Option<Py<PyList>>, Option<Py<PyList>>, Option<Py<PyList>>, Option<Vec<(usize, usize)>>)> {
    let a_views = views_from_pylist(&a_list)?;
    let b_views = views_from_pylist(&b_list)?;

    let rot_req = RotationRequest { r0, r90, r180, r270 };
    let agg_req = AggregatorRequest { do_hist, do_full, do_worst, do_smart };

    let ComputeResult { histogram, r0: map_r0, r90: map_r90, r180: map_r180, r270: map_r270, worst_pairs } =
        compute(&a_views, &b_views, rot_req, agg_req).map_err(to_py_err)?;

    let histogram = histogram.map(|h| h.0.to_pyarray_bound(py).unbind());
    let map_r0 = rotation_maps_to_py(py, &map_r0)?;
    let map_r90 = rotation_maps_to_py(py, &map_r90)?;
    let map_r180 = rotation_maps_to_py(py, &map_r180)?;
    let map_r270 = rotation_maps_to_py(py, &map_r270)?;

    Ok((histogram, map_r0, map_r90, map_r180, map_r270, worst_pairs))
}

#[pymodule]
fn eqcorr_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(eqcorr2d, m)?)?;
    Ok(())
}
