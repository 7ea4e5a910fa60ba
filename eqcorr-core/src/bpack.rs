//! B-pack preprocessor: materializes each requested rotation of
//! every `B` into a contiguous row-major buffer up front, so the kernel
//! never has to reason about rotation at all — it only ever sees a 0°,
//! contiguous `MatrixView`.

use eqcorr_types::{Error, MatrixView, Rotation, RotationRequest};

use crate::smart::bpack_needs_quarter_rotations;

/// One `B`'s pre-rotated buffers, indexed by [`Rotation`].
pub struct BPack {
    buffers: [Option<Vec<u8>>; 4],
}

impl BPack {
    /// Borrows the rotated, contiguous view for `r`, or `None` if that
    /// rotation's buffer wasn't materialized (not requested, or pruned by
    /// the smart-mode B-pack pre-scan).
    pub fn view(&self, r: Rotation, hk: usize, wk: usize) -> Option<MatrixView<'_>> {
        self.buffers[r.index()].as_deref().map(|buf| MatrixView::contiguous(buf, hk, wk))
    }
}

/// Writes the rotation of `b` by `r` into a fresh contiguous row-major
/// buffer of the rotated logical shape.
fn materialize(b: &MatrixView<'_>, r: Rotation) -> Result<Vec<u8>, Error> {
    let (hb, wb) = (b.rows(), b.cols());
    let (hk, wk) = r.rotated_shape(hb, wb);
    let mut buf = Vec::new();
    buf.try_reserve_exact(hk * wk)
        .map_err(|_| Error::Alloc { what: "b-pack buffer", requested_bytes: hk * wk })?;
    buf.resize(hk * wk, 0);
    for by in 0..hk {
        for bx in 0..wk {
            let (row, col) = r.remap(by, bx, hb, wb);
            buf[by * wk + bx] = b.get(row, col);
        }
    }
    Ok(buf)
}

/// Builds a [`BPack`] for every `B` in `b_list`.
///
/// `any_a_2d` is the crate-wide pre-scan (true iff
/// any matrix in `A_list` is truly two-dimensional); it lets this function
/// skip materializing quarter-rotation buffers for a `B` that can never
/// need them under smart mode.
pub fn build(b_list: &[MatrixView<'_>], req: &RotationRequest, do_smart: bool, any_a_2d: bool) -> Result<Vec<BPack>, Error> {
    b_list
        .iter()
        .map(|b| {
            let quarter_needed = bpack_needs_quarter_rotations(do_smart, any_a_2d, b);
            let mut buffers: [Option<Vec<u8>>; 4] = [None, None, None, None];
            for r in Rotation::ALL {
                let is_quarter = matches!(r, Rotation::R90 | Rotation::R270);
                if req.is_requested(r) && (!is_quarter || quarter_needed) {
                    buffers[r.index()] = Some(materialize(b, r)?);
                }
            }
            Ok(BPack { buffers })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r0_is_identity() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let b = MatrixView::contiguous(&data, 2, 3);
        let buf = materialize(&b, Rotation::R0).unwrap();
        assert_eq!(buf, data);
    }

    #[test]
    fn r180_reverses_rows_and_cols() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let b = MatrixView::contiguous(&data, 2, 3);
        let buf = materialize(&b, Rotation::R180).unwrap();
        assert_eq!(buf, vec![6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn r90_then_r270_round_trips_to_original() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let b = MatrixView::contiguous(&data, 2, 3);
        let rotated = materialize(&b, Rotation::R90).unwrap();
        let (hk, wk) = Rotation::R90.rotated_shape(2, 3);
        let rotated_view = MatrixView::contiguous(&rotated, hk, wk);
        let back = materialize(&rotated_view, Rotation::R270).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn r90_known_values() {
        // B = [[1,2],[3,4]] rotated 90deg clockwise -> [[3,1],[4,2]]
        let data = [1u8, 2, 3, 4];
        let b = MatrixView::contiguous(&data, 2, 2);
        let buf = materialize(&b, Rotation::R90).unwrap();
        assert_eq!(buf, vec![3, 1, 4, 2]);
    }

    #[test]
    fn build_skips_quarter_buffers_when_smart_and_all_1d() {
        let b_data = [1u8, 2];
        let b_list = [MatrixView::contiguous(&b_data, 1, 2)];
        let req = RotationRequest { r0: true, r90: true, r180: true, r270: true };
        let packs = build(&b_list, &req, true, false).unwrap();
        assert!(packs[0].view(Rotation::R0, 1, 2).is_some());
        assert!(packs[0].view(Rotation::R90, 2, 1).is_none());
        assert!(packs[0].view(Rotation::R270, 2, 1).is_none());
    }

    #[test]
    fn build_keeps_quarter_buffers_when_any_a_is_2d() {
        let b_data = [1u8, 2];
        let b_list = [MatrixView::contiguous(&b_data, 1, 2)];
        let req = RotationRequest { r0: true, r90: true, r180: true, r270: true };
        let packs = build(&b_list, &req, true, true).unwrap();
        assert!(packs[0].view(Rotation::R90, 2, 1).is_some());
    }
}
