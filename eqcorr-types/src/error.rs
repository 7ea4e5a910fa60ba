/// Failure modes of a `compute` run.
///
/// Plain `Debug`-driven, matching the rest of this workspace's error
/// types — no `std::error::Error` impl beyond what every sibling crate
/// already carries.
#[derive(Debug)]
pub enum Error {
    /// An element of `A_list`/`B_list` was not a 2-D unsigned-8-bit matrix.
    InvalidShape(String),
    /// A buffer (histogram, worst-tracker bitmap, B-pack buffer, output
    /// map) could not be allocated at the requested size.
    Alloc { what: &'static str, requested_bytes: usize },
}
