pub mod barrett;
pub mod montgomery;

pub use barrett::{barrett_reduce, barrett_reduce_32};
pub use montgomery::{fqmul, fqmul_32, montgomery_reduce, montgomery_reduce_64};

/// Montgomery marks a coefficient that carries
/// an implicit factor `R`.
pub type Montgomery<O> = O;
