/// Failures reported at the few fallible boundaries of the crate.
///
/// The transforms and reductions themselves are total; see the crate-level
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid buffer length: expected {expected}, found {found}")]
    Length { expected: usize, found: usize },

    #[error("{field}: q * QINV = {found} mod 2^{r_bits}, expected 1")]
    MontgomeryInverse {
        field: &'static str,
        found: i64,
        r_bits: u32,
    },

    #[error("{field}: {name} = {found}, expected {expected} mod q")]
    Constant {
        field: &'static str,
        name: &'static str,
        expected: i64,
        found: i64,
    },

    #[error("{field}: root {root} is not a primitive {order}-th root of unity")]
    RootOrder {
        field: &'static str,
        root: i64,
        order: i64,
    },

    #[error("{field}: twiddle table has {found} entries, expected {expected}")]
    TableLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field}: zetas[{index}] = {found}, expected {expected}")]
    Twiddle {
        field: &'static str,
        index: usize,
        expected: i64,
        found: i64,
    },
}
