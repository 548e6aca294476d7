/// Error type for the few operations that can fail outright
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// The matrix has a zero determinant, or inverting it produced non-finite values
    #[error("matrix is singular and cannot be inverted")]
    SingularMatrix,
}
