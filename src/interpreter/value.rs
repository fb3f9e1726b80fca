/// Error kinds carried by error values.
///
/// Defines the `ErrorKind` taxonomy. Evaluation failures are values, not
/// Rust errors, so every kind here ends up inside a `Value::Error`.
pub mod error_kind;

pub mod core;
