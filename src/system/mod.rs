//! Representation of a mesh system `A·I = V`.
//!
//! `A` is the square impedance matrix (row `i` is the KVL equation of loop
//! `i`), `I` the vector of unknown mesh currents and `V` the vector of source
//! voltages driving each loop.

mod matrix;
mod types;
mod validate;

pub use matrix::ComplexMatrix;
pub use types::*;
pub use validate::validate_shape;
