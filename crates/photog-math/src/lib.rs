//! # photog-math
//!
//! Fixed-size numeric primitives for color conversion.
//!
//! - [`Vec3`] - tristimulus values and RGB triplets
//! - [`Mat3`] - RGB<->XYZ matrices, cone-response bases, adaptation transforms
//! - [`KahanSum`] - compensated `f64` accumulation for image-wide reductions
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! The kernels are written out by hand rather than delegated to [`glam`], so
//! the evaluation order of every product is fixed. `glam` conversions are
//! provided for interop.
//!
//! # Usage
//!
//! ```rust
//! use photog_math::{Mat3, Vec3};
//!
//! let gain = Vec3::new(3.0, 4.0, 5.0) / Vec3::new(3.0, 2.0, 1.0);
//! let scale = Mat3::from_diagonal(gain);
//! assert_eq!(scale * Vec3::ONE, Vec3::new(1.0, 2.0, 5.0));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod sum;
mod vec3;

pub use mat3::*;
pub use sum::*;
pub use vec3::*;
