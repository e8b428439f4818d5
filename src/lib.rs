//! Tools for drawing per-atom vectors (magnetic moments, displacements) as
//! arrows in VESTA project files, and for expanding VASP MAGMOM strings into a
//! dense `natoms x 3` array.
//!
//! ```no_run
//! use vesta_vec::{annotate, parse_magmom, ArrowStyle, SpinAxis};
//!
//! // Collinear MAGMOM for 10 atoms, moments along z
//! let moments = parse_magmom("2 -2 2 -2 6*0.0", 10, SpinAxis::Z)?;
//!
//! // Arrow length is scaled before annotating
//! annotate("V2Se2O.vesta", &moments.scaled(1.6), &ArrowStyle::default(), "v2se2o_vec_z.vesta")?;
//! # Ok::<(), vesta_vec::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod utils;

pub use config::Config;
pub use error::{Error, Result};
pub use io::magmom::{decode, parse_magmom};
pub use io::vector_file;
pub use io::vesta::{annotate, VestaDocument};
pub use io::VectorSource;
pub use model::{
    ArrowAnchor, ArrowStyle, MomentArray, MomentMap, Moments, OutputShape, Rgb, SpinAxis,
    VectorAnnotationSet,
};
