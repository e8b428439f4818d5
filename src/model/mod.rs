//src/model/mod.rs
pub mod annotation;
pub mod moments;
pub mod style;

// Re-exports for cleaner imports
pub use annotation::{VectorAnnotationSet, VectorEntry};
pub use moments::{MomentArray, MomentMap, Moments, OutputShape, SpinAxis};
pub use style::{ArrowAnchor, ArrowStyle, Rgb};
