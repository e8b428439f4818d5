// src/model/annotation.rs
//
// VESTA stores arrows in two sections:
//
// VECTR - one record per vector: a header "index x y z", one line per attached
//         site ("index 0 0 0 0" attaches the vector to the site of that index),
//         closed by "0 0 0 0 0". The section itself ends with another "0 0 0 0 0".
// VECTT - one line per vector: "index width r g b anchor_flag".

use crate::model::moments::MomentArray;
use crate::model::style::ArrowStyle;
use std::fmt::Write;

/// Closes one VECTR record, and the VECTR section as a whole.
pub const RECORD_TERMINATOR: &str = "0 0 0 0 0";

#[derive(Debug, Clone, PartialEq)]
pub struct VectorEntry {
    /// 1-based, matching VESTA's site numbering
    pub index: usize,
    pub vector: [f64; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct VectorAnnotationSet {
    entries: Vec<VectorEntry>,
    style: ArrowStyle,
}

impl VectorAnnotationSet {
    pub fn new(vectors: &MomentArray, style: &ArrowStyle) -> Self {
        let entries = vectors
            .iter()
            .enumerate()
            .map(|(i, v)| VectorEntry {
                index: i + 1,
                vector: *v,
            })
            .collect();

        Self {
            entries,
            style: style.clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[VectorEntry] {
        &self.entries
    }

    pub fn style(&self) -> &ArrowStyle {
        &self.style
    }

    /// Lines inserted right after the VECTR marker.
    pub fn geometry_block(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            let [x, y, z] = e.vector;
            // Writing into a String cannot fail
            let _ = writeln!(out, "  {} {:12.6} {:12.6} {:12.6} ", e.index, x, y, z);
            let _ = writeln!(out, "     {} 0  0  0  0 ", e.index);
            let _ = writeln!(out, " {}", RECORD_TERMINATOR);
        }
        out
    }

    /// Lines inserted right after the VECTT marker.
    pub fn style_block(&self) -> String {
        let width = self.style.line_width();
        let c = self.style.color;
        let flag = self.style.anchor.flag();

        let mut out = String::new();
        for e in &self.entries {
            let _ = writeln!(
                out,
                "  {} {} {} {} {} {}",
                e.index, width, c.r, c.g, c.b, flag
            );
        }
        out
    }
}
