// src/io/vesta.rs
// Targeted patching of VESTA (.vesta) project files.
//
// A .vesta file is a list of keyword sections (TITLE, CELLP, STRUC, SITET,
// VECTR, VECTT, VECTS, ...), each keyword on its own line followed by data
// lines. Only the vector sections are touched here:
//
// VECTR      - replaced with the generated geometry records
// VECTT      - generated style records inserted after the marker
// VECTS <s>  - forced to 1.0 so arrows are never drawn at zero length
//
// Everything else is carried through byte for byte.

use crate::error::Result;
use crate::model::annotation::RECORD_TERMINATOR;
use crate::model::{ArrowStyle, MomentArray, VectorAnnotationSet};
use std::fmt;
use std::fs;
use std::path::Path;

pub const VECTOR_GEOMETRY: &str = "VECTR";
pub const VECTOR_STYLE: &str = "VECTT";
pub const VECTOR_SCALE: &str = "VECTS";
pub const SITE_STYLE: &str = "SITET";

const SCALE_LINE: &str = "VECTS 1.000000";

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    Outside,
    InVectorGeometry,
}

/// Host file held as raw lines, each with its own terminator.
///
/// Lines are bytes so hosts in a legacy encoding are copied unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VestaDocument {
    lines: Vec<Vec<u8>>,
}

impl VestaDocument {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn parse(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            lines: bytes.split_inclusive(|&b| b == b'\n').map(<[u8]>::to_vec).collect(),
        }
    }

    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True if some line, trimmed, is exactly `marker`.
    pub fn has_section(&self, marker: &str) -> bool {
        self.lines.iter().any(|l| l.trim_ascii() == marker.as_bytes())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.concat()
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path.as_ref(), self.to_bytes())?;
        Ok(())
    }

    /// Returns a new document with `set` spliced into the vector sections.
    pub fn annotate(&self, set: &VectorAnnotationSet) -> VestaDocument {
        let geometry = set.geometry_block();
        let style = set.style_block();

        let mut out: Vec<Vec<u8>> = Vec::with_capacity(self.lines.len() + 4 * set.len());
        let mut state = ScanState::Outside;

        for line in &self.lines {
            let trimmed = line.trim_ascii();

            if trimmed == VECTOR_GEOMETRY.as_bytes() {
                out.push(line.clone());
                out.extend(block_lines(&geometry));
                state = ScanState::InVectorGeometry;
                continue;
            }

            if state == ScanState::InVectorGeometry {
                // Host's own records are dropped; its closing terminator is kept
                if trimmed == RECORD_TERMINATOR.as_bytes() {
                    out.push(line.clone());
                    state = ScanState::Outside;
                }
                continue;
            }

            if trimmed == VECTOR_STYLE.as_bytes() {
                out.push(line.clone());
                out.extend(block_lines(&style));
                continue;
            }

            if line.starts_with(VECTOR_SCALE.as_bytes()) {
                let mut scale = SCALE_LINE.as_bytes().to_vec();
                scale.extend_from_slice(line_ending(line));
                out.push(scale);
                continue;
            }

            out.push(line.clone());
        }

        if state == ScanState::InVectorGeometry {
            log::warn!(
                "{} section has no closing '{}' line; host records after it were dropped",
                VECTOR_GEOMETRY,
                RECORD_TERMINATOR
            );
        }

        VestaDocument { lines: out }
    }
}

impl fmt::Display for VestaDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            f.write_str(&String::from_utf8_lossy(line))?;
        }
        Ok(())
    }
}

fn block_lines(block: &str) -> impl Iterator<Item = Vec<u8>> + '_ {
    block.split_inclusive('\n').map(|l| l.as_bytes().to_vec())
}

fn line_ending(line: &[u8]) -> &'static [u8] {
    if line.ends_with(b"\r\n") {
        b"\r\n"
    } else if line.ends_with(b"\n") {
        b"\n"
    } else {
        b""
    }
}

/// Writes a copy of `host` to `output` with one arrow per row of `vectors`.
///
/// The host file itself is never modified. `vectors` should already carry any
/// length scaling.
pub fn annotate(
    host: impl AsRef<Path>,
    vectors: &MomentArray,
    style: &ArrowStyle,
    output: impl AsRef<Path>,
) -> Result<()> {
    let host = host.as_ref();
    let output = output.as_ref();

    let doc = VestaDocument::read(host)?;
    for marker in [VECTOR_GEOMETRY, VECTOR_STYLE] {
        if !doc.has_section(marker) {
            log::warn!("{} has no {} section", host.display(), marker);
        }
    }

    let set = VectorAnnotationSet::new(vectors, style);
    log::debug!(
        "{}: {} lines, {} vectors, line width {}",
        host.display(),
        doc.len(),
        set.len(),
        style.line_width()
    );

    doc.annotate(&set).write(output)?;
    log::info!("Successfully generated new VESTA file: {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ArrowAnchor, Rgb};

    const HOST: &str = "\
#VESTA_FORMAT_VERSION 3.5.4

CRYSTAL

TITLE
V2Se2O

SITET
  1         V1  1.2000 0.750 0.000 0.671   0
  0 0 0 0 0 0
VECTR
 0 0 0 0 0
VECTT
 0 0 0 0 0
SPLAN
  0   0   0   0
VECTS 0.000000
FORM
  0   1.000  0 0 0
";

    fn one_vector() -> VectorAnnotationSet {
        VectorAnnotationSet::new(
            &MomentArray::new(vec![[1.0, 2.0, 3.0]]),
            &ArrowStyle::default(),
        )
    }

    #[test]
    fn test_vectr_placeholder_replaced() {
        let doc = VestaDocument::parse("VECTR\n0 0 0 0 0\n");
        let out = doc.annotate(&one_vector()).to_string();

        assert_eq!(
            out,
            "VECTR\n\
             \x20 1     1.000000     2.000000     3.000000 \n\
             \x20    1 0  0  0  0 \n\
             \x200 0 0 0 0\n\
             0 0 0 0 0\n"
        );
    }

    #[test]
    fn test_full_host_only_touches_vector_sections() {
        let doc = VestaDocument::parse(HOST);
        let out = doc.annotate(&one_vector());
        assert!(out.has_section(SITE_STYLE));
        let text = out.to_string();

        let expected = HOST
            .replace(
                "VECTR\n 0 0 0 0 0\n",
                "VECTR\n  1     1.000000     2.000000     3.000000 \n     1 0  0  0  0 \n 0 0 0 0 0\n 0 0 0 0 0\n",
            )
            .replace("VECTT\n", "VECTT\n  1 0.3 0 0 255 1\n")
            .replace("VECTS 0.000000\n", "VECTS 1.000000\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_existing_geometry_records_are_dropped() {
        let host = "VECTR\n   1    0.5    0.5    0.5 0\n    1   0    0    0    0\n 0 0 0 0 0\n 0 0 0 0 0\nVECTT\n";
        let out = VestaDocument::parse(host).annotate(&one_vector()).to_string();

        assert!(!out.contains("0.5"));
        // generated record terminator + the first host terminator; the second
        // host terminator falls outside the section and is kept as-is
        assert_eq!(out.matches("0 0 0 0 0").count(), 3);
        assert!(out.ends_with("VECTT\n  1 0.3 0 0 255 1\n"));
    }

    #[test]
    fn test_style_body_not_suppressed() {
        let host = "VECTT\n 0 0 0 0 0\nSPLAN\n";
        let out = VestaDocument::parse(host).annotate(&one_vector()).to_string();
        assert_eq!(out, "VECTT\n  1 0.3 0 0 255 1\n 0 0 0 0 0\nSPLAN\n");
    }

    #[test]
    fn test_scale_line_normalized() {
        for host in ["VECTS 0.000000\n", "VECTS 2.5\n", "VECTS\n"] {
            let out = VestaDocument::parse(host).annotate(&one_vector()).to_string();
            assert_eq!(out, "VECTS 1.000000\n");
        }
        // indented line does not start with the keyword
        let out = VestaDocument::parse("  VECTS 0.0\n").annotate(&one_vector()).to_string();
        assert_eq!(out, "  VECTS 0.0\n");
    }

    #[test]
    fn test_line_endings_preserved() {
        let host = "TITLE\r\nVECTS 0.0\r\nSITET\r\nlast line";
        let out = VestaDocument::parse(host).annotate(&one_vector()).to_string();
        assert_eq!(out, "TITLE\r\nVECTS 1.000000\r\nSITET\r\nlast line");
    }

    #[test]
    fn test_markers_are_case_sensitive_and_trimmed() {
        let host = "  VECTR  \n 0 0 0 0 0\nvectt\n";
        let out = VestaDocument::parse(host).annotate(&one_vector()).to_string();
        assert!(out.starts_with("  VECTR  \n  1     1.000000"));
        assert!(out.ends_with("vectt\n"));
    }

    #[test]
    fn test_unterminated_geometry_section_drops_rest() {
        let host = "VECTR\n 1 0 0 0\nVECTT\n";
        let out = VestaDocument::parse(host).annotate(&one_vector()).to_string();
        assert_eq!(
            out,
            "VECTR\n  1     1.000000     2.000000     3.000000 \n     1 0  0  0  0 \n 0 0 0 0 0\n"
        );
    }

    #[test]
    fn test_annotate_writes_new_file_and_keeps_host() {
        let dir = tempfile::tempdir().unwrap();
        let host = dir.path().join("host.vesta");
        let output = dir.path().join("out.vesta");
        fs::write(&host, HOST).unwrap();

        let style = ArrowStyle {
            color: Rgb::new(255, 0, 0),
            width_scale: 2.0,
            anchor: ArrowAnchor::Site,
        };
        let vectors = MomentArray::new(vec![[0.0, 0.0, 2.0], [0.0, 0.0, -2.0]]);
        annotate(&host, &vectors, &style, &output).unwrap();

        assert_eq!(fs::read_to_string(&host).unwrap(), HOST);
        let out = fs::read_to_string(&output).unwrap();
        assert!(out.contains("VECTT\n  1 0.6 255 0 0 0\n  2 0.6 255 0 0 0\n"));
        assert!(out.contains("  2     0.000000     0.000000    -2.000000 \n     2 0  0  0  0 \n"));
        assert!(out.contains("VECTS 1.000000\n"));
    }

    #[test]
    fn test_annotate_overwrites_output() {
        let dir = tempfile::tempdir().unwrap();
        let host = dir.path().join("host.vesta");
        let output = dir.path().join("out.vesta");
        fs::write(&host, "VECTR\n 0 0 0 0 0\n").unwrap();
        fs::write(&output, "stale content that is much longer than the result\n").unwrap();

        annotate(&host, &MomentArray::zeros(1), &ArrowStyle::default(), &output).unwrap();
        let out = fs::read_to_string(&output).unwrap();
        assert!(out.starts_with("VECTR\n"));
        assert!(!out.contains("stale"));
    }

    #[test]
    fn test_non_utf8_host_copied_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let host = dir.path().join("host.vesta");
        let output = dir.path().join("out.vesta");
        // Latin-1 "Fe3O4 (magnétite)"
        let mut bytes = b"TITLE\nFe3O4 (magn".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"tite)\nVECTR\n 0 0 0 0 0\nVECTT\n 0 0 0 0 0\nVECTS 0.000000\n");
        fs::write(&host, &bytes).unwrap();

        annotate(&host, &MomentArray::new(vec![[1.0, 2.0, 3.0]]), &ArrowStyle::default(), &output)
            .unwrap();

        let out = fs::read(&output).unwrap();
        let title_len = b"TITLE\nFe3O4 (magn\xE9tite)\n".len();
        assert_eq!(out[..title_len], bytes[..title_len]);
        assert!(String::from_utf8(out.clone()).is_err());

        let expected = VestaDocument::from_bytes(&bytes).annotate(&one_vector()).to_bytes();
        assert_eq!(out, expected);
        assert!(out.ends_with(b"VECTS 1.000000\n"));
    }

    #[test]
    fn test_missing_host_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = annotate(
            dir.path().join("nope.vesta"),
            &MomentArray::zeros(1),
            &ArrowStyle::default(),
            dir.path().join("out.vesta"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!dir.path().join("out.vesta").exists());
    }
}
