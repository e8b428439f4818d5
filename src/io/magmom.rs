// src/io/magmom.rs
//
// VASP MAGMOM strings, as written in an INCAR:
//
//   MAGMOM = 2 -2 2 -2 6*0.0           collinear, one value per atom
//   MAGMOM = 3*0 0 0 5.5 0 0 -5.5      non-collinear, three values per atom
//
// "N*v" repeats v N times. Whether a string is collinear or not is only known
// once its values are counted and compared against the atom count.

use crate::error::{Error, Result};
use crate::model::{MomentArray, Moments, OutputShape, SpinAxis};

const LABEL: &str = "magmom";

/// Expands a MAGMOM string into one 3-vector per atom, in the requested shape.
pub fn decode(magmom: &str, natoms: usize, axis: SpinAxis, shape: OutputShape) -> Result<Moments> {
    let array = parse_magmom(magmom, natoms, axis)?;
    Ok(Moments::from_array(array, shape))
}

/// Expands a MAGMOM string into a dense `natoms x 3` array.
///
/// Collinear moments are placed on `axis`; the other two components are zero.
pub fn parse_magmom(magmom: &str, natoms: usize, axis: SpinAxis) -> Result<MomentArray> {
    if natoms == 0 {
        return Err(Error::NoAtoms);
    }

    let runs = runs(magmom)?;

    // Counted before expanding, so a huge "N*v" never gets allocated
    let found = runs
        .iter()
        .fold(0usize, |acc, (count, _)| acc.saturating_add(*count));
    let noncollinear = natoms.saturating_mul(3);

    if found == natoms {
        log::debug!("MAGMOM: collinear, {} atoms along {}", natoms, axis);
        let mut array = MomentArray::zeros(natoms);
        for (row, value) in array.rows_mut().iter_mut().zip(uncontract(&runs)) {
            row[axis.index()] = value;
        }
        Ok(array)
    } else if found == noncollinear {
        log::debug!("MAGMOM: non-collinear, {} atoms", natoms);
        let values: Vec<f64> = uncontract(&runs).collect();
        let rows = values
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        Ok(MomentArray::new(rows))
    } else {
        Err(Error::MomentCount {
            natoms,
            noncollinear,
            found,
        })
    }
}

/// Strips the label and '=' and reads every token as a `(count, value)` run.
fn runs(magmom: &str) -> Result<Vec<(usize, f64)>> {
    let cleaned = magmom.to_lowercase().replace(LABEL, "").replace('=', "");

    let mut runs = Vec::new();
    for token in cleaned.split_whitespace() {
        if let Some((count, value)) = token.split_once('*') {
            let count: usize = count
                .parse()
                .map_err(|_| Error::invalid_token(token, "repeat count is not a whole number"))?;
            if count == 0 {
                return Err(Error::invalid_token(token, "repeat count must be positive"));
            }
            runs.push((count, parse_value(token, value)?));
        } else {
            runs.push((1, parse_value(token, token)?));
        }
    }

    Ok(runs)
}

fn uncontract(runs: &[(usize, f64)]) -> impl Iterator<Item = f64> + '_ {
    runs.iter()
        .flat_map(|&(count, value)| std::iter::repeat(value).take(count))
}

fn parse_value(token: &str, text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| Error::invalid_token(token, format!("'{}' is not a number", text)))
}
