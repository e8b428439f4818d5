// src/utils/report.rs

use crate::model::MomentArray;
use nalgebra::Vector3;

const MAX_ROWS: usize = 20;

/// Generates a short table of the vectors about to be drawn
pub fn moment_summary(vectors: &MomentArray) -> String {
    let mut out = String::new();
    out.push_str(&format!("Vectors: {}\n", vectors.len()));
    out.push_str("------------------------------------------------------\n");
    out.push_str(&format!(
        "{:<8} {:<10} {:<10} {:<10} {:<10}\n",
        "Index", "X", "Y", "Z", "|m|"
    ));
    out.push_str("------------------------------------------------------\n");

    let mut net: Vector3<f64> = Vector3::zeros();
    for (i, row) in vectors.iter().enumerate() {
        let v = Vector3::from(*row);
        net += v;

        if i < MAX_ROWS {
            out.push_str(&format!(
                "{:<8} {:<10.4} {:<10.4} {:<10.4} {:<10.4}\n",
                i, v.x, v.y, v.z, v.norm()
            ));
        }
    }

    if vectors.len() > MAX_ROWS {
        out.push_str(&format!("... and {} more vectors.\n", vectors.len() - MAX_ROWS));
    }

    out.push_str("------------------------------------------------------\n");
    out.push_str(&format!(
        "Net: ({:.4}, {:.4}, {:.4})  |net| = {:.4}\n",
        net.x, net.y, net.z, net.norm()
    ));

    out
}
