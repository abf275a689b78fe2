//! Ad-hoc matrix inversion.

use anyhow::{Context, Result};
use gamut_math::AnyMatrix;
use serde::Serialize;
use tracing::{debug, trace};

use super::{print_json, print_rows};
use crate::InvertArgs;

#[derive(Serialize)]
struct InvertReport {
    size: usize,
    determinant: f64,
    inverse: Vec<Vec<f64>>,
}

pub fn run(args: InvertArgs) -> Result<()> {
    trace!(count = args.values.len(), "invert::run");

    let m = AnyMatrix::from_flat(&args.values).context("Expected 4, 9 or 16 values")?;
    debug!(kind = %m.type_name(), "parsed matrix");

    let inv = m.inverted().context("Matrix is not invertible")?;
    let rows = inv.to_rows();

    if args.output.json {
        print_json(&InvertReport {
            size: m.dimension().size(),
            determinant: m.determinant(),
            inverse: rows,
        })
    } else {
        print_rows(&rows, args.output);
        Ok(())
    }
}
