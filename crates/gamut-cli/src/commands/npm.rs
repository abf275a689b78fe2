//! Normalized primary matrix command.

use anyhow::{Context, Result};
use gamut_primaries::{Gamut, GamutId};
use serde::Serialize;
use tracing::trace;

use super::{print_json, print_rows, rows3};
use crate::NpmArgs;

#[derive(Serialize)]
struct NpmReport {
    name: &'static str,
    gamut: Gamut,
    inverse: bool,
    matrix: Vec<Vec<f64>>,
}

pub fn run(args: NpmArgs) -> Result<()> {
    trace!(gamut = %args.gamut, inverse = args.inverse, "npm::run");

    let id: GamutId = args.gamut.parse()?;
    let gamut = id.gamut();
    let mut m = gamut
        .normalized_primary_matrix()
        .with_context(|| format!("Failed to derive NPM for {}", id))?;
    if args.inverse {
        m.invert_in_place()
            .with_context(|| format!("NPM of {} is not invertible", id))?;
    }
    let rows = rows3(&m);

    if args.output.json {
        print_json(&NpmReport {
            name: id.name(),
            gamut,
            inverse: args.inverse,
            matrix: rows,
        })
    } else {
        print_rows(&rows, args.output);
        Ok(())
    }
}
