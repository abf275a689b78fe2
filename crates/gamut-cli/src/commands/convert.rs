//! Gamut-to-gamut conversion matrix command.

use anyhow::{Context, Result};
use gamut_primaries::{get_conversion_matrix, Gamut};
use serde::Serialize;
use tracing::{debug, info, trace};

use super::{print_json, print_rows, resolve_gamut, rows3};
use crate::ConvertArgs;

#[derive(Serialize)]
struct ConvertReport {
    source: Gamut,
    destination: Gamut,
    matrix: Vec<Vec<f64>>,
}

pub fn run(args: ConvertArgs) -> Result<()> {
    trace!(from = ?args.from, to = ?args.to, "convert::run");

    let src = resolve_gamut(
        args.from.as_deref(),
        args.src_primaries.as_deref(),
        args.src_white.as_deref(),
    )
    .context("Invalid source gamut")?;
    let dst = resolve_gamut(
        args.to.as_deref(),
        args.dst_primaries.as_deref(),
        args.dst_white.as_deref(),
    )
    .context("Invalid destination gamut")?;
    debug!(?src, ?dst, "resolved gamuts");

    if src.whitepoint != dst.whitepoint {
        info!(
            src = %src.whitepoint,
            dst = %dst.whitepoint,
            "Whitepoints differ; no chromatic adaptation is applied"
        );
    }

    let m = get_conversion_matrix(&src, &dst).context("Failed to derive conversion matrix")?;
    let rows = rows3(&m);

    if args.output.json {
        print_json(&ConvertReport {
            source: src,
            destination: dst,
            matrix: rows,
        })
    } else {
        print_rows(&rows, args.output);
        Ok(())
    }
}
