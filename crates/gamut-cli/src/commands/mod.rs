//! CLI command implementations

pub mod convert;
pub mod invert;
pub mod list;
pub mod npm;

use anyhow::{bail, Context, Result};
use gamut_primaries::{Gamut, GamutId};
use serde::Serialize;

use crate::OutputArgs;

/// Parses `expected` comma-separated floats.
pub fn parse_floats(text: &str, expected: usize, what: &str) -> Result<Vec<f64>> {
    let values = text
        .split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .with_context(|| format!("Invalid number '{}' in {}", part, what))
        })
        .collect::<Result<Vec<_>>>()?;
    if values.len() != expected {
        bail!("{} needs {} values, got {}", what, expected, values.len());
    }
    Ok(values)
}

/// Resolves a gamut from a preset name or explicit primaries and whitepoint.
pub fn resolve_gamut(
    name: Option<&str>,
    primaries: Option<&str>,
    white: Option<&str>,
) -> Result<Gamut> {
    match (name, primaries, white) {
        (Some(name), None, None) => {
            let id: GamutId = name.parse()?;
            Ok(id.gamut())
        }
        (None, Some(primaries), Some(white)) => {
            let p = parse_floats(primaries, 6, "primaries")?;
            let w = parse_floats(white, 2, "whitepoint")?;
            Ok(Gamut::from_tuples(((p[0], p[1]), (p[2], p[3]), (p[4], p[5])), (w[0], w[1])))
        }
        _ => bail!("Give either a gamut name or primaries with a whitepoint"),
    }
}

/// Formats rows as bracketed lines with fixed precision.
pub fn format_rows(rows: &[Vec<f64>], precision: usize) -> String {
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|x| format!("{:.*}", precision, x)).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints a matrix as text or its flat form; JSON is left to the caller.
pub fn print_rows(rows: &[Vec<f64>], output: OutputArgs) {
    if output.flat {
        let flat: Vec<String> = rows.iter().flatten().map(|x| x.to_string()).collect();
        println!("{}", flat.join(","));
    } else {
        println!("{}", format_rows(rows, output.precision));
    }
}

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

/// Row-major rows of a 3x3 matrix.
pub fn rows3(m: &gamut_math::Matrix3x3) -> Vec<Vec<f64>> {
    m.rows().iter().map(|row| row.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_floats("0.64, 0.33", 2, "white").unwrap(), vec![0.64, 0.33]);
        assert_eq!(parse_floats("0.1,-0.077", 2, "white").unwrap(), vec![0.1, -0.077]);
        assert!(parse_floats("0.64", 2, "white").is_err());
        assert!(parse_floats("0.64,abc", 2, "white").is_err());
    }

    #[test]
    fn test_resolve_named() {
        let g = resolve_gamut(Some("srgb"), None, None).unwrap();
        assert_eq!(g, gamut_primaries::SRGB);
        assert!(resolve_gamut(Some("nope"), None, None).is_err());
    }

    #[test]
    fn test_resolve_custom() {
        let srgb = Some("0.64,0.33,0.3,0.6,0.15,0.06");
        let g = resolve_gamut(None, srgb, Some("0.3127,0.329")).unwrap();
        assert_eq!(g, gamut_primaries::SRGB);
        assert!(resolve_gamut(None, Some("0.64,0.33"), Some("0.3127,0.329")).is_err());
        assert!(resolve_gamut(None, None, None).is_err());
    }

    #[test]
    fn test_format_rows() {
        let rows = vec![vec![1.0, 0.5], vec![-0.25, 0.0]];
        assert_eq!(format_rows(&rows, 2), "[1.00, 0.50]\n[-0.25, 0.00]");
    }
}
