//! List built-in gamuts.

use anyhow::Result;
use gamut_primaries::{Gamut, GamutId};
use serde::Serialize;

use super::print_json;
use crate::ListArgs;

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    #[serde(flatten)]
    gamut: Gamut,
}

pub fn run(args: ListArgs) -> Result<()> {
    if args.json {
        let entries: Vec<Entry> = GamutId::ALL
            .iter()
            .map(|&id| Entry {
                name: id.name(),
                gamut: id.gamut(),
            })
            .collect();
        return print_json(&entries);
    }

    for id in GamutId::ALL {
        if args.long {
            let g = id.gamut();
            println!(
                "{:<24} R{}  G{}  B{}  W{}",
                id.name(),
                g.red(),
                g.green(),
                g.blue(),
                g.whitepoint
            );
        } else {
            println!("{}", id.name());
        }
    }
    Ok(())
}
