//! Evolution row traversal.
//!
//! The row is shallow on purpose: the base species, its first branch and the
//! first branch of that. Eevee is the one species listed with all its direct
//! branches. Deeper or differently branched chains are cut at that shape.

use crate::api::models::EvolutionChainResponse;

const FULLY_BRANCHED_SPECIES: &str = "eevee";

pub fn evolution_line(chain: &EvolutionChainResponse) -> Vec<String> {
    let base = &chain.chain;
    let mut line = vec![base.species.name.clone()];

    if base.species.name == FULLY_BRANCHED_SPECIES {
        line.extend(base.evolves_to.iter().map(|link| link.species.name.clone()));
        return line;
    }

    if let Some(stage_two) = base.evolves_to.first() {
        line.push(stage_two.species.name.clone());
        if let Some(stage_three) = stage_two.evolves_to.first() {
            line.push(stage_three.species.name.clone());
        }
    }

    line
}
