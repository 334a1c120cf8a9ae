//! Domination rules: which species defeats which
//!
//! The rule set is a tournament on 5 nodes where every species beats exactly
//! two others and loses to the remaining two. There are no ties except
//! between identical species, which resolve to nothing.

use super::state::Species;

/// The two species defeated by `species`
///
/// Exact edge set: rock beats {scissors, lizard}; paper beats {rock, spock};
/// scissors beats {paper, lizard}; lizard beats {paper, spock}; spock beats
/// {scissors, rock}.
pub fn beats(species: Species) -> [Species; 2] {
    match species {
        Species::Rock => [Species::Scissors, Species::Lizard],
        Species::Paper => [Species::Rock, Species::Spock],
        Species::Scissors => [Species::Paper, Species::Lizard],
        Species::Lizard => [Species::Paper, Species::Spock],
        Species::Spock => [Species::Scissors, Species::Rock],
    }
}

/// Decide a collision between two species
///
/// Returns `None` for identical species (the collision is inert). For
/// distinct species exactly one of the two `beats` conditions holds by
/// construction of the tournament, so the outcome is total and
/// order-independent.
pub fn resolve(a: Species, b: Species) -> Option<Species> {
    if a == b {
        return None;
    }
    if beats(a).contains(&b) {
        Some(a)
    } else if beats(b).contains(&a) {
        Some(b)
    } else {
        None
    }
}
