//! Contact resolution
//!
//! The host reports a contact as the categories of the two bodies involved,
//! in no particular order. The pair is put in canonical order (lower
//! category first) and then compared against the categories the controller
//! bound at load time.

use ftd_core::CollisionCategory;

/// How the chase ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player reached the goal
    Won,
    /// A zombie caught the player
    Lost,
}

impl Outcome {
    /// Whether this outcome is a win
    #[inline]
    pub fn did_win(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// A contact pair in canonical order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactPair {
    /// Body with the lower category value
    pub first: CollisionCategory,
    /// The other body
    pub second: CollisionCategory,
}

impl ContactPair {
    /// Order the two bodies of a contact by ascending category value
    ///
    /// On equal categories `b` comes first.
    pub fn canonical(a: CollisionCategory, b: CollisionCategory) -> Self {
        if a.bits() < b.bits() {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }
}

/// Categories of the sprites the controller bound at load time
///
/// A missing sprite leaves its category unset, and no contact ever matches
/// an unset category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleCategories {
    /// Category of the player body
    pub player: Option<CollisionCategory>,
    /// Category of the first zombie body
    pub zombie: Option<CollisionCategory>,
    /// Category of the goal body
    pub goal: Option<CollisionCategory>,
}

/// Classify a canonical contact pair
///
/// The player must be the lower-category body of the pair: player then
/// zombie is a loss, player then goal is a win, anything else is ignored.
pub fn classify(pair: ContactPair, roles: &RoleCategories) -> Option<Outcome> {
    if Some(pair.first) != roles.player {
        return None;
    }

    if Some(pair.second) == roles.zombie {
        Some(Outcome::Lost)
    } else if Some(pair.second) == roles.goal {
        Some(Outcome::Won)
    } else {
        None
    }
}
