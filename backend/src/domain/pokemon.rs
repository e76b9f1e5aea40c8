//! Pokémon record data model.
//!
//! A [`Pokemon`] is the single persisted entity. Storage keys records by
//! their numeric [`PokemonId`], while equality between records is defined by
//! case-insensitive name. The name rule is not enforced when saving, so the
//! collection may hold several records that compare equal.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Storage-assigned record identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PokemonId(i64);

impl PokemonId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PokemonId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PokemonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A Pokémon record.
///
/// ## Invariants
/// - `id` is `None` until storage assigns one on the first save and never
///   changes afterwards.
/// - Two records are equal when their names match ignoring case; `id`,
///   `category` and `level` do not take part. [`Hash`] agrees with this.
///
/// # Examples
/// ```
/// use pokedex::domain::Pokemon;
///
/// let a = Pokemon::new("Pikachu", "Electric", 5);
/// let b = Pokemon::new("PIKACHU", "Water", 40);
/// assert_eq!(a, b);
/// assert!(a.id.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pokemon {
    /// Identifier assigned by storage.
    pub id: Option<PokemonId>,
    /// Display name.
    pub name: String,
    /// Elemental category, e.g. `Electric`.
    pub category: String,
    /// Experience level.
    pub level: i32,
}

impl Pokemon {
    /// Build an unsaved record.
    pub fn new(name: impl Into<String>, category: impl Into<String>, level: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            level,
        }
    }

    /// Return a copy carrying the given identifier.
    #[must_use]
    pub fn with_id(mut self, id: PokemonId) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrite every mutable field with `replacement`'s values.
    ///
    /// The identifier is left untouched and `level` is copied as-is, zero
    /// included.
    pub fn replace_fields(&mut self, replacement: Pokemon) {
        let Pokemon {
            name,
            category,
            level,
            ..
        } = replacement;
        self.name = name;
        self.category = category;
        self.level = level;
    }

    /// Merge the provided fields of `patch` into this record.
    ///
    /// `name` and `category` are overwritten when present. `level` is only
    /// taken when strictly positive; zero and negative values count as "not
    /// provided".
    pub fn apply_patch(&mut self, patch: PokemonPatch) {
        let PokemonPatch {
            name,
            category,
            level,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(level) = level.filter(|level| *level > 0) {
            self.level = level;
        }
    }

    fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for Pokemon {
    fn eq(&self, other: &Self) -> bool {
        self.normalized_name() == other.normalized_name()
    }
}

impl Eq for Pokemon {}

impl Hash for Pokemon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized_name().hash(state);
    }
}

/// Partial update for a [`Pokemon`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonPatch {
    /// Replacement name.
    pub name: Option<String>,
    /// Replacement category.
    pub category: Option<String>,
    /// Replacement level; only applied when greater than zero.
    pub level: Option<i32>,
}
