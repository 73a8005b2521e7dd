//! Species piloting grades and the weights derived from them.
//!
//! Species carry qualitative trait tags such as `GOOD_WEAPONS`. The AI reads
//! three of them (weapons, shields, attack troops) as [`Grade`]s and uses
//! them to re-weight ship stats. Species content is static, so grades are
//! memoized per species for as long as the [`SpeciesGradeCache`] lives.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::RatingError;
use crate::stats::{BasicStats, StatSnapshot};
use crate::universe::SpeciesRegistry;

/// Qualitative aptitude tier, from worst to best.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Grade {
    /// Cannot perform the skill at all.
    No,
    /// Below average.
    Bad,
    /// Average; written as the empty string.
    #[default]
    Neutral,
    /// Above average.
    Good,
    /// Well above average.
    Great,
    /// Best possible.
    Ultimate,
}

impl Grade {
    /// Every grade, worst first.
    pub const ALL: [Grade; 6] = [
        Grade::No,
        Grade::Bad,
        Grade::Neutral,
        Grade::Good,
        Grade::Great,
        Grade::Ultimate,
    ];

    /// Tag spelling of this grade.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Grade::No => "NO",
            Grade::Bad => "BAD",
            Grade::Neutral => "",
            Grade::Good => "GOOD",
            Grade::Great => "GREAT",
            Grade::Ultimate => "ULTIMATE",
        }
    }

    /// Multiplier applied to troop capacity.
    #[must_use]
    pub const fn troop_factor(self) -> f64 {
        match self {
            Grade::No => 0.0,
            Grade::Bad => 0.5,
            Grade::Neutral => 1.0,
            Grade::Good => 1.5,
            Grade::Great => 2.0,
            Grade::Ultimate => 3.0,
        }
    }

    /// Flat bonus added to shields.
    #[must_use]
    pub const fn shield_offset(self) -> f64 {
        match self {
            Grade::Good => 1.0,
            Grade::No | Grade::Bad | Grade::Neutral | Grade::Great | Grade::Ultimate => 0.0,
        }
    }
}

impl FromStr for Grade {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| RatingError::UnknownGrade(s.to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Troop capacity weighted by a piloting grade.
#[must_use]
pub fn weight_attack_troops_by(troops: f64, grade: Grade) -> f64 {
    troops * grade.troop_factor()
}

/// Troop capacity weighted by a grade string.
///
/// Unrecognised strings weigh as neutral (factor 1.0).
#[must_use]
pub fn weight_attack_troops(troops: f64, grade: &str) -> f64 {
    let factor = grade.parse::<Grade>().map_or(1.0, Grade::troop_factor);
    troops * factor
}

/// Shields adjusted by a piloting grade.
#[must_use]
pub fn weight_shields_by(shields: f64, grade: Grade) -> f64 {
    shields + grade.shield_offset()
}

/// Shields adjusted by a grade string.
///
/// Unrecognised strings add nothing.
#[must_use]
pub fn weight_shields(shields: f64, grade: &str) -> f64 {
    shields + grade.parse::<Grade>().map_or(0.0, Grade::shield_offset)
}

/// Stats as flown by a crew with `grades`: shields offset by the shields grade.
#[must_use]
pub fn apply_piloting_grades(stats: &StatSnapshot, grades: &PilotingGrades) -> StatSnapshot {
    let basic = stats.basic();
    StatSnapshot::new(
        BasicStats::new(
            basic.attacks.clone(),
            basic.structure,
            weight_shields_by(basic.shields, grades.shields),
        ),
        *stats.fighters(),
    )
}

/// Skills the AI grades species on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Ship weapons.
    Weapons,
    /// Ship shields.
    Shields,
    /// Ground troops on invasion ships.
    AttackTroops,
}

impl Skill {
    /// Tag spelling of this skill.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Skill::Weapons => "WEAPONS",
            Skill::Shields => "SHIELDS",
            Skill::AttackTroops => "ATTACKTROOPS",
        }
    }
}

/// Maps a species' tags to a grade for one skill.
pub trait GradeLookup {
    /// Grade of `skill` given `tags`; neutral when no tag applies.
    fn grade(&self, tags: &[String], skill: Skill) -> Grade;
}

/// Reads tags spelled `<GRADE>_<SKILL>`, e.g. `GREAT_WEAPONS`.
///
/// Only the first tag naming the skill counts; an unrecognised grade in it
/// is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiTagGradeLookup;

impl GradeLookup for AiTagGradeLookup {
    fn grade(&self, tags: &[String], skill: Skill) -> Grade {
        tags.iter()
            .filter_map(|tag| tag.split_once('_'))
            .find(|(_, tag_skill)| *tag_skill == skill.tag())
            .and_then(|(grade, _)| grade.parse().ok())
            .unwrap_or_default()
    }
}

/// Grades of one species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PilotingGrades {
    /// Weapons grade.
    pub weapons: Grade,
    /// Shields grade.
    pub shields: Grade,
    /// Attack troops grade.
    pub troops: Grade,
}

/// Memoized species grades with injected species and tag lookups.
///
/// Entries are never invalidated; species traits do not change during a game.
#[derive(Debug)]
pub struct SpeciesGradeCache<R, L = AiTagGradeLookup> {
    registry: R,
    lookup: L,
    grades: HashMap<String, PilotingGrades>,
}

impl<R: SpeciesRegistry> SpeciesGradeCache<R> {
    /// Create a cache using the standard tag lookup.
    pub fn new(registry: R) -> Self {
        Self::with_lookup(registry, AiTagGradeLookup)
    }
}

impl<R: SpeciesRegistry, L: GradeLookup> SpeciesGradeCache<R, L> {
    /// Create a cache with a custom tag lookup.
    pub fn with_lookup(registry: R, lookup: L) -> Self {
        Self {
            registry,
            lookup,
            grades: HashMap::new(),
        }
    }

    /// Grades of `species`, queried once and cached.
    ///
    /// An unknown species is logged and cached as all-neutral. An empty
    /// name is neutral without a query.
    pub fn get_piloting_grades(&mut self, species: &str) -> PilotingGrades {
        if let Some(grades) = self.grades.get(species) {
            return *grades;
        }

        let tags = if species.is_empty() {
            Vec::new()
        } else {
            self.registry.species_tags(species).unwrap_or_else(|| {
                error!(species, "Could not retrieve species for piloting grades");
                Vec::new()
            })
        };

        let grades = PilotingGrades {
            weapons: self.lookup.grade(&tags, Skill::Weapons),
            shields: self.lookup.grade(&tags, Skill::Shields),
            troops: self.lookup.grade(&tags, Skill::AttackTroops),
        };
        debug!(species, ?grades, "Cached piloting grades");
        self.grades.insert(species.to_string(), grades);
        grades
    }

    /// Number of species cached so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Whether nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}
