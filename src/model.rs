// src/model.rs
//
// Records as extracted from the efficiency pages, before any renaming.
// Names are the site's, lowercased.

/// One skill's table on an EHP page.
#[derive(Clone, Debug, PartialEq)]
pub struct RateEntry {
    pub name: String,
    /// Experience the table starts counting from. Zero unless the page
    /// shows a starting-experience marker for the skill.
    pub start_exp: u64,
    /// Ascending by `start_exp`.
    pub methods: Vec<Method>,
}

impl RateEntry {
    pub fn new(name: impl Into<String>, start_exp: u64) -> Self {
        Self { name: name.into(), start_exp, methods: Vec::new() }
    }

    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }
}

/// One row of a skill table: from `start_exp` on, `rate` xp/h doing `description`.
#[derive(Clone, Debug, PartialEq)]
pub struct Method {
    pub start_exp: u64,
    pub rate: u64,
    pub description: String,
    pub bonuses: Vec<Bonus>,
}

impl Method {
    pub fn new(start_exp: u64, rate: u64, description: impl Into<String>) -> Self {
        Self { start_exp, rate, description: description.into(), bonuses: Vec::new() }
    }

    pub fn with_bonus(mut self, skill: impl Into<String>, ratio: f64) -> Self {
        self.bonuses.push(Bonus { skill: skill.into(), ratio });
        self
    }
}

/// Bonus experience in `skill`, `ratio` times the owning method's xp.
#[derive(Clone, Debug, PartialEq)]
pub struct Bonus {
    pub skill: String,
    pub ratio: f64,
}

/// One row of a kills-per-hour page (bosses on the EHB page, activities on misc).
#[derive(Clone, Debug, PartialEq)]
pub struct KillRate {
    pub name: String,
    pub rate: f64,
}

impl KillRate {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self { name: name.into(), rate }
    }
}
