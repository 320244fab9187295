//! Reference skill vocabulary.
//!
//! A versioned lookup table mapping known skill/tool/qualification terms
//! to their category, plus an alias table folding common abbreviations
//! onto canonical forms ("js" onto "javascript"). The table is plain
//! configuration: it can be serialized to JSON, edited, and loaded back
//! without touching any extraction or scoring logic.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::result::KeywordCategory;

/// Languages, frameworks, and methodologies.
const SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "rust", "go", "c", "c++", "c#", "ruby", "php",
    "swift", "kotlin", "scala", "perl", "r", "sql", "html", "css", "bash", "react", "angular",
    "vue", "svelte", "django", "flask", "fastapi", "spring", "rails", "node.js", "express",
    "laravel", ".net", "graphql", "rest", "grpc", "microservices", "machine learning",
    "deep learning", "data analysis", "data science", "nlp", "computer vision", "pandas",
    "numpy", "tensorflow", "pytorch", "scikit-learn", "spark", "hadoop", "etl", "agile",
    "scrum", "kanban", "tdd", "ci/cd", "devops", "project management", "data engineering",
    "distributed systems", "api design", "unit testing", "oop", "functional programming",
];

/// Platforms, products, and infrastructure.
const TOOLS: &[&str] = &[
    "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "jenkins", "git",
    "github", "gitlab", "linux", "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
    "kafka", "rabbitmq", "sqlite", "dynamodb", "snowflake", "airflow", "grafana", "prometheus",
    "datadog", "jira", "confluence", "tableau", "excel", "salesforce", "figma", "nginx",
    "lambda", "s3", "ec2", "heroku", "vercel", "databricks",
];

/// Degrees, certifications, and seniority markers.
const QUALIFICATIONS: &[&str] = &[
    "bachelor", "master", "phd", "mba", "degree", "certification", "certified", "licensed",
    "senior", "lead", "principal", "architect", "pmp", "cpa", "cfa", "security clearance",
];

/// Abbreviation and spelling variants folded onto canonical terms.
const ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("golang", "go"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("mongo", "mongodb"),
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("reactjs", "react"),
    ("vuejs", "vue"),
    ("angularjs", "angular"),
    ("dotnet", ".net"),
    ("ci-cd", "ci/cd"),
    ("cicd", "ci/cd"),
    ("ml", "machine learning"),
    ("amazon web services", "aws"),
    ("google cloud", "gcp"),
    ("google cloud platform", "gcp"),
    ("elastic search", "elasticsearch"),
    ("scikit learn", "scikit-learn"),
    ("sklearn", "scikit-learn"),
    ("bachelors", "bachelor"),
    ("masters", "master"),
    ("restful", "rest"),
];

/// Versioned term-to-category lookup table with abbreviation aliases.
///
/// `Default` returns the built-in vocabulary; deployments can maintain
/// their own as JSON and load it with [`SkillVocabulary::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillVocabulary {
    /// Monotonic version of the table contents.
    pub version: u32,

    /// Canonical term to category.
    terms: HashMap<String, KeywordCategory>,

    /// Surface form to canonical term.
    aliases: HashMap<String, String>,
}

impl SkillVocabulary {
    /// The vocabulary compiled into the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut terms = HashMap::new();
        for &t in SKILLS {
            terms.insert(t.to_string(), KeywordCategory::Skill);
        }
        for &t in TOOLS {
            terms.insert(t.to_string(), KeywordCategory::Tool);
        }
        for &t in QUALIFICATIONS {
            terms.insert(t.to_string(), KeywordCategory::Qualification);
        }
        let aliases = ALIASES
            .iter()
            .map(|&(from, to)| (from.to_string(), to.to_string()))
            .collect();
        Self {
            version: 1,
            terms,
            aliases,
        }
    }

    /// Load a vocabulary from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVocabulary` when the JSON does not parse
    /// into a vocabulary.
    pub fn from_json(json: &str) -> Result<Self> {
        let vocab: Self = serde_json::from_str(json)?;
        Ok(vocab)
    }

    /// Serialize the vocabulary to JSON.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVocabulary` on serialization failure.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Category of a canonical term, if the vocabulary knows it.
    #[must_use]
    pub fn category_of(&self, term: &str) -> Option<KeywordCategory> {
        self.terms.get(term).copied()
    }

    /// Whether a canonical term is in the vocabulary.
    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Canonical form for a surface term, if an alias exists.
    #[must_use]
    pub fn resolve_alias(&self, term: &str) -> Option<&str> {
        self.aliases.get(term).map(String::as_str)
    }

    /// Number of known terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the vocabulary has no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}
