//! Portfolio content model.
//!
//! All presentable content lives in an embedded TOML document and is
//! deserialized once at startup. Commands consume the typed [`Profile`];
//! nothing in the engine hardcodes persona strings.

use serde::Deserialize;

use noct_types::Result;

/// The whole portfolio: identity, bio, projects, timeline, skills, contact.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub user: String,
    pub hostname: String,
    pub full_name: String,
    pub title: String,
    pub boot: Boot,
    pub bio: Bio,
    pub neofetch: Neofetch,
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineEntry>,
    pub skills: Vec<SkillCategory>,
    pub contact: Vec<ContactEntry>,
}

/// Boot sequence strings and banner art.
#[derive(Debug, Clone, Deserialize)]
pub struct Boot {
    pub system_line: String,
    pub phrase: String,
    pub banner: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Bio {
    pub short: String,
    pub focus: Vec<String>,
    pub about: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Neofetch {
    pub ascii: Vec<String>,
    pub info: Vec<InfoEntry>,
}

/// Ordered label/value pair for the neofetch info column.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub tech: Vec<String>,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    pub desc: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub url: String,
    pub icon: String,
    #[serde(default)]
    pub note: String,
}

impl Profile {
    /// Parse a profile from TOML source.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// The embedded default profile.
    pub fn embedded() -> Result<Self> {
        Self::from_toml(include_str!("content.toml"))
    }
}
