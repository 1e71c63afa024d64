//! Static portfolio content.
//!
//! All text shown on the page lives in `assets/content.json`, which is embedded
//! at compile time and deserialized into [`PortfolioContent`]. The records are
//! immutable once loaded; the UI only filters and displays them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CONTENT: &str = include_str!("../assets/content.json");

/// Errors raised while loading content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The JSON could not be parsed into the content model
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    /// The content parsed but is unusable
    #[error("invalid content: {0}")]
    Invalid(String),
}

/// Name, hero roles and biography.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Display name
    pub name: String,
    /// One-line tagline under the hero title
    pub tagline: String,
    /// Roles cycled by the hero typewriter
    pub roles: Vec<String>,
    /// About-section paragraph
    pub bio: String,
}

/// A titled blurb, used by the about and goals sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    /// Heading
    pub title: String,
    /// Body text
    pub description: String,
}

/// One portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub title: String,
    /// Short description
    pub description: String,
    /// Technology tags
    pub tags: Vec<String>,
    /// Source repository link
    #[serde(default)]
    pub github_url: Option<String>,
    /// Live demo link
    #[serde(default)]
    pub demo_url: Option<String>,
    /// Shown under the "Featured" filter
    #[serde(default)]
    pub featured: bool,
}

/// A skill with a self-assessed level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name
    pub name: String,
    /// Proficiency in percent
    pub level: u8,
}

/// A titled group of skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category heading
    pub title: String,
    /// Skills in display order
    pub skills: Vec<Skill>,
}

/// Degree, coursework and achievements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    /// Degree name
    pub degree: String,
    /// Awarding institution
    pub institution: String,
    /// Study period
    pub duration: String,
    /// Core subjects
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Certifications earned
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Notable achievements
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// One position in the work history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    /// Job title
    pub position: String,
    /// Employer
    pub company: String,
    /// Human-readable period
    pub period: String,
    /// Summary of duties
    pub description: String,
    /// Skills practised
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Career goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goals {
    /// Vision statement
    pub vision: String,
    /// Near-term goals
    pub short_term: Vec<Highlight>,
    /// Long-term goals
    pub long_term: Vec<Highlight>,
}

/// A blog article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Article title
    pub title: String,
    /// Publication date as displayed
    pub date: String,
    /// Teaser shown on the card
    pub excerpt: String,
    /// Category used by the tab filter
    pub category: String,
    /// Full text shown in the reader
    pub content: String,
}

/// A way to get in touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Channel name
    pub title: String,
    /// Displayed value
    pub value: String,
    /// Link opened on click
    pub link: String,
}

/// Footer credit and the contact channels it links to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    /// Credit line
    pub credit: String,
    /// Year shown in the copyright notice
    pub copyright_year: u16,
    /// Titles of the contact channels linked from the footer, in order
    pub links: Vec<String>,
}

/// Everything displayed on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    /// Hero and about text
    pub profile: Profile,
    /// About-section cards
    pub about: Vec<Highlight>,
    /// Projects in display order
    pub projects: Vec<Project>,
    /// Skill categories
    pub skills: Vec<SkillCategory>,
    /// Education record
    pub education: Education,
    /// Work history, most recent first
    pub experience: Vec<Experience>,
    /// Career goals
    pub goals: Goals,
    /// Blog articles
    pub blog: Vec<BlogPost>,
    /// Contact channels
    pub contact: Vec<ContactChannel>,
    /// Footer below the contact section
    pub footer: Footer,
}

impl PortfolioContent {
    /// Loads the content embedded in the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    /// Parses and validates content from JSON.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::Invalid("profile name is empty".into()));
        }
        if self.profile.roles.iter().all(|role| role.trim().is_empty()) {
            return Err(ContentError::Invalid("profile needs at least one role".into()));
        }
        let sections = [
            ("about", self.about.is_empty()),
            ("projects", self.projects.is_empty()),
            ("skills", self.skills.is_empty()),
            ("experience", self.experience.is_empty()),
            ("blog", self.blog.is_empty()),
            ("contact", self.contact.is_empty()),
        ];
        if let Some((name, _)) = sections.iter().find(|(_, empty)| *empty) {
            return Err(ContentError::Invalid(format!("{name} section is empty")));
        }
        if let Some(link) = self
            .footer
            .links
            .iter()
            .find(|link| !self.contact.iter().any(|channel| &channel.title == *link))
        {
            return Err(ContentError::Invalid(format!(
                "footer links to unknown contact channel '{link}'"
            )));
        }
        for category in &self.skills {
            if let Some(skill) = category.skills.iter().find(|skill| skill.level > 100) {
                return Err(ContentError::Invalid(format!(
                    "skill '{}' has level {} above 100",
                    skill.name, skill.level
                )));
            }
        }
        Ok(())
    }

    /// Contact channels linked from the footer, in footer order.
    pub fn footer_links(&self) -> impl Iterator<Item = &ContactChannel> {
        self.footer
            .links
            .iter()
            .filter_map(|title| self.contact.iter().find(|channel| &channel.title == title))
    }

    /// Copyright notice for the footer.
    pub fn copyright_line(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.footer.copyright_year, self.profile.name
        )
    }

    /// Projects visible under `filter`, in display order.
    pub fn projects_matching(&self, filter: ProjectFilter) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |project| filter == ProjectFilter::All || project.featured)
    }

    /// Blog tabs: `"all"` followed by each category in first-seen order.
    pub fn blog_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for post in &self.blog {
            if !categories.contains(&post.category) {
                categories.push(post.category.clone());
            }
        }
        categories
    }

    /// Posts shown under the tab `category`.
    pub fn posts_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a BlogPost> + 'a {
        self.blog
            .iter()
            .filter(move |post| category == ALL_CATEGORIES || post.category == category)
    }
}

/// Name of the blog tab showing every post.
pub const ALL_CATEGORIES: &str = "all";

/// Project list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectFilter {
    /// Every project
    #[default]
    All,
    /// Featured projects only
    Featured,
}
