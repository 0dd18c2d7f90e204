//! Typed schema for the content document.
//!
//! The document is authored out-of-band as JSON (camelCase keys) and fetched
//! whole; every field defaults so a missing key renders blank instead of
//! failing deserialization. Unknown keys are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    pub metadata: Metadata,
    pub personal_info: PersonalInfo,
    pub social_links: SocialLinks,
    pub photos: Vec<Photo>,
    pub projects: Vec<Project>,
    pub work_experience: Vec<Job>,
    pub navigation: Vec<NavItem>,
    pub contact_info: ContactInfo,
    pub loading_screen: LoadingScreen,
    pub sections: Sections,
}

/// Feeds the HTML `<head>` of every page.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub generator: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub title: String,
    pub bio: Vec<String>,
    pub roles: Vec<String>,
    pub email: String,
    pub location: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinks {
    pub github: SocialLink,
    pub linkedin: SocialLink,
    pub instagram: SocialLink,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub url: String,
    pub display: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Photo {
    pub url: String,
    pub caption: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub url: String,
    pub description: String,
    pub tech: String,
    pub year: String,
    pub accent: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    pub period: String,
    pub position: String,
    pub company: String,
    pub description: String,
    pub technologies: String,
    pub accent: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub description: String,
    pub footer: Footer,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Footer {
    pub copyright: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoadingScreen {
    pub title: String,
    pub text: String,
}

/// Per-section display configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Sections {
    pub hero: TitledSection,
    pub photos: TitledSection,
    pub work: TitledSection,
    pub projects: ProjectsSection,
    pub contact: TitledSection,
    pub social_links: TitledSection,
    pub current_status: TitledSection,
    pub blog: ViewerSection,
    pub articles: ViewerSection,
}

/// Section headings are split in two so the second half can carry an accent.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TitledSection {
    pub title: SectionTitle,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionTitle {
    pub first: String,
    pub second: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectsSection {
    pub title: SectionTitle,
    pub github_button_text: String,
}

/// A section backed by the embedded markdown viewer (blog, articles).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerSection {
    pub enabled: bool,
    pub title: SectionTitle,
    pub subtitle: String,
    pub github_link: String,
    pub github_button_text: String,
    pub markdowns_peek: ViewerConfig,
}

impl ViewerSection {
    /// A viewer only renders when the section is enabled and points at a repo.
    pub fn renderable(&self) -> bool {
        self.enabled && !self.markdowns_peek.repo.is_empty()
    }
}

/// Constructor arguments for the external markdown viewer. The library is a
/// black box loaded from a CDN; these keys mirror its documented constructor.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    pub container_id: String,
    pub owner: String,
    pub repo: String,
    pub path: String,
    pub branch: String,
    pub theme: String,
    pub token: String,
    pub class_name: String,
    pub base_path: String,
}
