//! Static portfolio content
//!
//! Personal info, about section and the project list. A sample portfolio is
//! compiled in; an alternative file can be loaded from YAML or JSON using the
//! same camelCase keys.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a content file
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("skill '{name}' has percentage {percentage}, expected 0-100")]
    SkillOutOfRange { name: String, percentage: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub profile_image: String,
    pub resume_url: String,
}

impl PersonalInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Initials shown in the header badge ("Nabaraj Bhatta" -> "NB")
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub description: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A single project in the gallery. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub demo_url: String,
    pub github_url: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_images: Option<Vec<String>>,
}

impl Project {
    /// Whether the Demo action has anything to show
    pub fn has_previews(&self) -> bool {
        self.preview_images
            .as_ref()
            .is_some_and(|images| !images.is_empty())
    }

    pub fn previews(&self) -> &[String] {
        self.preview_images.as_deref().unwrap_or(&[])
    }
}

/// Links the user can open from the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Resume,
    Email,
    LinkedIn,
    GitHub,
    /// Source repository of the project with this id
    ProjectSource(u32),
}

impl LinkTarget {
    pub fn label(&self) -> &'static str {
        match self {
            LinkTarget::Resume => "Resume",
            LinkTarget::Email => "Email",
            LinkTarget::LinkedIn => "LinkedIn",
            LinkTarget::GitHub => "GitHub",
            LinkTarget::ProjectSource(_) => "Source code",
        }
    }
}

/// Everything the portfolio renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal_info: PersonalInfo,
    pub about_info: AboutInfo,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl PortfolioContent {
    /// Load content from a `.yaml`/`.yml` or `.json` file
    pub fn load_from(path: &Path) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let content: PortfolioContent = if is_json {
            serde_json::from_str(&contents).map_err(|source| ContentError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|source| ContentError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        };

        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.about_info.skills.iter().find(|s| s.percentage > 100) {
            return Err(ContentError::SkillOutOfRange {
                name: skill.name.clone(),
                percentage: skill.percentage,
            });
        }
        Ok(())
    }

    pub fn project_by_id(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Concrete URL or path behind a link
    pub fn resolve_link(&self, target: LinkTarget) -> Option<String> {
        let info = &self.personal_info;
        match target {
            LinkTarget::Resume => Some(info.resume_url.clone()),
            LinkTarget::Email => Some(info.mailto()),
            LinkTarget::LinkedIn => Some(info.linkedin.clone()),
            LinkTarget::GitHub => Some(info.github.clone()),
            LinkTarget::ProjectSource(id) => self.project_by_id(id).map(|p| p.github_url.clone()),
        }
    }

    /// The built-in sample portfolio
    pub fn sample() -> Self {
        let salon_previews = (1..=8)
            .map(|n| format!("/images/salon{}.PNG", n))
            .collect();

        Self {
            personal_info: PersonalInfo {
                name: "Nabaraj Bhatta".to_string(),
                title: "Frontend Developer".to_string(),
                subtitle: "I build modern, responsive, and user friendly websites.".to_string(),
                email: "nabarajbhatta04@gmail.com".to_string(),
                linkedin: "https://www.linkedin.com/in/nabaraj-bhatta-73912325a".to_string(),
                github: "https://github.com/Nabarajbhatta04".to_string(),
                profile_image: "/images/my-profile2.jpg".to_string(),
                resume_url: "/images/resume.pdf".to_string(),
            },
            about_info: AboutInfo {
                description: "I am a dedicated Frontend Developer who loves building modern, \
                    user-friendly websites. I focus on creating responsive interfaces and enjoy \
                    using the latest tools and technologies to make web applications look great \
                    and work smoothly."
                    .to_string(),
                skills: [
                    ("React", 75),
                    ("HTML & CSS", 85),
                    ("Tailwind CSS", 79),
                    ("Responsive Design", 75),
                    ("Git & GitHub", 70),
                    ("JavaScript", 80),
                ]
                .into_iter()
                .map(|(name, percentage)| Skill {
                    name: name.to_string(),
                    percentage,
                })
                .collect(),
            },
            projects: vec![
                Project {
                    id: 1,
                    title: "Star Hair Saloon Website".to_string(),
                    description: "A modern, responsive website for a hair salon featuring booking \
                        system, gallery, and service information. Built with React and modern UI \
                        components."
                        .to_string(),
                    image: "/images/salonn.PNG".to_string(),
                    demo_url: "#".to_string(),
                    github_url: "https://github.com/Nerrybhatt".to_string(),
                    technologies: vec!["HTML".into(), "CSS".into(), "JavaScript".into()],
                    preview_images: Some(salon_previews),
                },
                Project {
                    id: 2,
                    title: "Meme Sharing Website".to_string(),
                    description: "A social platform for sharing and discovering memes. Features \
                        include user uploads, voting system, and real-time feed updates with \
                        smooth animations."
                        .to_string(),
                    image: "/images/fungi_meme.JPG".to_string(),
                    demo_url: "#".to_string(),
                    github_url: "https://github.com/Nerrybhatt".to_string(),
                    technologies: vec!["Html & CSS".into(), "PHP".into(), "Javascript".into()],
                    preview_images: None,
                },
                Project {
                    id: 3,
                    title: "Portfolio Website".to_string(),
                    description: "A sleek, modern portfolio website showcasing projects and \
                        skills. Features smooth animations, responsive design, and an intuitive \
                        user interface."
                        .to_string(),
                    image: "/images/portfolio1.png".to_string(),
                    demo_url: "#".to_string(),
                    github_url: "https://github.com/Nabarajbhatta04".to_string(),
                    technologies: vec!["React".into(), "Tailwind CSS".into(), "Modern UI".into()],
                    preview_images: None,
                },
            ],
        }
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_has_one_project_with_previews() {
        let content = PortfolioContent::sample();
        let with_previews: Vec<_> = content.projects.iter().filter(|p| p.has_previews()).collect();
        assert_eq!(with_previews.len(), 1);
        assert_eq!(with_previews[0].previews().len(), 8);
        assert_eq!(with_previews[0].previews()[0], "/images/salon1.PNG");
    }

    #[test]
    fn test_empty_preview_list_is_not_previewable() {
        let mut project = PortfolioContent::sample().projects[0].clone();
        project.preview_images = Some(Vec::new());
        assert!(!project.has_previews());
        assert!(project.previews().is_empty());
    }

    #[test]
    fn test_initials() {
        let content = PortfolioContent::sample();
        assert_eq!(content.personal_info.initials(), "NB");
        assert_eq!(
            content.personal_info.mailto(),
            "mailto:nabarajbhatta04@gmail.com"
        );
    }

    #[test]
    fn test_resolve_links() {
        let content = PortfolioContent::sample();
        assert_eq!(
            content.resolve_link(LinkTarget::Resume).as_deref(),
            Some("/images/resume.pdf")
        );
        assert_eq!(
            content.resolve_link(LinkTarget::ProjectSource(3)).as_deref(),
            Some("https://github.com/Nabarajbhatta04")
        );
        assert!(content.resolve_link(LinkTarget::ProjectSource(99)).is_none());
    }

    #[test]
    fn test_load_yaml_with_camel_case_keys() {
        let yaml = r##"
personalInfo:
  name: Ada Lovelace
  title: Engineer
  subtitle: Analytical engines
  email: ada@example.com
  linkedin: https://linkedin.com/in/ada
  github: https://github.com/ada
  profileImage: /img/ada.png
  resumeUrl: /cv.pdf
aboutInfo:
  description: Notes on the engine
  skills:
    - name: Math
      percentage: 99
projects:
  - id: 7
    title: Engine
    description: Difference engine
    image: /img/engine.png
    demoUrl: "#"
    githubUrl: https://github.com/ada/engine
    technologies: [Brass]
    previewImages: [/img/a.png]
"##;
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let content = PortfolioContent::load_from(file.path()).unwrap();
        assert_eq!(content.personal_info.name, "Ada Lovelace");
        assert_eq!(content.about_info.skills[0].percentage, 99);
        assert!(content.project_by_id(7).unwrap().has_previews());
        assert!(content.project_by_id(8).is_none());
    }

    #[test]
    fn test_load_json_roundtrips_sample() {
        let sample = PortfolioContent::sample();
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(serde_json::to_string(&sample).unwrap().as_bytes())
            .unwrap();

        let loaded = PortfolioContent::load_from(file.path()).unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_load_rejects_out_of_range_skill() {
        let mut sample = PortfolioContent::sample();
        sample.about_info.skills[0].percentage = 140;
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(serde_json::to_string(&sample).unwrap().as_bytes())
            .unwrap();

        let err = PortfolioContent::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ContentError::SkillOutOfRange { percentage: 140, .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PortfolioContent::load_from(Path::new("/nonexistent/folio.yaml")).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }
}
