use crate::utils::error::SiteError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category a portfolio item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Games,
    Art,
    Music,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Games => "games",
            Category::Art => "art",
            Category::Music => "music",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Games => "Games",
            Category::Art => "Art & Design",
            Category::Music => "Music",
        }
    }
}

/// Selected gallery filter. `All` shows every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ActiveCategory {
    #[default]
    All,
    Games,
    Art,
    Music,
}

impl ActiveCategory {
    /// Button order in the gallery header.
    pub const ALL: [ActiveCategory; 4] = [
        ActiveCategory::All,
        ActiveCategory::Games,
        ActiveCategory::Art,
        ActiveCategory::Music,
    ];

    pub fn matches(&self, category: Category) -> bool {
        match self {
            ActiveCategory::All => true,
            ActiveCategory::Games => category == Category::Games,
            ActiveCategory::Art => category == Category::Art,
            ActiveCategory::Music => category == Category::Music,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveCategory::All => "all",
            ActiveCategory::Games => Category::Games.as_str(),
            ActiveCategory::Art => Category::Art.as_str(),
            ActiveCategory::Music => Category::Music.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActiveCategory::All => "All Work",
            ActiveCategory::Games => Category::Games.label(),
            ActiveCategory::Art => Category::Art.label(),
            ActiveCategory::Music => Category::Music.label(),
        }
    }
}

impl From<Category> for ActiveCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Games => ActiveCategory::Games,
            Category::Art => ActiveCategory::Art,
            Category::Music => ActiveCategory::Music,
        }
    }
}

impl FromStr for ActiveCategory {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ActiveCategory::All),
            "games" => Ok(ActiveCategory::Games),
            "art" => Ok(ActiveCategory::Art),
            "music" => Ok(ActiveCategory::Music),
            _ => Err(SiteError::UnknownCategory {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ActiveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub url: &'static str,
}

impl PortfolioItem {
    pub fn call_to_action(&self) -> &'static str {
        match self.category {
            Category::Music => "Listen",
            _ => "View Project",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Code,
    Design,
    Music,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0..=100.
    pub level: u8,
    pub kind: SkillKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    pub name: &'static str,
    pub level: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub id: u32,
    pub title: &'static str,
    pub company: Option<&'static str>,
    pub period: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub id: u32,
    pub degree: &'static str,
    pub institution: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub courses: &'static [&'static str],
}

impl Education {
    pub fn is_current(&self) -> bool {
        self.status == "Currently Studying"
    }
}

/// Titled one-liner on the about cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDocument {
    pub url: String,
    pub download_name: String,
}

/// Transient notification shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: &'static str,
    pub description: &'static str,
}

impl Toast {
    pub const MESSAGE_SENT: Toast = Toast {
        title: "Message Sent!",
        description: "Thank you for reaching out. I'll get back to you soon!",
    };

    pub const MESSAGE_FAILED: Toast = Toast {
        title: "Error",
        description: "Failed to send message. Try again later.",
    };

    pub const CV_DOWNLOAD: Toast = Toast {
        title: "CV Download",
        description: "Your CV download will start shortly.",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ContactField::Name),
            "email" => Ok(ContactField::Email),
            "subject" => Ok(ContactField::Subject),
            "message" => Ok(ContactField::Message),
            other => Err(SiteError::ValidationError {
                message: format!("Unknown contact field '{}'", other),
            }),
        }
    }
}

/// Contact form state. Serializes as the relay's template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}
