// ABOUTME: Domain types shared by every Ship UI package
// ABOUTME: Users, generation records and the supported framework targets

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target framework for a generated component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Framework {
    #[default]
    #[serde(rename = "html-tailwind")]
    HtmlTailwind,
    #[serde(rename = "react-tailwind")]
    ReactTailwind,
    #[serde(rename = "react-shadcn")]
    ReactShadcn,
    #[serde(rename = "nextjs-tailwind")]
    NextjsTailwind,
    #[serde(rename = "nextjs-shadcn")]
    NextjsShadcn,
    #[serde(rename = "nextjs-mui")]
    NextjsMui,
    #[serde(rename = "vue-tailwind")]
    VueTailwind,
    #[serde(rename = "angular-material")]
    AngularMaterial,
}

impl Framework {
    /// Every framework, in the order they are offered to the user
    pub const ALL: [Framework; 8] = [
        Framework::HtmlTailwind,
        Framework::ReactTailwind,
        Framework::ReactShadcn,
        Framework::NextjsTailwind,
        Framework::NextjsShadcn,
        Framework::NextjsMui,
        Framework::VueTailwind,
        Framework::AngularMaterial,
    ];

    /// Wire identifier, e.g. `html-tailwind`
    pub fn value(&self) -> &'static str {
        match self {
            Framework::HtmlTailwind => "html-tailwind",
            Framework::ReactTailwind => "react-tailwind",
            Framework::ReactShadcn => "react-shadcn",
            Framework::NextjsTailwind => "nextjs-tailwind",
            Framework::NextjsShadcn => "nextjs-shadcn",
            Framework::NextjsMui => "nextjs-mui",
            Framework::VueTailwind => "vue-tailwind",
            Framework::AngularMaterial => "angular-material",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Framework::HtmlTailwind => "HTML + Tailwind CSS",
            Framework::ReactTailwind => "React + Tailwind CSS",
            Framework::ReactShadcn => "React + Shadcn UI",
            Framework::NextjsTailwind => "Next.js + Tailwind CSS",
            Framework::NextjsShadcn => "Next.js + Shadcn UI",
            Framework::NextjsMui => "Next.js + MUI",
            Framework::VueTailwind => "Vue + Tailwind CSS",
            Framework::AngularMaterial => "Angular + Material",
        }
    }

    /// Extension used when exporting a stored component to disk
    pub fn file_extension(&self) -> &'static str {
        let value = self.value();
        if value.contains("html") {
            ".html"
        } else if value.contains("vue") {
            ".vue"
        } else {
            ".jsx"
        }
    }

    /// Syntax used by the read-only code viewer
    pub fn editor_language(&self) -> &'static str {
        if self.value().contains("html") {
            "html"
        } else {
            "javascript"
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown framework '{input}'. Must be one of: {choices}")]
pub struct ParseFrameworkError {
    pub input: String,
    pub choices: String,
}

impl FromStr for Framework {
    type Err = ParseFrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Framework::ALL
            .iter()
            .copied()
            .find(|f| f.value() == wanted)
            .ok_or_else(|| ParseFrameworkError {
                input: s.to_string(),
                choices: Framework::ALL
                    .iter()
                    .map(|f| f.value())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Authenticated user as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// A single prompt -> code generation
///
/// Guest records live in local storage and have no id. Records persisted by
/// the backend carry the server-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub prompt: String,
    pub framework: Framework,
    pub code: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl GenerationRecord {
    /// Create an unsaved guest record stamped with the current time
    pub fn guest(prompt: impl Into<String>, framework: Framework, code: impl Into<String>) -> Self {
        Self {
            id: None,
            prompt: prompt.into(),
            framework,
            code: code.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Prompt shortened for list views
    pub fn preview(&self, max_chars: usize) -> String {
        let prompt = self.prompt.trim();
        if prompt.chars().count() <= max_chars {
            prompt.to_string()
        } else {
            let cut: String = prompt.chars().take(max_chars.saturating_sub(1)).collect();
            format!("{}…", cut.trim_end())
        }
    }
}
