use crate::config::AppConfig;
use crate::model::Property;
use std::path::PathBuf;

pub mod config;
pub mod drag;
pub mod favorites;
pub mod home;
pub mod search;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Counts shown on the home view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeSummary {
    pub listings: usize,
    pub locations: usize,
    pub favorites: usize,
    pub active_filters: usize,
    pub results: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_properties: Vec<Property>,
    pub detail: Option<Property>,
    pub locations: Vec<String>,
    pub home: Option<HomeSummary>,
    pub config: Option<AppConfig>,
    pub config_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_properties(mut self, properties: Vec<Property>) -> Self {
        self.listed_properties = properties;
        self
    }

    pub fn with_detail(mut self, property: Property) -> Self {
        self.detail = Some(property);
        self
    }

    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_home(mut self, summary: HomeSummary) -> Self {
        self.home = Some(summary);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn listed_ids(&self) -> Vec<&str> {
        self.listed_properties.iter().map(|p| p.id.as_str()).collect()
    }
}
