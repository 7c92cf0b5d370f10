use crate::config::GarageConfig;
use crate::model::Car;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

/// Where garage keeps its data and config on disk.
#[derive(Debug, Clone)]
pub struct GaragePaths {
    pub data: PathBuf,
}

#[derive(Debug, Clone)]
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

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cars: Vec<Car>,
    pub listed_cars: Vec<Car>,
    pub config: Option<GarageConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cars(mut self, cars: Vec<Car>) -> Self {
        self.listed_cars = cars;
        self
    }

    pub fn with_config(mut self, config: GarageConfig) -> Self {
        self.config = Some(config);
        self
    }
}
