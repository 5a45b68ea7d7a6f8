use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub const APP_VERSION: &str = "1.0.0";

/// Platforms the page can offer a download for.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Android, Platform::Ios];

    pub fn key(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTarget {
    pub url: String,
    pub size: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenshotItem {
    pub id: u32,
    pub src: String,
    pub label: String,
}

impl ScreenshotItem {
    pub fn new(id: u32, src: &str, label: &str) -> Self {
        Self {
            id,
            src: src.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("duplicate screenshot id {0}")]
    DuplicateScreenshot(u32),
    #[error("analytics endpoint is empty")]
    MissingAnalyticsUrl,
}

/// Static page configuration. Built once at startup and handed to the
/// components that need it; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub downloads: BTreeMap<Platform, DownloadTarget>,
    pub analytics_url: String,
    pub screenshots: Vec<ScreenshotItem>,
}

impl AppConfig {
    pub fn load() -> Self {
        let mut downloads = BTreeMap::new();
        downloads.insert(
            Platform::Android,
            DownloadTarget {
                url: option_env!("HABIT_ANDROID_URL")
                    .unwrap_or("#download-android")
                    .to_string(),
                size: "25 MB".to_string(),
                label: format!("Download for {}", Platform::Android.display_name()),
            },
        );
        downloads.insert(
            Platform::Ios,
            DownloadTarget {
                url: option_env!("HABIT_IOS_URL")
                    .unwrap_or("#download-ios")
                    .to_string(),
                size: "30 MB".to_string(),
                label: format!("Download for {}", Platform::Ios.display_name()),
            },
        );

        Self {
            version: APP_VERSION.to_string(),
            downloads,
            analytics_url: get_analytics_url().to_string(),
            screenshots: default_screenshots(),
        }
    }

    pub fn download(&self, platform: Platform) -> Option<&DownloadTarget> {
        self.downloads.get(&platform)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analytics_url.trim().is_empty() {
            return Err(ConfigError::MissingAnalyticsUrl);
        }
        let mut seen = HashSet::new();
        for item in &self.screenshots {
            if !seen.insert(item.id) {
                return Err(ConfigError::DuplicateScreenshot(item.id));
            }
        }
        Ok(())
    }
}

pub fn get_analytics_url() -> &'static str {
    if let Some(url) = option_env!("HABIT_ANALYTICS_URL") {
        return url;
    }
    if cfg!(debug_assertions) {
        "http://localhost:3000/api/events"
    } else {
        "https://analytics.habit.app/api/events"
    }
}

fn default_screenshots() -> Vec<ScreenshotItem> {
    vec![
        ScreenshotItem::new(1, "/assets/screenshots/dashboard.png", "Dashboard"),
        ScreenshotItem::new(2, "/assets/screenshots/habits.png", "Habits"),
        ScreenshotItem::new(3, "/assets/screenshots/analytics.png", "Analytics"),
        ScreenshotItem::new(4, "/assets/screenshots/level-up.png", "Level Up"),
        ScreenshotItem::new(5, "/assets/screenshots/profile.png", "Profile"),
    ]
}
