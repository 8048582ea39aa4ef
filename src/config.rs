use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for one cloning pipeline
///
/// Created once per process and passed by reference into the renderer and
/// the orchestrator; never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// URL for the WebDriver instance used to render snapshots
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Browser window width used for rendering
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    /// Browser window height used for rendering
    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// Milliseconds to wait after navigation for dynamic content to settle
    #[serde(default = "default_page_settle_ms")]
    pub page_settle_ms: u64,

    /// Maximum number of style records captured per selector
    #[serde(default = "default_max_records_per_selector")]
    pub max_records_per_selector: usize,

    /// Character cap applied to extracted header text
    #[serde(default = "default_header_text_limit")]
    pub header_text_limit: usize,

    /// Character cap applied to extracted main-content text
    #[serde(default = "default_main_text_limit")]
    pub main_text_limit: usize,

    /// Character cap applied to extracted footer text
    #[serde(default = "default_footer_text_limit")]
    pub footer_text_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            page_settle_ms: default_page_settle_ms(),
            max_records_per_selector: default_max_records_per_selector(),
            header_text_limit: default_header_text_limit(),
            main_text_limit: default_main_text_limit(),
            footer_text_limit: default_footer_text_limit(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default rendering viewport width
fn default_viewport_width() -> u32 {
    1280
}

/// Default rendering viewport height
fn default_viewport_height() -> u32 {
    720
}

/// Default settle delay after navigation
fn default_page_settle_ms() -> u64 {
    2000
}

/// Default cap on records per selector
fn default_max_records_per_selector() -> usize {
    3
}

/// Default header text cap
fn default_header_text_limit() -> usize {
    400
}

/// Default main text cap
fn default_main_text_limit() -> usize {
    1200
}

/// Default footer text cap
fn default_footer_text_limit() -> usize {
    300
}
