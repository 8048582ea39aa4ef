// Re-export modules
pub mod analyzers;
pub mod components;
pub mod config;
pub mod pipeline;
pub mod prompt;
pub mod renderer;
pub mod snapshot;
pub mod synth;

// Re-export commonly used types for convenience
pub use config::PipelineConfig;
pub use pipeline::{CloneResult, Pipeline};
pub use snapshot::Snapshot;

/// Where the page being cloned comes from
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Live URL rendered through WebDriver
    Url(String),
    /// Previously captured snapshot, no browser involved
    Captured(Snapshot),
}

/// Main builder for cloning a page from a URL or a captured snapshot
pub struct Cloner {
    source: PageSource,
    config: PipelineConfig,
}

impl Cloner {
    /// Create a new Cloner for a live URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            source: PageSource::Url(url.into()),
            config: PipelineConfig::default(),
        }
    }

    /// Create a new Cloner over an already-captured snapshot
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            source: PageSource::Captured(snapshot),
            config: PipelineConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = PipelineConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Override the WebDriver URL used for rendering
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.config.webdriver_url = url.into();
        self
    }

    /// Capture the snapshot (when the source is a URL) and run the
    /// reconstruction pipeline over it.
    pub async fn clone_page(mut self) -> Result<CloneResult, Box<dyn std::error::Error>> {
        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                self.config.webdriver_url = webdriver_url;
            }
        }

        let snapshot = match self.source {
            PageSource::Url(url) => renderer::capture(&url, &self.config).await?,
            PageSource::Captured(snapshot) => snapshot,
        };

        Ok(Pipeline::new(&self.config).run(&snapshot))
    }
}
