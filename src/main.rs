use clap::Parser;
use mirror_page::pipeline::Pipeline;
use mirror_page::{PipelineConfig, Snapshot, prompt, renderer};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration, falling back to defaults when none is given
    let mut config = match &args.config {
        Some(path) => match PipelineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config from {}: {}", path.display(), e);
                return;
            }
        },
        None => PipelineConfig::default(),
    };

    // Override the WebDriver URL with an environment variable if provided
    if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
        if !webdriver_url.is_empty() {
            config.webdriver_url = webdriver_url;
        }
    }

    // Obtain a snapshot, either from a file or by rendering the URL
    let snapshot = match (&args.snapshot, &args.url) {
        (Some(path), _) => match load_snapshot(path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                ::log::error!("Failed to load snapshot from {}: {}", path.display(), e);
                return;
            }
        },
        (None, Some(url)) => {
            println!("Note: Cloning a live URL requires a WebDriver server (e.g., ChromeDriver).");
            println!(
                "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
            );

            match renderer::capture(url, &config).await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    ::log::error!("Failed to capture {}: {}", url, e);
                    return;
                }
            }
        }
        (None, None) => {
            ::log::error!("Either a URL or --snapshot must be given");
            return;
        }
    };

    let pipeline = Pipeline::new(&config);
    let result = pipeline.run(&snapshot);

    if args.emit_prompt {
        let (tokens, components) = pipeline.describe(&snapshot);
        eprintln!(
            "{}",
            prompt::build(&tokens, &components, &snapshot.style_records)
        );
    }

    match &args.output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &result.html) {
                ::log::error!("Failed to write output to {}: {}", path.display(), e);
                return;
            }
            ::log::info!("Wrote reconstructed document to {}", path.display());
        }
        None => println!("{}", result.html),
    }
}

fn load_snapshot(path: &std::path::Path) -> Result<Snapshot, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&contents)?;
    Ok(snapshot)
}
