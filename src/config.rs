//! Configuration handling for csvprobe

/// The export this tool exists to debug. Column indices and sampling limits
/// throughout the analysis passes are hard-coded for this file's layout.
pub const DEFAULT_EXPORT_URL: &str =
    "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/activity-REtDnwOPsQMKz1iyyRJhXrrbkwrnvE.csv";

/// Output format for the diagnostic report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for one probe run
#[derive(Debug, Clone)]
pub struct Config {
    /// Input export: an http(s) URL or a local path
    pub input: String,
    /// Converted output produced by the import pipeline, if a row-count
    /// comparison is wanted
    pub converted: Option<String>,
    /// Output format
    pub output_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_EXPORT_URL.to_string(),
            converted: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Create a config probing the given input
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Set the converted output to compare against
    pub fn with_converted(mut self, converted: impl Into<String>) -> Self {
        self.converted = Some(converted.into());
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}
