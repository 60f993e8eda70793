use clap::ValueEnum;

/// Supported output formats for the graph document.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Format {
    Json,
    Dot,
}

impl From<Format> for reporters::Format {
    fn from(fmt: Format) -> Self {
        match fmt {
            Format::Json => reporters::Format::Json,
            Format::Dot => reporters::Format::Dot,
        }
    }
}
