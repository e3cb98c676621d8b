/// Output raster encoding for the response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Baseline JPEG at maximum quality. Drops the alpha channel.
    #[default]
    Jpeg,
    /// Lossless PNG with alpha.
    Png,
}

impl OutputFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }
}
