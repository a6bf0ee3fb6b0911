//! Test fixtures and constants.

/// Color strings in each of the parser's recognized shapes
pub mod colors {
    /// Amber as a six-digit hex string
    pub const AMBER_HEX: &str = "#f0b43c";

    /// Amber in CSS rgb() notation
    pub const AMBER_RGB: &str = "rgb(240, 180, 60)";

    /// Amber in CSS hsl() notation
    pub const AMBER_HSL: &str = "hsl(40, 75%, 94%)";

    /// A CMYK value as four space-separated percentages
    pub const TEAL_CMYK: &str = "60 20 30 50";

    /// A bare grayscale level
    pub const MID_GRAY: &str = "50";

    /// Not any recognized color shape
    pub const GARBAGE: &str = "bad color";
}

/// Config file bodies
pub mod configs {
    pub const CSS_HEX_ONLY: &str = r#"
default_format: css
targets:
  - hex
log_filter: tincture=debug
"#;

    pub const UNKNOWN_TARGET: &str = r#"
targets:
  - rgb
  - lab
"#;

    pub const INVALID_YAML: &str = "targets: [rgb, hsl";
}
