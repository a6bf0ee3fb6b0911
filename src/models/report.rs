use serde::Serialize;

/// One color rendered in one model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelRender {
    pub model: String,
    pub value: String,
}

/// Result of `inspect`: the detected model and a render per target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub detected: String,
    pub renders: Vec<ModelRender>,
}

impl ConversionReport {
    /// Render for a given model name, if it was a target
    pub fn render_for(&self, model: &str) -> Option<&str> {
        self.renders
            .iter()
            .find(|render| render.model == model)
            .map(|render| render.value.as_str())
    }
}

/// Result of a keyed field read or write
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub key: String,
    pub value: String,
    /// The color after the operation, in its default rendering
    pub color: String,
}
