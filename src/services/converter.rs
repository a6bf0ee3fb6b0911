use crate::error::ConvertError;
use crate::models::{AppConfig, ConversionReport, FieldReport, ModelRender, OutputFormat};
use color_model::{parse, Format, Model};

/// Parses, converts and renders colors according to the app config
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn format(&self, format: Option<OutputFormat>) -> Format {
        format.unwrap_or(self.config.default_format).into()
    }

    /// Parse `input`, convert it to `target` and render it
    pub fn convert(
        &self,
        input: &str,
        target: Model,
        format: Option<OutputFormat>,
    ) -> Result<ModelRender, ConvertError> {
        let color = parse(input)?;
        let converted = color.convert(target);

        tracing::debug!(
            input,
            from = %color.model(),
            to = %target,
            "Converted color"
        );

        Ok(ModelRender {
            model: target.name().to_string(),
            value: converted.render(self.format(format)),
        })
    }

    /// Parse `input` and render it in every configured target model
    pub fn inspect(
        &self,
        input: &str,
        format: Option<OutputFormat>,
    ) -> Result<ConversionReport, ConvertError> {
        let targets = self.config.target_models()?;
        let color = parse(input)?;
        let format = self.format(format);

        let renders = targets
            .into_iter()
            .map(|target| ModelRender {
                model: target.name().to_string(),
                value: color.convert(target).render(format),
            })
            .collect();

        Ok(ConversionReport {
            input: input.to_string(),
            detected: color.model().name().to_string(),
            renders,
        })
    }

    /// Read the field `key` of the parsed color, or write `value` into it
    /// through the validated setter first
    pub fn field(
        &self,
        input: &str,
        key: &str,
        value: Option<&str>,
    ) -> Result<FieldReport, ConvertError> {
        let mut color = parse(input)?;

        if let Some(value) = value {
            color.set_key(key, value).map_err(|e| {
                tracing::debug!(input, key, value, error = %e, "Field write rejected");
                e
            })?;
        }

        let current = color.get_key(key)?;

        Ok(FieldReport {
            key: key.to_string(),
            value: current.to_string(),
            color: color.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_model::ColorError;
    use pretty_assertions::assert_eq;

    fn converter() -> Converter {
        Converter::new(AppConfig::default())
    }

    #[test]
    fn test_convert_uses_default_format() {
        let render = converter().convert("#f0b43c", Model::Rgb, None).unwrap();
        assert_eq!(render.model, "rgb");
        assert_eq!(render.value, "240 180 60");
    }

    #[test]
    fn test_convert_with_explicit_format() {
        let render = converter()
            .convert("rgb(240, 180, 60)", Model::Hex, Some(OutputFormat::Css))
            .unwrap();
        assert_eq!(render.value, "#f0b43c");
    }

    #[test]
    fn test_convert_uses_configured_format() {
        let config = AppConfig {
            default_format: OutputFormat::Css,
            ..Default::default()
        };
        let render = Converter::new(config)
            .convert("60 20 30 50", Model::Rgb, None)
            .unwrap();
        assert_eq!(render.value, "rgb(51, 102, 89)");
    }

    #[test]
    fn test_convert_unparseable() {
        let result = converter().convert("bad color", Model::Rgb, None);
        assert!(matches!(result, Err(ConvertError::Color(_))));
    }

    #[test]
    fn test_inspect_renders_all_targets() {
        let report = converter().inspect("#fff", Some(OutputFormat::Css)).unwrap();

        assert_eq!(report.detected, "hex");
        assert_eq!(report.renders.len(), 5);
        assert_eq!(report.render_for("rgb"), Some("rgb(255, 255, 255)"));
        assert_eq!(report.render_for("hex"), Some("#fff"));
    }

    #[test]
    fn test_inspect_respects_targets() {
        let config = AppConfig {
            targets: vec!["cmyk".to_string()],
            ..Default::default()
        };
        let report = Converter::new(config)
            .inspect("rgb(0, 0, 0)", Some(OutputFormat::Percent))
            .unwrap();

        assert_eq!(report.renders.len(), 1);
        assert_eq!(report.render_for("cmyk"), Some("0 0 0 1"));
    }

    #[test]
    fn test_inspect_unknown_target() {
        let config = AppConfig {
            targets: vec!["lab".to_string()],
            ..Default::default()
        };
        let result = Converter::new(config).inspect("#fff", None);
        assert!(matches!(result, Err(ConvertError::UnknownModel(_))));
    }

    #[test]
    fn test_field_read() {
        let report = converter().field("hsl(240, 100%, 50%)", "s", None).unwrap();
        assert_eq!(report.value, "100");
        assert_eq!(report.color, "hsl(240, 100%, 50%)");
    }

    #[test]
    fn test_field_write() {
        let report = converter()
            .field("rgb(10, 20, 30)", "r", Some("200"))
            .unwrap();
        assert_eq!(report.value, "200");
        assert_eq!(report.color, "rgb(200, 20, 30)");
    }

    #[test]
    fn test_field_write_out_of_range() {
        let result = converter().field("rgb(10, 20, 30)", "r", Some("256"));
        assert!(matches!(
            result,
            Err(ConvertError::Color(ColorError::Range(_)))
        ));
    }

    #[test]
    fn test_field_unknown_key() {
        let result = converter().field("rgb(10, 20, 30)", "x", None);
        assert!(matches!(
            result,
            Err(ConvertError::Color(ColorError::Domain(_)))
        ));
    }
}
