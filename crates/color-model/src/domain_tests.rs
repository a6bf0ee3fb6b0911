//! Regression tests for cross-model behavior.
//!
//! Each test names the property it guards; the per-model unit tests cover
//! individual conversions.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::{
        cmyk, grayscale, hex, hsl, parse, rgb, Color, ColorError, DomainError, Fields, Format,
        Model,
    };

    // ========================================================================
    // Hex carries integer channels without loss
    // ========================================================================

    /// If this breaks, hex formatting or digit doubling is dropping precision:
    /// every integer channel value must survive rgb -> hex -> rgb.
    #[test]
    fn test_hex_round_trip_preserves_channels() {
        for value in 0..=255i64 {
            let original = rgb(value, 255 - value, (value * 7) % 256, Some(0.25)).unwrap();
            let back = original.to_hex().to_rgb();
            assert_eq!(
                (back.r(), back.g(), back.b()),
                (original.r(), original.g(), original.b()),
                "channel value {value} changed through hex"
            );
            assert!(!back.has_alpha(), "hex must not carry alpha");
        }
    }

    // ========================================================================
    // Full black ink dominates
    // ========================================================================

    /// If this breaks, the K term is no longer applied to every channel.
    #[test]
    fn test_full_black_cmyk_is_rgb_black() {
        for c in [0.0, 25.0, 50.0, 100.0] {
            for y in [0.0, 33.0, 100.0] {
                let rgb = cmyk(c, 100.0 - c, y, 100.0).unwrap().to_rgb();
                assert_eq!((rgb.r(), rgb.g(), rgb.b()), (0, 0, 0));
            }
        }
    }

    /// Lossy but stable: a CMYK value that came from RGB converts back to
    /// the same RGB.
    #[test]
    fn test_rgb_cmyk_rgb_is_stable() {
        let original = rgb(240, 180, 60, None).unwrap();
        let back = original.to_cmyk().to_rgb();
        let again = back.to_cmyk().to_rgb();
        assert_eq!(back, again);
    }

    #[test]
    fn test_black_rgb_saturates_k() {
        let cmyk = rgb(0, 0, 0, None).unwrap().to_cmyk();
        assert_eq!((cmyk.c(), cmyk.m(), cmyk.y(), cmyk.k()), (0.0, 0.0, 0.0, 100.0));
    }

    // ========================================================================
    // Grayscale fixtures
    // ========================================================================

    #[test]
    fn test_grayscale_fixtures() {
        let gray = grayscale(50.0).unwrap();
        assert_eq!(gray.to_cmyk().k(), 50.0);
        assert_eq!(gray.render(Format::Plain), "50");
        assert_eq!(gray.render(Format::Percent), "0.5");
    }

    // ========================================================================
    // HSL sector table
    // ========================================================================

    /// If this breaks, the hue sector lookup changed.
    #[test]
    fn test_hsl_sector_table_fixture() {
        let rgb = hsl(40, 75, 94, Some(0.5)).unwrap().to_rgb();
        assert_eq!((rgb.r(), rgb.g(), rgb.b(), rgb.a()), (240, 180, 60, Some(0.5)));
    }

    #[test]
    fn test_short_hex_expands() {
        let rgb = hex("#fff").unwrap().to_rgb();
        assert_eq!((rgb.r(), rgb.g(), rgb.b()), (255, 255, 255));
    }

    // ========================================================================
    // Parser dispatch
    // ========================================================================

    #[test]
    fn test_parser_dispatch() {
        let cases = [
            ("rgba(255, 255, 255, 0.5)", Model::Rgb),
            ("hsla(240, 100%, 100%, 0.5)", Model::Hsl),
            ("#fff", Model::Hex),
            ("60 20 30 50", Model::Cmyk),
            ("60", Model::Grayscale),
        ];
        for (input, model) in cases {
            assert_eq!(parse(input).unwrap().model(), model, "input {input:?}");
        }
    }

    #[test]
    fn test_parsed_alpha_and_hue() {
        match parse("rgba(255, 255, 255, 0.5)").unwrap() {
            Color::Rgb(rgb) => assert_eq!(rgb.a(), Some(0.5)),
            other => panic!("Expected Rgb, got {other:?}"),
        }
        match parse("hsla(240, 100%, 100%, 0.5)").unwrap() {
            Color::Hsl(hsl) => assert_eq!(hsl.h(), 240),
            other => panic!("Expected Hsl, got {other:?}"),
        }
    }

    /// If this breaks, the parser is crashing or coercing garbage instead of
    /// reporting a domain error.
    #[test]
    fn test_parser_failures_are_domain_errors() {
        for input in ["bad color", "rgb(255, 255, 255", "hsl(", ""] {
            assert!(
                matches!(parse(input), Err(ColorError::Domain(_))),
                "input {input:?} should fail with a domain error"
            );
        }
        assert!(matches!(
            parse("bad color"),
            Err(ColorError::Domain(DomainError::UnrecognizedFormat(_)))
        ));
    }

    // ========================================================================
    // Failed writes leave state untouched
    // ========================================================================

    /// If this breaks, a setter is mutating before validating.
    #[test]
    fn test_failed_sets_do_not_mutate() {
        let mut color = rgb(10, 20, 30, Some(0.5)).unwrap();
        let before = color.clone();
        assert!(color.set_key("r", 256).is_err());
        assert!(color.set_key("a", -0.1).is_err());
        assert!(color.set_key("b", "abc").is_err());
        assert_eq!(color, before);

        let mut color = hsl(10, 20, 30, None).unwrap();
        let before = color.clone();
        assert!(color.set_key("h", 400).is_err());
        assert_eq!(color, before);

        let mut color = cmyk(10.0, 20.0, 30.0, 40.0).unwrap();
        let before = color.clone();
        assert!(color.set_key("k", 101).is_err());
        assert_eq!(color, before);

        let mut color = hex("abcdef").unwrap();
        let before = color.clone();
        assert!(color.set_key("hex", "#12").is_err());
        assert!(color.set_key("hex", "#zzzzzz").is_err());
        assert_eq!(color, before);
    }

    // ========================================================================
    // Format tokens
    // ========================================================================

    #[test]
    fn test_every_model_renders_every_format() {
        let colors: Vec<Color> = vec![
            rgb(240, 180, 60, Some(0.5)).unwrap().into(),
            hsl(40, 75, 94, None).unwrap().into(),
            hex("f0b43c").unwrap().into(),
            cmyk(65.0, 25.0, 35.0, 10.0).unwrap().into(),
            grayscale(50.0).unwrap().into(),
        ];
        let expected = [
            [
                "240 180 60 0.5",
                "240, 180, 60, 0.5",
                "rgba(240, 180, 60, 0.5)",
                "0.94 0.71 0.24",
            ],
            [
                "hsl(40, 75%, 94%)",
                "hsl(40, 75%, 94%)",
                "hsl(40, 75%, 94%)",
                "hsl(40, 75%, 94%)",
            ],
            ["#f0b43c", "240, 180, 60", "#f0b43c", "0.94 0.71 0.24"],
            [
                "65 25 35 10",
                "65, 25, 35, 10",
                "rgb(80, 172, 149)",
                "0.65 0.25 0.35 0.1",
            ],
            ["50", "50, 50, 50", "rgb(50, 50, 50)", "0.5"],
        ];
        let formats = [Format::Plain, Format::Comma, Format::Css, Format::Percent];

        for (color, row) in colors.iter().zip(expected) {
            for (format, want) in formats.iter().zip(row) {
                assert_eq!(color.render(*format), want, "{:?} as {format}", color.model());
            }
        }
    }

    #[test]
    fn test_unknown_keys_fail_on_every_model() {
        let mut rgb = rgb(1, 2, 3, None).unwrap();
        let mut hex = hex("123").unwrap();
        assert!(rgb.get_key("hex").is_err());
        assert!(hex.get_key("a").is_err());
        assert!(rgb.unset_key("q").is_err());
        assert!(hex.unset_key("r").is_err());
    }
}
