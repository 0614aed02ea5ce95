//! Unit tests for the ANSI style parser

use voxeldash_console::{strip, EmptySequenceMode, Rgb, StyleParser};

#[cfg(test)]
mod style_parser_tests {
    use super::*;

    fn red() -> Rgb {
        Rgb::from_hex("#ff5555").unwrap()
    }

    #[test]
    fn test_parse_plain_text() {
        let parser = StyleParser::new();
        let segments = parser.parse("Hello, World!");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Hello, World!");
        assert!(segments[0].style.is_plain());
    }

    #[test]
    fn test_parse_empty_string() {
        let parser = StyleParser::new();
        let segments = parser.parse("");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "");
        assert!(segments[0].style.is_plain());
    }

    #[test]
    fn test_parse_red_text_then_reset() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[31mHello\x1b[0m World");

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Hello");
        assert_eq!(segments[0].style.foreground, Some(red()));
        assert_eq!(segments[1].text, " World");
        assert!(segments[1].style.is_plain());
    }

    #[test]
    fn test_parse_all_basic_foreground_colors() {
        let parser = StyleParser::new();
        let expected = [
            "#000000", "#ff5555", "#55ff55", "#ffff55", "#5555ff", "#ff55ff", "#55ffff", "#ffffff",
        ];

        for (offset, hex) in expected.iter().enumerate() {
            let input = format!("\x1b[{}mtext", 30 + offset);
            let segments = parser.parse(&input);

            assert_eq!(segments.len(), 1);
            assert_eq!(
                segments[0].style.foreground,
                Some(Rgb::from_hex(hex).unwrap()),
                "foreground for code {}",
                30 + offset
            );
        }
    }

    #[test]
    fn test_parse_background_colors() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[41mRed background\x1b[0m");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Red background");
        assert_eq!(segments[0].style.background, Some(red()));
        assert!(segments[0].style.foreground.is_none());
    }

    #[test]
    fn test_bright_codes_reuse_palette() {
        let parser = StyleParser::new();

        let normal = parser.parse("\x1b[31mx");
        let bright = parser.parse("\x1b[91mx");
        assert_eq!(normal[0].style.foreground, bright[0].style.foreground);

        let normal_bg = parser.parse("\x1b[44mx");
        let bright_bg = parser.parse("\x1b[104mx");
        assert_eq!(normal_bg[0].style.background, bright_bg[0].style.background);
    }

    #[test]
    fn test_bold_underline_then_intensity_clear() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[1;4mBold-Underline\x1b[22mStill underlined");

        assert_eq!(segments.len(), 2);
        assert!(segments[0].style.bold);
        assert!(segments[0].style.underline);
        assert!(!segments[1].style.bold);
        assert!(segments[1].style.underline);
    }

    #[test]
    fn test_decoration_clears_are_independent() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[4;9mboth\x1b[24mstruck\x1b[29mneither");

        assert!(segments[0].style.underline);
        assert!(segments[0].style.strikethrough);
        assert!(!segments[1].style.underline);
        assert!(segments[1].style.strikethrough);
        assert!(!segments[2].style.underline);
        assert!(!segments[2].style.strikethrough);
    }

    #[test]
    fn test_faint_and_italic() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[2;3mquiet\x1b[23mstill faint");

        assert!(segments[0].style.faint);
        assert!(segments[0].style.italic);
        assert!(segments[1].style.faint);
        assert!(!segments[1].style.italic);
    }

    #[test]
    fn test_reset_discards_all_attributes() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[1;3;4;9;31;41mloud\x1b[0mplain");

        assert!(!segments[0].style.is_plain());
        assert!(segments[1].style.is_plain());
    }

    #[test]
    fn test_indexed_color_sequence() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[38;5;196mBright Red\x1b[0m");

        assert_eq!(segments[0].style.foreground, Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn test_rgb_color_sequence() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[38;2;255;0;0mRGB Red\x1b[48;2;0;0;128mon navy");

        assert_eq!(segments[0].style.foreground, Some(Rgb::new(255, 0, 0)));
        assert_eq!(segments[1].style.background, Some(Rgb::new(0, 0, 128)));
    }

    #[test]
    fn test_codes_after_extended_color_still_apply() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[38;5;21;1mblue bold");

        assert_eq!(segments[0].style.foreground, Some(Rgb::new(0, 0, 255)));
        assert!(segments[0].style.bold);
    }

    #[test]
    fn test_clear_foreground_keeps_background() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[31;41mboth\x1b[39mbg only\x1b[49mneither");

        assert!(segments[0].style.foreground.is_some());
        assert!(segments[0].style.background.is_some());
        assert!(segments[1].style.foreground.is_none());
        assert!(segments[1].style.background.is_some());
        assert!(segments[2].style.background.is_none());
    }

    #[test]
    fn test_unknown_codes_are_ignored() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[7mreverse\x1b[999munknown");

        assert_eq!(segments.len(), 2);
        assert!(segments[0].style.is_plain());
        assert!(segments[1].style.is_plain());
    }

    #[test]
    fn test_empty_sequence_resets_by_default() {
        let parser = StyleParser::new();
        assert_eq!(parser.empty_sequence_mode(), EmptySequenceMode::Reset);

        let segments = parser.parse("\x1b[31mred\x1b[mplain");
        assert!(segments[1].style.is_plain());
    }

    #[test]
    fn test_empty_sequence_noop_mode() {
        let parser = StyleParser::with_empty_sequence_mode(EmptySequenceMode::Ignore);
        let segments = parser.parse("\x1b[31mred\x1b[mstill red");

        assert_eq!(
            segments[1].style.foreground,
            Some(Rgb::from_hex("#ff5555").unwrap())
        );
    }

    #[test]
    fn test_empty_items_inside_list_are_skipped() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[1;;31mbold red");

        assert!(segments[0].style.bold);
        assert_eq!(segments[0].style.foreground, Some(red()));
    }

    #[test]
    fn test_incomplete_sequence_stays_literal() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[31mRed text\x1b[");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Red text\x1b[");
        assert!(segments[0].style.foreground.is_some());
    }

    #[test]
    fn test_adjacent_sequences_produce_no_empty_segments() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[31m\x1b[1mtext");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "text");
        assert!(segments[0].style.bold);
    }

    #[test]
    fn test_escape_only_input_yields_single_empty_segment() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[31m\x1b[0m");

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "");
        assert!(segments[0].style.is_plain());
    }

    #[test]
    fn test_parser_reuse_is_stateless() {
        let parser = StyleParser::new();

        let first = parser.parse("\x1b[31mRed");
        let second = parser.parse("Plain");

        assert_eq!(first[0].style.foreground, Some(red()));
        assert!(second[0].style.is_plain());
    }

    #[test]
    fn test_parse_text_with_newlines() {
        let parser = StyleParser::new();
        let segments = parser.parse("Line 1\n\x1b[32mLine 2\x1b[0m\nLine 3");

        let text: String = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(text, "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn test_parse_long_text() {
        let parser = StyleParser::new();
        let long_text = "a".repeat(10_000);
        let input = format!("\x1b[31m{}\x1b[0m", long_text);
        let segments = parser.parse(&input);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text.len(), 10_000);
    }

    #[test]
    fn test_parse_multiple_resets() {
        let parser = StyleParser::new();
        let segments = parser.parse("\x1b[31mRed\x1b[0m\x1b[0m\x1b[0mNormal");

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Red");
        assert_eq!(segments[1].text, "Normal");
        assert!(segments[1].style.is_plain());
    }

    #[test]
    fn test_strip_plain_text_unchanged() {
        assert_eq!(strip("plain text"), "plain text");
    }

    #[test]
    fn test_strip_removes_all_sequences() {
        assert_eq!(strip("\x1b[31mred\x1b[0m"), "red");
        assert_eq!(strip("\x1b[1;4;38;5;21mdeco\x1b[m"), "deco");
    }

    #[test]
    fn test_segment_concatenation_equals_strip() {
        let parser = StyleParser::new();
        let inputs = [
            "plain",
            "\x1b[31mHello\x1b[0m World",
            "\x1b[38;2;1;2;3mrgb\x1b[48;5;100mbg\x1b[0m",
            "\x1b[31",
            "\x1b[31m\x1b[0m",
            "",
        ];

        for input in inputs {
            let concatenated: String = parser
                .parse(input)
                .iter()
                .map(|segment| segment.text.as_str())
                .collect();
            assert_eq!(concatenated, strip(input), "input: {:?}", input);
        }
    }

    #[test]
    fn test_parse_real_world_output() {
        // Vanilla server startup line as colored by the wrapper
        let parser = StyleParser::new();
        let input = "[09:15:03] [Server thread/INFO]: \x1b[32mDone\x1b[0m (3.214s)! For help, type \"help\"";
        let segments = parser.parse(input);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "[09:15:03] [Server thread/INFO]: ");
        assert!(segments[0].style.is_plain());
        assert_eq!(segments[1].text, "Done");
        assert!(segments[1].style.foreground.is_some());
        assert_eq!(segments[2].text, " (3.214s)! For help, type \"help\"");
    }
}
