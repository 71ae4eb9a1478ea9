use proptest::prelude::*;
use repo_tidy::markdown::{fix_math_pipes, scan_spans};
use repo_tidy::report::calculate_reduction_percent;
use repo_tidy::{is_image_file, CompressionOptions, ImageKind};
use std::path::Path;

proptest! {
    #[test]
    fn fix_math_pipes_is_idempotent(doc in "[a-z $|`\n]{0,80}") {
        let once = fix_math_pipes(&doc).into_owned();
        let twice = fix_math_pipes(&once).into_owned();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn no_pipe_survives_in_math(doc in "[a-z0-9 $|`\n]{0,80}") {
        let fixed = fix_math_pipes(&doc).into_owned();
        for span in scan_spans(&fixed) {
            if span.kind.is_math() {
                prop_assert!(!span.text(&fixed).contains('|'));
            }
        }
    }

    #[test]
    fn documents_without_dollars_are_untouched(doc in "[a-z |`\n]{0,80}") {
        prop_assert_eq!(fix_math_pipes(&doc), doc.as_str());
    }

    #[test]
    fn fenced_code_is_preserved(code in "[a-z $|\n]{0,40}") {
        let doc = format!("```\n{}\n```", code);
        prop_assert_eq!(fix_math_pipes(&doc), doc.as_str());
    }

    #[test]
    fn only_pipes_change(math in "[a-z0-9 |]{0,30}") {
        let doc = format!("${}$", math);
        let fixed = fix_math_pipes(&doc).into_owned();
        let stripped: String = fixed.replace("\\vert", "").replace(' ', "");
        let expected: String = doc.replace('|', "").replace(' ', "");
        prop_assert_eq!(stripped, expected);
    }

    #[test]
    fn compression_options_quality_range(quality in 0u8..=255u8) {
        let result = CompressionOptions::new(Some(quality), false);
        prop_assert_eq!(result.is_ok(), (1..=100).contains(&quality));
    }

    #[test]
    fn reduction_percent_bounded(original in 1u64..1_000_000, compressed in 0u64..1_000_000) {
        let percent = calculate_reduction_percent(original, compressed);
        prop_assert!(percent <= 100.0);
        prop_assert_eq!(percent > 0.0, compressed < original);
    }

    #[test]
    fn is_image_file_recognizes_extensions(
        extension in prop::sample::select(&["jpg", "JPG", "jpeg", "Jpeg", "png", "PNG", "webp", "gif", "txt", "md"]),
        dot_file in prop::bool::ANY
    ) {
        let stem = if dot_file { "" } else { "test" };
        let filename = format!("assets/{}.{}", stem, extension);
        let path = Path::new(&filename);

        let expected = matches!(extension.to_lowercase().as_str(), "jpg" | "jpeg" | "png");
        prop_assert_eq!(is_image_file(path), expected);
        prop_assert_eq!(ImageKind::from_path(path).is_some(), expected);
    }
}
