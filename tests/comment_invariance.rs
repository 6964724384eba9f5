use proptest::prelude::*;

use ligysis_config::config::load_from_str;
use ligysis_config_test_utils::builders::ConfigTextBuilder;

/// Lines that must never change what a config file means.
fn noise_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "#[ -~]{0,20}",
        "##[ -~]{0,20}",
        "### [A-Z ]{0,12} ###",
        ";[ -~]{0,20}",
        "[ \t]{1,4}#[ -~]{0,10}",
    ]
}

proptest! {
    #[test]
    fn comment_and_blank_lines_never_change_the_document(
        insertions in proptest::collection::vec((0usize..64, noise_line()), 0..12),
        max_retry in 0u32..1000,
        sleep_millis in 0u32..60_000,
    ) {
        let sleep_time = format!("{}", f64::from(sleep_millis) / 1000.0);
        let builder = ConfigTextBuilder::new()
            .set("other", "max_retry", &max_retry.to_string())
            .set("other", "sleep_time", &sleep_time)
            .set("notes", "description", "first line\nsecond line\nthird line");

        let baseline = load_from_str(&builder.build()).unwrap();

        let mut lines = builder.lines();
        for (pos, noise) in insertions {
            // Indented comments are still comments, even right after a key.
            let at = pos % (lines.len() + 1);
            lines.insert(at, noise);
        }
        let noisy = format!("{}\n", lines.join("\n"));

        let reloaded = load_from_str(&noisy).unwrap();
        prop_assert_eq!(&baseline, &reloaded);
        prop_assert_eq!(reloaded.max_retry(), max_retry);
        prop_assert_eq!(
            reloaded.get_str("notes", "description").unwrap(),
            "first line\nsecond line\nthird line"
        );
    }
}
