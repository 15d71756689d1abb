use article_normalizer::{extract_publication_date, DateSignals};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn structured_signal_is_parsed_as_iso_with_z_normalized() {
    init_tracing();
    let signals = DateSignals {
        structured: Some("2023-12-25T10:30:00Z"),
        ..Default::default()
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2023-12-25T10:30:00+00:00")
    );
}

#[test]
fn structured_signal_without_offset_is_accepted() {
    let signals = DateSignals {
        structured: Some("2023-12-25T10:30:00"),
        ..Default::default()
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2023-12-25T10:30:00")
    );
}

#[test]
fn human_text_formats_are_tried_in_order() {
    let cases = [
        ("December 25, 2023", "2023-12-25T00:00:00"),
        ("25 December 2023", "2023-12-25T00:00:00"),
        ("2023-12-25", "2023-12-25T00:00:00"),
        ("12/25/2023", "2023-12-25T00:00:00"),
    ];
    for (input, expected) in cases {
        let signals = DateSignals {
            human_text: Some(input),
            ..Default::default()
        };
        assert_eq!(
            extract_publication_date(&signals).as_deref(),
            Some(expected),
            "input: {input}"
        );
    }
}

#[test]
fn url_path_date_triple_is_extracted() {
    init_tracing();
    let signals = DateSignals {
        url: Some("https://example.com/2023/12/25/article-slug"),
        ..Default::default()
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2023-12-25")
    );
}

#[test]
fn url_without_valid_triple_yields_not_found() {
    for url in [
        "https://example.com/news/politics/article-slug",
        "https://example.com/2023/12/article-slug",
        "https://example.com/2023/13/45/article-slug",
    ] {
        let signals = DateSignals {
            url: Some(url),
            ..Default::default()
        };
        assert_eq!(extract_publication_date(&signals), None, "url: {url}");
    }
}

#[test]
fn calendar_invalid_triple_is_skipped_and_scanning_continues() {
    let signals = DateSignals {
        url: Some("https://example.com/2023/13/45/2023/12/25/article-slug"),
        ..Default::default()
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2023-12-25")
    );
}

#[test]
fn strategies_are_tried_in_decreasing_trust_order() {
    // All three signals present: the structured marker wins outright.
    let signals = DateSignals {
        structured: Some("2023-01-02T09:00:00Z"),
        human_text: Some("December 25, 2023"),
        url: Some("https://example.com/2022/06/30/old-path"),
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2023-01-02T09:00:00+00:00")
    );

    // Unusable structured signal: fall through to the human text.
    let signals = DateSignals {
        structured: Some("not a timestamp"),
        human_text: Some("December 25, 2023"),
        url: Some("https://example.com/2022/06/30/old-path"),
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2023-12-25T00:00:00")
    );

    // Only the URL left: positional inference is the last resort.
    let signals = DateSignals {
        structured: Some("not a timestamp"),
        human_text: Some("yesterday"),
        url: Some("https://example.com/2022/06/30/old-path"),
    };
    assert_eq!(
        extract_publication_date(&signals).as_deref(),
        Some("2022-06-30")
    );
}

#[test]
fn no_usable_signal_yields_not_found() {
    assert_eq!(extract_publication_date(&DateSignals::default()), None);

    let signals = DateSignals {
        structured: Some(""),
        human_text: Some("sometime last week"),
        url: Some("https://example.com/about"),
    };
    assert_eq!(extract_publication_date(&signals), None);
}
