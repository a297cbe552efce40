use chrono::NaiveDate;

use super::*;

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 2)
        .and_then(|d| d.and_hms_opt(9, 5, 7))
        .unwrap()
}

fn page(main_body: &str) -> String {
    format!(
        r#"<html><body>
            <div class="brochure" data-brochure-is-main="0">
              <strong>Old brochure</strong><img src="/old.jpg"><small>01.01.2020 - 02.01.2020</small>
            </div>
            <div class="brochure" data-brochure-is-main="1">{main_body}</div>
        </body></html>"#
    )
}

fn found(html: &str) -> BrochureRecord {
    match extract_brochure_at(html, "Kaufland", fixed_time()).unwrap() {
        Extraction::Found(record) => record,
        Extraction::NotFound => panic!("expected a brochure in: {html}"),
    }
}

#[test]
fn extracts_full_record() {
    let html = page(
        r#"<a href="/kaufland/123/">
             <img src="https://img.example/kaufland.jpg" data-src="https://img.example/lazy.jpg">
             <p><strong> Wochenangebote </strong></p>
             <small>01.03.2025 - 15.03.2025</small>
           </a>"#,
    );

    let record = found(&html);
    assert_eq!(
        record,
        BrochureRecord {
            title: "Wochenangebote".to_owned(),
            thumbnail: Some("https://img.example/kaufland.jpg".to_owned()),
            shop_name: "Kaufland".to_owned(),
            valid_from: Some("2025-03-01".to_owned()),
            valid_to: Some("2025-03-15".to_owned()),
            parsed_time: "2025-03-02 09:05:07".to_owned(),
        }
    );
}

#[test]
fn missing_marker_is_not_found() {
    let html = r#"<div data-brochure-is-main="0"><strong>Old</strong></div>"#;
    let result = extract_brochure_at(html, "Kaufland", fixed_time()).unwrap();
    assert_eq!(result, Extraction::NotFound);
}

#[test]
fn empty_main_container_is_found_with_defaults() {
    let record = found(&page(""));
    assert_eq!(record.title, DEFAULT_TITLE);
    assert!(record.thumbnail.is_none());
    assert!(record.valid_from.is_none());
    assert!(record.valid_to.is_none());
}

#[test]
fn title_uses_first_strong() {
    let record = found(&page("<strong>Erster</strong><strong>Zweiter</strong>"));
    assert_eq!(record.title, "Erster");
}

#[test]
fn thumbnail_falls_back_to_data_src() {
    let record = found(&page(r#"<img data-src="/lazy/kaufland.jpg">"#));
    assert_eq!(record.thumbnail.as_deref(), Some("/lazy/kaufland.jpg"));
}

#[test]
fn empty_src_falls_back_to_data_src() {
    let record = found(&page(r#"<img src="" data-src="/lazy/kaufland.jpg">"#));
    assert_eq!(record.thumbnail.as_deref(), Some("/lazy/kaufland.jpg"));
}

#[test]
fn image_without_sources_has_no_thumbnail() {
    let record = found(&page(r#"<img alt="Prospekt">"#));
    assert!(record.thumbnail.is_none());
}

#[test]
fn malformed_range_keeps_tokens() {
    let record = found(&page("<small>March - April</small>"));
    assert_eq!(record.valid_from.as_deref(), Some("March"));
    assert_eq!(record.valid_to.as_deref(), Some("April"));
}

#[test]
fn single_date_fills_both_ends() {
    let record = found(&page("<small> 01.03.2025 </small>"));
    assert_eq!(record.valid_from.as_deref(), Some("2025-03-01"));
    assert_eq!(record.valid_to.as_deref(), Some("2025-03-01"));
}

#[test]
fn more_than_two_tokens_uses_first_and_last() {
    let record = found(&page("<small>01.03.2025 - bis - 15.03.2025</small>"));
    assert_eq!(record.valid_from.as_deref(), Some("2025-03-01"));
    assert_eq!(record.valid_to.as_deref(), Some("2025-03-15"));
}

#[test]
fn only_first_small_is_used() {
    let record = found(&page(
        "<small>01.03.2025 - 15.03.2025</small><small>01.04.2025 - 15.04.2025</small>",
    ));
    assert_eq!(record.valid_to.as_deref(), Some("2025-03-15"));
}

#[test]
fn empty_small_yields_empty_dates() {
    let record = found(&page("<small>  </small>"));
    assert_eq!(record.valid_from.as_deref(), Some(""));
    assert_eq!(record.valid_to.as_deref(), Some(""));
}

#[test]
fn shop_name_is_passed_through() {
    let html = page("<strong>Angebote</strong>");
    let Extraction::Found(record) = extract_brochure_at(&html, "Globus", fixed_time()).unwrap()
    else {
        panic!("expected a brochure");
    };
    assert_eq!(record.shop_name, "Globus");
}

#[test]
fn split_validity_tokens() {
    assert_eq!(split_validity("a - b"), ("a", "b"));
    assert_eq!(split_validity("a"), ("a", "a"));
    assert_eq!(split_validity("a-b"), ("a-b", "a-b"));
    assert_eq!(split_validity(""), ("", ""));
}

#[test]
fn extract_brochure_stamps_current_time() {
    let html = page("<strong>Angebote</strong>");
    let Extraction::Found(record) = extract_brochure(&html, "Kaufland").unwrap() else {
        panic!("expected a brochure");
    };
    assert!(
        NaiveDateTime::parse_from_str(&record.parsed_time, "%Y-%m-%d %H:%M:%S").is_ok(),
        "unexpected parsed_time format: {}",
        record.parsed_time
    );
}
