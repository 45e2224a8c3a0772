use chrono::{NaiveDate, TimeZone, Utc};
use matter_core::{MatterError, TimestampCodec};

fn codec() -> TimestampCodec {
    TimestampCodec::new(None).unwrap()
}

fn codec_in(zone: &str) -> TimestampCodec {
    TimestampCodec::new(Some(zone)).unwrap()
}

fn at_millis(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(
        &NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap(),
    )
}

// ============================================================================
// Recognition
// ============================================================================

#[test]
fn identifies_date_shaped_text() {
    let codec = codec();
    assert!(codec.identify("2025-01-01"));
    assert!(codec.identify("2025-1-1"));
    assert!(codec.identify("2025-01-01T12:00:00Z"));
    // Date shape with trailing garbage still identifies; resolution decides.
    assert!(codec.identify("2025-01-01x"));
}

#[test]
fn rejects_non_date_text() {
    let codec = codec();
    assert!(!codec.identify("hello"));
    assert!(!codec.identify("2025"));
    assert!(!codec.identify("20250101"));
    assert!(!codec.identify("025-01-01"));
    assert!(!codec.identify("v2025-01-01"));
}

// ============================================================================
// Resolution
// ============================================================================

#[test]
fn resolves_date_only_as_midnight_utc() {
    assert_eq!(
        codec().resolve("2025-06-15").unwrap(),
        Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap()
    );
}

#[test]
fn resolves_single_digit_fields() {
    assert_eq!(
        codec().resolve("2025-1-2T3:4:5").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    );
}

#[test]
fn resolves_z_suffix_as_utc() {
    assert_eq!(
        codec().resolve("2025-01-01T12:00:00Z").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    );
}

#[test]
fn resolves_colon_offset() {
    assert_eq!(
        codec().resolve("2025-01-01T12:00:00.000+08:00").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 4, 0, 0).unwrap()
    );
}

#[test]
fn resolves_bare_hour_offset() {
    assert_eq!(
        codec().resolve("2025-01-01T12:00:00+8").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 4, 0, 0).unwrap()
    );
}

#[test]
fn resolves_negative_half_hour_offset() {
    assert_eq!(
        codec().resolve("2025-01-01T12:00:00-03:30").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 15, 30, 0).unwrap()
    );
}

#[test]
fn sub_thirty_offsets_scale_as_hours() {
    // The sexagesimal fold reads +00:20 as 20, which is below the 30 cutoff
    // and therefore scales to 20 hours. Quirk preserved from the YAML 1.1
    // zone handling.
    assert_eq!(
        codec().resolve("2025-01-01T00:00:00+00:20").unwrap(),
        Utc.with_ymd_and_hms(2024, 12, 31, 4, 0, 0).unwrap()
    );
}

#[test]
fn fraction_pads_and_truncates_to_millis() {
    assert_eq!(
        codec().resolve("2025-01-01T00:00:00.5Z").unwrap(),
        at_millis(2025, 1, 1, 0, 0, 0, 500)
    );
    assert_eq!(
        codec().resolve("2025-01-01T00:00:00.12345Z").unwrap(),
        at_millis(2025, 1, 1, 0, 0, 0, 123)
    );
}

#[test]
fn whitespace_separates_date_and_time() {
    assert_eq!(
        codec().resolve("1995-12-17 03:24:00").unwrap(),
        Utc.with_ymd_and_hms(1995, 12, 17, 3, 24, 0).unwrap()
    );
}

// ============================================================================
// Default timezone
// ============================================================================

#[test]
fn default_zone_interprets_wall_clock() {
    assert_eq!(
        codec_in("Europe/Paris").resolve("2025-01-01T12:00:00").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 11, 0, 0).unwrap()
    );
    assert_eq!(
        codec_in("Europe/Paris").resolve("2025-07-01T12:00:00").unwrap(),
        Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap()
    );
}

#[test]
fn explicit_suffix_overrides_default_zone() {
    assert_eq!(
        codec_in("Asia/Tokyo").resolve("2025-01-01T12:00:00Z").unwrap(),
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    );
}

#[test]
fn ambiguous_wall_clock_takes_earlier_offset() {
    // Europe/Paris falls back 03:00 → 02:00 on 2025-10-26; 02:30 happens
    // twice and the CEST (+2) reading wins.
    assert_eq!(
        codec_in("Europe/Paris").resolve("2025-10-26T02:30:00").unwrap(),
        Utc.with_ymd_and_hms(2025, 10, 26, 0, 30, 0).unwrap()
    );
}

#[test]
fn gap_wall_clock_shifts_forward() {
    // Europe/Paris springs 02:00 → 03:00 on 2025-03-30; 02:30 does not exist
    // and resolves an hour later.
    assert_eq!(
        codec_in("Europe/Paris").resolve("2025-03-30T02:30:00").unwrap(),
        Utc.with_ymd_and_hms(2025, 3, 30, 1, 30, 0).unwrap()
    );
}

#[test]
fn unknown_zone_is_rejected_at_construction() {
    let err = TimestampCodec::new(Some("Not/AZone")).unwrap_err();
    assert!(matches!(err, MatterError::InvalidTimezone(_)));
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn trailing_garbage_is_an_error() {
    assert!(matches!(
        codec().resolve("2025-01-01x"),
        Err(MatterError::Timestamp { .. })
    ));
}

#[test]
fn malformed_time_part_is_an_error() {
    assert!(matches!(
        codec().resolve("2025-01-01T12:00"),
        Err(MatterError::Timestamp { .. })
    ));
}

#[test]
fn out_of_range_fields_are_errors() {
    assert!(codec().resolve("2025-13-01").is_err());
    assert!(codec().resolve("2025-02-30").is_err());
    assert!(codec().resolve("2025-01-01T25:00:00").is_err());
}

#[test]
fn malformed_zone_is_an_error() {
    assert!(codec().resolve("2025-01-01T12:00:00+30:00").is_err());
    assert!(codec().resolve("2025-01-01T12:00:00+1:5").is_err());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn renders_midnight_as_date_only() {
    let codec = codec();
    let instant = Utc.with_ymd_and_hms(1995, 12, 17, 0, 0, 0).unwrap();
    assert_eq!(codec.render(&instant), "1995-12-17");
}

#[test]
fn renders_whole_seconds_without_millis() {
    let codec = codec();
    let instant = Utc.with_ymd_and_hms(1995, 12, 17, 3, 24, 0).unwrap();
    assert_eq!(codec.render(&instant), "1995-12-17T03:24:00");
}

#[test]
fn renders_millis_in_full_iso_form() {
    let codec = codec();
    assert_eq!(
        codec.render(&at_millis(1995, 12, 17, 3, 24, 0, 123)),
        "1995-12-17T03:24:00.123Z"
    );
}

#[test]
fn render_resolve_roundtrip() {
    let codec = codec();
    for instant in [
        Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 6, 15, 13, 45, 9).unwrap(),
        at_millis(2025, 6, 15, 13, 45, 9, 250),
    ] {
        assert_eq!(codec.resolve(&codec.render(&instant)).unwrap(), instant);
    }
}
