//! Edge case tests: degenerate but valid transcripts.

use chatlens::prelude::*;
use chrono::NaiveDate;

#[test]
fn test_single_message() {
    let analysis = analyze_bytes(b"1/2/23, 9:00 - Ana: hi").unwrap();
    let stats = &analysis.stats;

    assert_eq!(stats.total_messages, 1);
    assert_eq!(stats.total_senders, 1);
    assert_eq!(stats.top_sender, "Ana");
    assert_eq!(stats.top_sender_count, 1);
    assert_eq!(stats.busiest_day_count, 1);
    assert_eq!(stats.first_date, stats.last_date);
    assert_eq!(analysis.distributions.daily_mean, 1.0);
    assert_eq!(analysis.distributions.daily_baseline, 1);
}

#[test]
fn test_single_sender_many_days() {
    let transcript = "\
1/2/23, 9:00 - Ana: a
2/2/23, 9:00 - Ana: b
2/2/23, 9:30 - Ana: c
5/2/23, 9:00 - Ana: d";
    let analysis = analyze_bytes(transcript.as_bytes()).unwrap();

    assert_eq!(analysis.stats.total_senders, 1);
    assert_eq!(analysis.stats.busiest_day, NaiveDate::from_ymd_opt(2023, 2, 2).unwrap());
    assert_eq!(analysis.stats.busiest_day_count, 2);
    assert_eq!(analysis.distributions.senders, vec![("Ana".to_string(), 4)]);
    // Days without messages are not listed
    assert_eq!(analysis.distributions.daily.len(), 3);
    assert!((analysis.distributions.daily_mean - 4.0 / 3.0).abs() < 1e-9);
    assert_eq!(analysis.distributions.daily_baseline, 1);
}

#[test]
fn test_no_glyphs() {
    let analysis = analyze_bytes(b"1/2/23, 9:00 - Ana: plain text only").unwrap();
    assert_eq!(analysis.stats.total_glyphs, 0);
    assert!(analysis.distributions.glyphs.is_empty());
}

#[test]
fn test_empty_message_text() {
    let analysis = analyze_bytes(b"1/2/23, 9:00 - Ana: \n1/2/23, 9:01 - Bob: one").unwrap();
    let first = &analysis.corpus.records()[0];

    // The trailing space is trimmed with the line, leaving no ": " separator
    assert_eq!(analysis.counts.matched_lines, 1);
    assert_eq!(first.sender(), "Bob");
    assert_eq!(analysis.stats.mean_words, 1.0);
}

#[test]
fn test_message_of_only_punctuation() {
    let analysis = analyze_bytes(b"1/2/23, 9:00 - Ana: ?!... \xf0\x9f\x91\x8d").unwrap();
    let record = &analysis.corpus.records()[0];

    assert_eq!(record.clean_text.trim(), "");
    assert_eq!(record.word_count, 2);
    assert!(analysis.distributions.words.is_empty());
    assert_eq!(record.glyphs, vec!['👍']);
}

#[test]
fn test_skin_tone_and_joiners() {
    // Thumbs up + medium skin tone, then family emoji joined with ZWJ
    let analysis = analyze_bytes("1/2/23, 9:00 - Ana: 👍🏽 👨‍👩‍👧".as_bytes()).unwrap();
    let glyphs = &analysis.corpus.records()[0].glyphs;

    assert_eq!(glyphs, &vec!['👍', '🏽', '👨', '👩', '👧']);
}

#[test]
fn test_flags_count_as_glyphs() {
    let analysis = analyze_bytes("1/2/23, 9:00 - Ana: vamos 🇦🇷".as_bytes()).unwrap();

    // A flag is a pair of regional indicators, counted one by one
    assert_eq!(analysis.corpus.records()[0].glyphs, vec!['🇦', '🇷']);
    assert_eq!(analysis.stats.total_glyphs, 2);
    assert_eq!(analysis.corpus.records()[0].clean_text, "vamos ");
}

#[test]
fn test_two_digit_year_pivot() {
    let transcript = b"1/2/99, 9:00 - Ana: old\n1/2/05, 9:00 - Ana: new\n1/2/69, 9:00 - Ana: a\n1/2/70, 9:00 - Ana: b";
    let analysis = analyze_bytes(transcript).unwrap();
    let years: Vec<i32> = analysis.corpus.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![1999, 2005, 2069, 1970]);
}

#[test]
fn test_three_digit_year_dropped() {
    let analysis = analyze_bytes(b"1/2/203, 9:00 - Ana: bad\n1/2/23, 9:00 - Ana: good").unwrap();
    assert_eq!(analysis.counts.matched_lines, 2);
    assert_eq!(analysis.counts.retained_records, 1);
    assert_eq!(analysis.corpus.records()[0].message(), "good");
}

#[test]
fn test_leap_day() {
    let ok = analyze_bytes(b"29/2/24, 9:00 - Ana: leap").unwrap();
    assert_eq!(ok.corpus.len(), 1);

    let err = analyze_bytes(b"29/2/23, 9:00 - Ana: not leap").unwrap_err();
    assert!(err.is_no_valid_records());
}

#[test]
fn test_midnight_and_last_hour() {
    let analysis = analyze_bytes(b"1/2/23, 0:00 - Ana: a\n1/2/23, 23:59 - Ana: b\n1/2/23, 23:00 - Bob: c").unwrap();
    assert_eq!(analysis.distributions.hours, vec![(0, 1), (23, 2)]);
    assert_eq!(analysis.stats.busiest_hour, 23);
}

#[test]
fn test_weekday_table_is_zero_filled() {
    let analysis = analyze_bytes(b"1/2/23, 9:00 - Ana: hi").unwrap();
    let weekdays = &analysis.distributions.weekdays;

    assert_eq!(weekdays.len(), 7);
    assert_eq!(weekdays[0].0, "Monday");
    assert_eq!(weekdays[6].0, "Sunday");
    assert_eq!(weekdays.iter().map(|(_, n)| n).sum::<usize>(), 1);
}

#[test]
fn test_unicode_sender_names() {
    let analysis = analyze_bytes("1/2/23, 9:00 - Иван: привет\n1/2/23, 9:01 - 李: 你好".as_bytes()).unwrap();
    let senders: Vec<&str> = analysis.corpus.iter().map(|r| r.sender()).collect();
    assert_eq!(senders, vec!["Иван", "李"]);
    assert_eq!(analysis.corpus.records()[0].clean_text, "привет");
}

#[test]
fn test_only_blank_lines() {
    let err = analyze_bytes(b"\n\n   \n").unwrap_err();
    assert!(matches!(err, ChatlensError::NoMessagesFound { total_lines: 3 }));
}
