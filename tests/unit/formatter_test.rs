//! Unit tests for the byte formatter

use sio::{ByteFormatter, ColorCategory, DisplayMode};

fn render_all(formatter: &mut ByteFormatter, bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for &byte in bytes {
        formatter.render(byte, &mut out).unwrap();
    }
    out
}

#[test]
fn hex_mode_renders_every_byte_as_two_digits_and_space() {
    let mut formatter = ByteFormatter::new(DisplayMode::Hex, false);
    for byte in 0..=255u8 {
        let mut out = Vec::new();
        formatter.render(byte, &mut out).unwrap();
        let token = String::from_utf8(out).unwrap();
        assert_eq!(token, format!("{:02x} ", byte));
        assert_eq!(token.len(), 3);
    }
}

#[test]
fn hex_mode_ignores_prior_state() {
    // Prime the formatter with a CR so any stateful rule would fire.
    let mut formatter = ByteFormatter::new(DisplayMode::Hex, false);
    let out = render_all(&mut formatter, &[0x0d, 0x0a]);
    assert_eq!(out, b"0d 0a ");
}

#[test]
fn every_byte_maps_to_exactly_one_category() {
    for byte in 0..=255u8 {
        let category = ColorCategory::classify(byte);
        assert_ne!(category, ColorCategory::None, "byte {:#04x}", byte);
    }
}

#[test]
fn repeated_classification_emits_escape_once() {
    let mut formatter = ByteFormatter::new(DisplayMode::Hex, true);
    let mut first = Vec::new();
    formatter.render(b'A', &mut first).unwrap();
    assert!(first.starts_with(b"\x1b[32m"));

    let mut second = Vec::new();
    formatter.render(b'A', &mut second).unwrap();
    assert_eq!(second, b"41 ", "no escape expected on the second call");
}

#[test]
fn printable_run_emits_single_set_color_escape() {
    let mut formatter = ByteFormatter::new(DisplayMode::Hex, true);
    let out = render_all(&mut formatter, b"ABC");
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("\x1b[32m").count(), 1);
    assert_eq!(text.matches("\x1b[0m").count(), 0);
    assert_eq!(text, "\x1b[32m41 42 43 ");
}

#[test]
fn category_change_emits_reset_then_set() {
    let mut formatter = ByteFormatter::new(DisplayMode::Hex, true);
    render_all(&mut formatter, b"A");
    let out = render_all(&mut formatter, &[0xff]);
    assert_eq!(out, b"\x1b[0m\x1b[34mff ");
}

#[test]
fn mix_crlf_pair_renders_hex_plus_literal_break() {
    let mut formatter = ByteFormatter::new(DisplayMode::Mix, false);
    let out = render_all(&mut formatter, &[0x0d, 0x0a]);
    assert_eq!(out, b"0d 0a \r\n");
}

#[test]
fn mix_lf_without_cr_has_no_literal_break() {
    let mut formatter = ByteFormatter::new(DisplayMode::Mix, false);
    let out = render_all(&mut formatter, &[0x41, 0x0a, 0x0a]);
    // 'A', separator + hex LF, hex LF again; no literal CRLF anywhere
    assert_eq!(out, b"A 0a 0a ");
}

#[test]
fn mix_space_is_underscore_after_any_previous_byte() {
    for prev in [None, Some(b'a'), Some(0x0d), Some(0x00), Some(0xff)] {
        let mut formatter = ByteFormatter::new(DisplayMode::Mix, false);
        if let Some(prev) = prev {
            render_all(&mut formatter, &[prev]);
        }
        let out = render_all(&mut formatter, &[0x20]);
        assert_eq!(out, b"_", "previous byte {:?}", prev);
    }
}

#[test]
fn mix_separator_only_on_printable_to_hex_transition() {
    let mut formatter = ByteFormatter::new(DisplayMode::Mix, false);
    let out = render_all(&mut formatter, &[b'a', b'b', 0x01, 0x02, b'c']);
    assert_eq!(out, b"ab 01 02 c");
}

#[test]
fn mix2_every_token_is_three_columns() {
    for byte in 0..=255u8 {
        let mut formatter = ByteFormatter::new(DisplayMode::Mix2, false);
        let mut out = Vec::new();
        formatter.render(byte, &mut out).unwrap();
        assert_eq!(out.len(), 3, "byte {:#04x} rendered {:?}", byte, out);
    }
}

#[test]
fn mix2_crlf_stays_in_hex_columns() {
    let mut formatter = ByteFormatter::new(DisplayMode::Mix2, false);
    let out = render_all(&mut formatter, &[0x0d, 0x0a]);
    assert_eq!(out, b"0d 0a ");
}

#[test]
fn raw_mode_emits_no_escape_sequences() {
    let mut formatter = ByteFormatter::new(DisplayMode::Raw, true);
    let out = render_all(&mut formatter, b"hello\x01\xff");
    assert_eq!(out, b"hello\x01\xff");
}

#[test]
fn disabled_color_emits_no_escape_sequences() {
    let mut formatter = ByteFormatter::new(DisplayMode::Hex, false);
    let out = render_all(&mut formatter, b"A\n\x00\xff\x02");
    assert!(!out.contains(&0x1b));
}

#[test]
fn independent_formatters_do_not_share_state() {
    let mut first = ByteFormatter::new(DisplayMode::Mix, false);
    let mut second = ByteFormatter::new(DisplayMode::Mix, false);
    render_all(&mut first, &[0x0d]);
    // The second stream never saw the CR, so its LF stays hex-only.
    let out = render_all(&mut second, &[0x0a]);
    assert_eq!(out, b"0a ");
}

#[test]
fn render_marks_output_tainted() {
    let mut formatter = ByteFormatter::new(DisplayMode::Raw, false);
    let mut out = Vec::new();
    formatter.render(b'x', &mut out).unwrap();
    assert!(sio::print::output_tainted());
}
