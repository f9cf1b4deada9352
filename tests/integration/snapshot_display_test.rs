//! Snapshot tests pinning the exact display output per mode
//!
//! Output is Debug-escaped so the snapshots stay printable ASCII.

use sio::{ByteFormatter, DisplayMode};

fn render_string(mode: DisplayMode, color: bool, bytes: &[u8], finish: bool) -> String {
    let mut formatter = ByteFormatter::new(mode, color);
    let mut out = Vec::new();
    for &byte in bytes {
        formatter.render(byte, &mut out).unwrap();
    }
    if finish {
        formatter.finish(&mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn snapshot_mix_modem_chat_uncolored() {
    let text = render_string(DisplayMode::Mix, false, b"AT\r\nOK\r\n", false);
    insta::assert_snapshot!(
        format!("{:?}", text),
        @r#""AT 0d 0a \r\nOK 0d 0a \r\n""#
    );
}

#[test]
fn snapshot_hex_colored_with_trailing_reset() {
    let text = render_string(
        DisplayMode::Hex,
        true,
        &[0x48, 0x69, 0x0a, 0x00, 0xff, 0x02],
        true,
    );
    insta::assert_snapshot!(
        format!("{:?}", text),
        @r#""\u{1b}[32m48 69 \u{1b}[0m\u{1b}[33m0a \u{1b}[0m\u{1b}[37m00 \u{1b}[0m\u{1b}[34mff \u{1b}[0m\u{1b}[31m02 \u{1b}[0m""#
    );
}

#[test]
fn snapshot_mix2_fixed_columns_uncolored() {
    let text = render_string(DisplayMode::Mix2, false, b"a \x00\n", false);
    insta::assert_snapshot!(
        format!("{:?}", text),
        @r#""a  __ 00 0a ""#
    );
}

#[test]
fn snapshot_mix_colored_space_and_separator() {
    let text = render_string(DisplayMode::Mix, true, b"A \x01", false);
    insta::assert_snapshot!(
        format!("{:?}", text),
        @r#""\u{1b}[32mA\u{1b}[0m\u{1b}[37m_\u{1b}[0m\u{1b}[31m 01 ""#
    );
}
