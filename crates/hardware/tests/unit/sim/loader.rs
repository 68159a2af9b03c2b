//! Image Loader Tests.

use std::io::Write;

use pretty_assertions::assert_eq;
use rv32pipe_core::SimError;
use rv32pipe_core::sim::loader::{
    load_data_image, load_instruction_image, parse_data_image, parse_instruction_image,
};
use tempfile::NamedTempFile;

const ADDI_X1_5: &str = "00000000010100000000000010010011";

#[test]
fn instruction_words_msb_first() {
    let text = format!("{ADDI_X1_5}\n{}\n", "0".repeat(31) + "1");
    assert_eq!(parse_instruction_image(&text).expect("valid"), vec![0x0050_0093, 1]);
}

#[test]
fn whitespace_inside_words_is_ignored() {
    let text = "0000 0000 0101 0000\n0000 0000 1001 0011\n";
    assert_eq!(parse_instruction_image(text).expect("valid"), vec![0x0050_0093]);
}

#[test]
fn empty_image_is_empty_program() {
    assert_eq!(parse_instruction_image("\n\n").expect("valid"), Vec::<u32>::new());
    assert_eq!(parse_data_image("").expect("valid"), Vec::<u32>::new());
}

#[test]
fn partial_word_is_incorrect_format() {
    let err = parse_instruction_image("0101").expect_err("partial");
    assert_eq!(err.to_string(), "Incorrect format");
}

#[test]
fn non_binary_character_is_rejected() {
    let err = parse_instruction_image("0000000201010000000000001001001").expect_err("bad char");
    assert!(matches!(err, SimError::InvalidInput(_)));
    assert!(err.to_string().contains("'2'"));
}

#[test]
fn data_words_are_hex() {
    let words = parse_data_image("0000002A\ndeadBEEF\n  7 \n").expect("valid");
    assert_eq!(words, vec![0x2A, 0xDEAD_BEEF, 7]);
}

#[test]
fn bad_data_words_are_rejected() {
    assert!(parse_data_image("123456789").is_err(), "nine digits");
    assert!(parse_data_image("0x10").is_err());
    assert!(parse_data_image("GG").is_err());
}

#[test]
fn loads_images_from_files() {
    let mut imem = NamedTempFile::new().expect("temp file");
    writeln!(imem, "{ADDI_X1_5}").expect("write");
    let mut dmem = NamedTempFile::new().expect("temp file");
    writeln!(dmem, "0000002A").expect("write");

    assert_eq!(load_instruction_image(imem.path()).expect("load"), vec![0x0050_0093]);
    assert_eq!(load_data_image(dmem.path()).expect("load"), vec![0x2A]);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.txt");
    let err = load_instruction_image(&path).expect_err("missing");
    assert!(matches!(err, SimError::Io { .. }));
    assert_eq!(err.to_string(), format!("Cannot find {}", path.display()));
}
