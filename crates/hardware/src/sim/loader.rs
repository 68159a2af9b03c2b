//! Memory Image Loader.
//!
//! This module reads the two text images a simulation starts from. It performs:
//! 1. **Instruction image parsing:** ASCII binary digits, most-significant bit first, grouped
//!    into 32-bit words. Whitespace between digits is ignored.
//! 2. **Data image parsing:** Whitespace-separated hexadecimal words of up to 8 digits.
//! 3. **File loading:** Reads either image from disk and reports unreadable paths.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::common::error::SimError;

/// Number of binary digits per instruction word.
const BITS_PER_WORD: usize = 32;

/// Maximum number of hexadecimal digits per data word.
const HEX_DIGITS_PER_WORD: usize = 8;

/// Parses an instruction image into words.
///
/// # Arguments
///
/// * `text` - Binary digits (`0`/`1`), most-significant bit first. Whitespace is ignored.
///
/// # Returns
///
/// One word per complete 32-digit group, in order.
///
/// # Errors
///
/// * `SimError::InvalidInput("Incorrect format")` if the digits end mid-group.
/// * `SimError::InvalidInput` if any non-whitespace character is not a binary digit.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::sim::loader::parse_instruction_image;
///
/// let text = "00000000010100000000000010010011\n";
/// assert_eq!(parse_instruction_image(text).unwrap(), vec![0x0050_0093]);
/// ```
pub fn parse_instruction_image(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    let mut word = 0u32;
    let mut bits = 0usize;

    for (offset, c) in text.char_indices() {
        let bit = match c {
            '0' => 0,
            '1' => 1,
            c if c.is_whitespace() => continue,
            other => {
                return Err(SimError::invalid_input(format!(
                    "invalid character {other:?} at offset {offset} in instruction image"
                )));
            }
        };
        word = (word << 1) | bit;
        bits += 1;
        if bits == BITS_PER_WORD {
            debug!("imem[{:03}]: {word:08X}", words.len());
            words.push(word);
            word = 0;
            bits = 0;
        }
    }

    if bits != 0 {
        return Err(SimError::invalid_input("Incorrect format"));
    }
    Ok(words)
}

/// Parses a data image into words.
///
/// # Arguments
///
/// * `text` - Whitespace-separated hexadecimal words, conventionally one 8-digit word per line.
///
/// # Errors
///
/// Returns `SimError::InvalidInput` for a token longer than 8 digits or containing a
/// non-hexadecimal character.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::sim::loader::parse_data_image;
///
/// assert_eq!(parse_data_image("0000002A\nDEADBEEF\n").unwrap(), vec![0x2a, 0xdead_beef]);
/// ```
pub fn parse_data_image(text: &str) -> Result<Vec<u32>, SimError> {
    let mut words = Vec::new();
    for token in text.split_whitespace() {
        if token.len() > HEX_DIGITS_PER_WORD || !token.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SimError::invalid_input(format!(
                "invalid data word {token:?} at index {}",
                words.len()
            )));
        }
        let word = u32::from_str_radix(token, 16)
            .map_err(|e| SimError::invalid_input(format!("invalid data word {token:?}: {e}")))?;
        debug!("dmem[{:03}]: {word:08X}", words.len());
        words.push(word);
    }
    Ok(words)
}

/// Reads a whole image file.
fn read_image(path: &Path) -> Result<String, SimError> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and parses an instruction image file.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read, or any error of
/// [`parse_instruction_image`].
pub fn load_instruction_image(path: impl AsRef<Path>) -> Result<Vec<u32>, SimError> {
    let path = path.as_ref();
    let words = parse_instruction_image(&read_image(path)?)?;
    info!(path = %path.display(), words = words.len(), "instruction image loaded");
    Ok(words)
}

/// Loads and parses a data image file.
///
/// # Errors
///
/// Returns `SimError::Io` if the file cannot be read, or any error of [`parse_data_image`].
pub fn load_data_image(path: impl AsRef<Path>) -> Result<Vec<u32>, SimError> {
    let path = path.as_ref();
    let words = parse_data_image(&read_image(path)?)?;
    info!(path = %path.display(), words = words.len(), "data image loaded");
    Ok(words)
}
