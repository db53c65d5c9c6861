//! Character bank table for the key pad.
//!
//! This module provides access to the embedded bank table mapping each
//! character key (0-9) to its ordered candidate sequence per mode, with
//! load-time validation.

pub mod display;

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use crate::models::{CharKey, Mode, CHAR_KEY_COUNT};

/// One bank entry from keys.json.
///
/// Keys 0 and 1 carry a `symbols` sequence shared by both alphabetic modes;
/// keys 2-9 carry a `letters` sequence that is cased per mode and suffixed
/// with the key's digit.
#[derive(Debug, Clone, Deserialize)]
struct BankEntry {
    /// Digit index of the key this bank belongs to
    key: u8,
    /// Symbol sequence (keys 0 and 1)
    #[serde(default)]
    symbols: Option<String>,
    /// Letter sequence (keys 2-9)
    #[serde(default)]
    letters: Option<String>,
}

/// Table schema from keys.json.
#[derive(Debug, Clone, Deserialize)]
struct BankFile {
    #[allow(dead_code)]
    version: String,
    banks: Vec<BankEntry>,
}

/// Single-candidate digit sequences used by Numeric mode.
const DIGITS: [&str; CHAR_KEY_COUNT] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Candidate-character table with per-mode lookup.
///
/// The table is embedded in the binary at compile time and validated on
/// load: ten banks, one per key, every sequence non-empty. Lookup is O(1)
/// by key index.
#[derive(Debug, Clone)]
pub struct KeyTable {
    /// Lowercase candidate sequences, indexed by key
    lower: [String; CHAR_KEY_COUNT],
    /// Uppercase candidate sequences, indexed by key
    upper: [String; CHAR_KEY_COUNT],
}

impl KeyTable {
    /// Loads the bank table from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("keys.json");
        Self::from_json(json_data)
    }

    /// Parses and validates a bank table from JSON text.
    pub fn from_json(json_data: &str) -> Result<Self> {
        let file: BankFile =
            serde_json::from_str(json_data).context("Failed to parse bank table JSON")?;

        let mut lower: [Option<String>; CHAR_KEY_COUNT] = std::array::from_fn(|_| None);
        let mut upper: [Option<String>; CHAR_KEY_COUNT] = std::array::from_fn(|_| None);

        for bank in &file.banks {
            let index = bank.key as usize;
            if index >= CHAR_KEY_COUNT {
                bail!("Bank table names key {} outside 0-9", bank.key);
            }
            if lower[index].is_some() {
                bail!("Bank table defines key {} twice", bank.key);
            }

            let (low, up) = match (&bank.symbols, &bank.letters) {
                (Some(symbols), None) => {
                    // Symbol banks are identical in both alphabetic modes
                    (symbols.clone(), symbols.clone())
                }
                (None, Some(letters)) => {
                    let digit = (b'0' + bank.key) as char;
                    let mut low = letters.clone();
                    low.push(digit);
                    let mut up = letters.to_uppercase();
                    up.push(digit);
                    (low, up)
                }
                _ => bail!(
                    "Bank for key {} must define exactly one of symbols/letters",
                    bank.key
                ),
            };

            if low.is_empty() {
                bail!("Bank for key {} is empty", bank.key);
            }

            lower[index] = Some(low);
            upper[index] = Some(up);
        }

        let mut lower_vec = Vec::with_capacity(CHAR_KEY_COUNT);
        let mut upper_vec = Vec::with_capacity(CHAR_KEY_COUNT);
        for index in 0..CHAR_KEY_COUNT {
            lower_vec.push(
                lower[index]
                    .take()
                    .with_context(|| format!("Bank table is missing key {index}"))?,
            );
            upper_vec.push(
                upper[index]
                    .take()
                    .with_context(|| format!("Bank table is missing key {index}"))?,
            );
        }

        let lower = lower_vec
            .try_into()
            .map_err(|_| anyhow!("Bank table must contain exactly {CHAR_KEY_COUNT} banks"))?;
        let upper = upper_vec
            .try_into()
            .map_err(|_| anyhow!("Bank table must contain exactly {CHAR_KEY_COUNT} banks"))?;

        Ok(Self { lower, upper })
    }

    /// The ordered candidate sequence for a key under a mode.
    ///
    /// Every sequence is non-empty; Numeric mode always yields the key's
    /// digit as the single candidate.
    #[must_use]
    pub fn candidates(&self, key: CharKey, mode: Mode) -> &str {
        match mode {
            Mode::Lowercase => &self.lower[key.index()],
            Mode::Uppercase => &self.upper[key.index()],
            Mode::Numeric => DIGITS[key.index()],
        }
    }
}
