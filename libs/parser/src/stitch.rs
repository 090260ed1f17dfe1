//! # Parsed Stitches
//!
//! The flat, row-ordered output of the pattern parser.

use crate::dictionary::StitchType;
use serde::{Deserialize, Serialize};

/// Loop a stitch is worked into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoopModifier {
    BackLoopOnly,
    FrontLoopOnly,
}

impl LoopModifier {
    /// Recognize a modifier keyword (`blo`, `bl`, `flo`, `fl`).
    ///
    /// ## Example
    ///
    /// ```rust
    /// use stitch_parser::LoopModifier;
    ///
    /// assert_eq!(LoopModifier::from_keyword("blo"), Some(LoopModifier::BackLoopOnly));
    /// assert_eq!(LoopModifier::from_keyword("sc"), None);
    /// ```
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "blo" | "bl" => Some(Self::BackLoopOnly),
            "flo" | "fl" => Some(Self::FrontLoopOnly),
            _ => None,
        }
    }
}

/// One stitch placed in a row.
///
/// `row` and `index_in_row` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStitch {
    pub row: u32,
    pub index_in_row: u32,
    #[serde(rename = "type")]
    pub stitch_type: StitchType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<LoopModifier>,
    /// Chain counted from the hook this stitch is worked into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_chain_index: Option<u32>,
}

impl ParsedStitch {
    /// A stitch with no modifier or chain target.
    pub const fn new(row: u32, index_in_row: u32, stitch_type: StitchType) -> Self {
        Self {
            row,
            index_in_row,
            stitch_type,
            modifier: None,
            target_chain_index: None,
        }
    }
}
