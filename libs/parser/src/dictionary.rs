//! # Stitch Dictionary
//!
//! The closed set of stitch types, their metadata, and the abbreviation table
//! used to resolve words in a pattern.
//!
//! ## Resolution Policy
//!
//! 1. Exact, case-insensitive match against canonical abbreviations and aliases.
//! 2. Otherwise the first key (longest first, then table order) that is a
//!    prefix of the word and at least two characters long.
//! 3. Otherwise unresolved.
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::dictionary::{lookup, resolve, Resolution, StitchType};
//!
//! assert_eq!(lookup("SC"), Some(StitchType::SingleCrochet));
//! assert_eq!(
//!     resolve("chains"),
//!     Resolution::Prefix { key: "ch", stitch: StitchType::Chain }
//! );
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// CATEGORY
// =============================================================================

/// Broad family a stitch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchCategory {
    Basic,
    Increase,
    Decrease,
    Loop,
    Texture,
    Special,
    Decorative,
}

// =============================================================================
// STITCH TYPE
// =============================================================================

/// Every stitch the chart understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchType {
    // Basic
    Chain,
    SlipStitch,
    SingleCrochet,
    HalfDoubleCrochet,
    DoubleCrochet,
    TrebleCrochet,
    DoubleTreble,
    TripleTreble,
    ExtendedSingle,
    ExtendedDouble,

    // Increase
    Increase,
    TripleIncrease,
    QuadrupleIncrease,
    HalfDoubleIncrease,
    DoubleIncrease,
    TrebleIncrease,

    // Decrease
    Decrease,
    InvisibleDecrease,
    TripleDecrease,
    HalfDoubleDecrease,
    DoubleDecrease,
    TrebleDecrease,

    // Loop
    FrontPostSingle,
    BackPostSingle,
    FrontPostHalfDouble,
    BackPostHalfDouble,
    FrontPostDouble,
    BackPostDouble,
    FrontPostTreble,
    BackPostTreble,
    LoopStitch,

    // Texture
    Bobble,
    Popcorn,
    Puff,
    Cluster,
    Bullion,
    Spike,
    CrossedDouble,

    // Special
    MagicRing,
    Skip,
    TurningChain,
    ChainSpace,
    FoundationSingle,
    FoundationDouble,

    // Decorative
    Picot,
    Shell,
    VStitch,
    Fan,
    ReverseSingle,
    Star,
    SolomonKnot,
}

/// Static metadata attached to each stitch type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StitchInfo {
    /// Canonical abbreviation.
    pub abbreviation: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Family.
    pub category: StitchCategory,
    /// Height relative to a chain (1.0).
    pub height: f64,
    /// Interior cross-bars drawn on the stem.
    pub wraps: u8,
    /// Stitches produced (increase) or consumed (decrease). 1 otherwise.
    pub fan: u8,
}

const fn info(
    abbreviation: &'static str,
    name: &'static str,
    category: StitchCategory,
    height: f64,
    wraps: u8,
    fan: u8,
) -> StitchInfo {
    StitchInfo {
        abbreviation,
        name,
        category,
        height,
        wraps,
        fan,
    }
}

impl StitchType {
    /// All variants in table order.
    pub const ALL: [StitchType; 51] = [
        Self::Chain,
        Self::SlipStitch,
        Self::SingleCrochet,
        Self::HalfDoubleCrochet,
        Self::DoubleCrochet,
        Self::TrebleCrochet,
        Self::DoubleTreble,
        Self::TripleTreble,
        Self::ExtendedSingle,
        Self::ExtendedDouble,
        Self::Increase,
        Self::TripleIncrease,
        Self::QuadrupleIncrease,
        Self::HalfDoubleIncrease,
        Self::DoubleIncrease,
        Self::TrebleIncrease,
        Self::Decrease,
        Self::InvisibleDecrease,
        Self::TripleDecrease,
        Self::HalfDoubleDecrease,
        Self::DoubleDecrease,
        Self::TrebleDecrease,
        Self::FrontPostSingle,
        Self::BackPostSingle,
        Self::FrontPostHalfDouble,
        Self::BackPostHalfDouble,
        Self::FrontPostDouble,
        Self::BackPostDouble,
        Self::FrontPostTreble,
        Self::BackPostTreble,
        Self::LoopStitch,
        Self::Bobble,
        Self::Popcorn,
        Self::Puff,
        Self::Cluster,
        Self::Bullion,
        Self::Spike,
        Self::CrossedDouble,
        Self::MagicRing,
        Self::Skip,
        Self::TurningChain,
        Self::ChainSpace,
        Self::FoundationSingle,
        Self::FoundationDouble,
        Self::Picot,
        Self::Shell,
        Self::VStitch,
        Self::Fan,
        Self::ReverseSingle,
        Self::Star,
        Self::SolomonKnot,
    ];

    /// Metadata for this stitch.
    pub const fn info(self) -> StitchInfo {
        use StitchCategory::*;
        match self {
            Self::Chain => info("ch", "chain", Basic, 1.0, 0, 1),
            Self::SlipStitch => info("sl", "slip stitch", Basic, 0.5, 0, 1),
            Self::SingleCrochet => info("sc", "single crochet", Basic, 1.0, 0, 1),
            Self::HalfDoubleCrochet => info("hdc", "half double crochet", Basic, 1.5, 0, 1),
            Self::DoubleCrochet => info("dc", "double crochet", Basic, 2.0, 1, 1),
            Self::TrebleCrochet => info("tr", "treble crochet", Basic, 3.0, 2, 1),
            Self::DoubleTreble => info("dtr", "double treble", Basic, 4.0, 3, 1),
            Self::TripleTreble => info("trtr", "triple treble", Basic, 5.0, 4, 1),
            Self::ExtendedSingle => info("esc", "extended single crochet", Basic, 1.25, 0, 1),
            Self::ExtendedDouble => info("edc", "extended double crochet", Basic, 2.25, 1, 1),

            Self::Increase => info("inc", "increase", Increase, 1.0, 0, 2),
            Self::TripleIncrease => info("tinc", "three stitch increase", Increase, 1.0, 0, 3),
            Self::QuadrupleIncrease => info("qinc", "four stitch increase", Increase, 1.0, 0, 4),
            Self::HalfDoubleIncrease => info("hdcinc", "half double increase", Increase, 1.5, 0, 2),
            Self::DoubleIncrease => info("dcinc", "double crochet increase", Increase, 2.0, 1, 2),
            Self::TrebleIncrease => info("trinc", "treble increase", Increase, 3.0, 2, 2),

            Self::Decrease => info("dec", "decrease", Decrease, 1.0, 0, 2),
            Self::InvisibleDecrease => info("invdec", "invisible decrease", Decrease, 1.0, 0, 2),
            Self::TripleDecrease => info("tdec", "three stitch decrease", Decrease, 1.0, 0, 3),
            Self::HalfDoubleDecrease => info("hdcdec", "half double decrease", Decrease, 1.5, 0, 2),
            Self::DoubleDecrease => info("dcdec", "double crochet decrease", Decrease, 2.0, 1, 2),
            Self::TrebleDecrease => info("trdec", "treble decrease", Decrease, 3.0, 2, 2),

            Self::FrontPostSingle => info("fpsc", "front post single crochet", Loop, 1.0, 0, 1),
            Self::BackPostSingle => info("bpsc", "back post single crochet", Loop, 1.0, 0, 1),
            Self::FrontPostHalfDouble => info("fphdc", "front post half double", Loop, 1.5, 0, 1),
            Self::BackPostHalfDouble => info("bphdc", "back post half double", Loop, 1.5, 0, 1),
            Self::FrontPostDouble => info("fpdc", "front post double crochet", Loop, 2.0, 1, 1),
            Self::BackPostDouble => info("bpdc", "back post double crochet", Loop, 2.0, 1, 1),
            Self::FrontPostTreble => info("fptr", "front post treble", Loop, 3.0, 2, 1),
            Self::BackPostTreble => info("bptr", "back post treble", Loop, 3.0, 2, 1),
            Self::LoopStitch => info("lp", "loop stitch", Loop, 1.0, 0, 1),

            Self::Bobble => info("bob", "bobble", Texture, 2.0, 1, 1),
            Self::Popcorn => info("pc", "popcorn", Texture, 2.0, 1, 1),
            Self::Puff => info("puff", "puff stitch", Texture, 1.5, 0, 1),
            Self::Cluster => info("cl", "cluster", Texture, 2.0, 1, 1),
            Self::Bullion => info("bul", "bullion", Texture, 2.5, 3, 1),
            Self::Spike => info("spk", "spike stitch", Texture, 2.0, 0, 1),
            Self::CrossedDouble => info("xdc", "crossed double crochet", Texture, 2.0, 1, 1),

            Self::MagicRing => info("mr", "magic ring", Special, 0.0, 0, 1),
            Self::Skip => info("sk", "skip", Special, 0.0, 0, 1),
            Self::TurningChain => info("tch", "turning chain", Special, 1.0, 0, 1),
            Self::ChainSpace => info("chsp", "chain space", Special, 1.0, 0, 1),
            Self::FoundationSingle => info("fsc", "foundation single crochet", Special, 1.0, 0, 1),
            Self::FoundationDouble => info("fdc", "foundation double crochet", Special, 2.0, 1, 1),

            Self::Picot => info("picot", "picot", Decorative, 0.5, 0, 1),
            Self::Shell => info("sh", "shell", Decorative, 2.0, 1, 1),
            Self::VStitch => info("vst", "v-stitch", Decorative, 2.0, 1, 1),
            Self::Fan => info("fan", "fan", Decorative, 2.0, 1, 1),
            Self::ReverseSingle => info("rsc", "reverse single crochet", Decorative, 1.0, 0, 1),
            Self::Star => info("star", "star stitch", Decorative, 1.0, 0, 1),
            Self::SolomonKnot => info("knot", "solomon's knot", Decorative, 1.0, 0, 1),
        }
    }

    /// Canonical abbreviation, e.g. `"hdc"`.
    pub const fn abbreviation(self) -> &'static str {
        self.info().abbreviation
    }

    /// Display name, e.g. `"half double crochet"`.
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn category(self) -> StitchCategory {
        self.info().category
    }

    /// Height relative to a chain.
    pub const fn height(self) -> f64 {
        self.info().height
    }

    /// Number of interior cross-bars.
    pub const fn wrap_count(self) -> u8 {
        self.info().wraps
    }

    /// Stitches produced by an increase or consumed by a decrease.
    ///
    /// `None` for every other category.
    pub const fn fan_size(self) -> Option<u8> {
        match self.category() {
            StitchCategory::Increase | StitchCategory::Decrease => Some(self.info().fan),
            _ => None,
        }
    }

    pub const fn is_increase(self) -> bool {
        matches!(self.category(), StitchCategory::Increase)
    }

    pub const fn is_decrease(self) -> bool {
        matches!(self.category(), StitchCategory::Decrease)
    }

    /// Chains, slips and rings are drawn as closed loops instead of stems.
    pub const fn draws_as_loop(self) -> bool {
        matches!(self, Self::Chain | Self::SlipStitch | Self::MagicRing)
    }

    /// Exact lookup of a canonical abbreviation or alias.
    pub fn from_abbreviation(word: &str) -> Option<Self> {
        EXACT.get(word.to_lowercase().as_str()).copied()
    }
}

impl std::fmt::Display for StitchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

// =============================================================================
// ABBREVIATION TABLE
// =============================================================================

/// Canonical abbreviations followed by aliases, in pinned order.
///
/// Single-letter keys come from chart notation (`x` single crochet, `v`
/// increase, `a` decrease, `w`/`m` three-way increase/decrease, `t` half
/// double, `f` double).
const KEYS: &[(&str, StitchType)] = &[
    ("ch", StitchType::Chain),
    ("sl", StitchType::SlipStitch),
    ("slst", StitchType::SlipStitch),
    ("ss", StitchType::SlipStitch),
    ("sc", StitchType::SingleCrochet),
    ("x", StitchType::SingleCrochet),
    ("+", StitchType::SingleCrochet),
    ("hdc", StitchType::HalfDoubleCrochet),
    ("t", StitchType::HalfDoubleCrochet),
    ("dc", StitchType::DoubleCrochet),
    ("f", StitchType::DoubleCrochet),
    ("tr", StitchType::TrebleCrochet),
    ("dtr", StitchType::DoubleTreble),
    ("trtr", StitchType::TripleTreble),
    ("esc", StitchType::ExtendedSingle),
    ("edc", StitchType::ExtendedDouble),
    ("inc", StitchType::Increase),
    ("v", StitchType::Increase),
    ("tinc", StitchType::TripleIncrease),
    ("w", StitchType::TripleIncrease),
    ("qinc", StitchType::QuadrupleIncrease),
    ("hdcinc", StitchType::HalfDoubleIncrease),
    ("dcinc", StitchType::DoubleIncrease),
    ("trinc", StitchType::TrebleIncrease),
    ("dec", StitchType::Decrease),
    ("a", StitchType::Decrease),
    ("invdec", StitchType::InvisibleDecrease),
    ("tdec", StitchType::TripleDecrease),
    ("m", StitchType::TripleDecrease),
    ("hdcdec", StitchType::HalfDoubleDecrease),
    ("dcdec", StitchType::DoubleDecrease),
    ("trdec", StitchType::TrebleDecrease),
    ("fpsc", StitchType::FrontPostSingle),
    ("bpsc", StitchType::BackPostSingle),
    ("fphdc", StitchType::FrontPostHalfDouble),
    ("bphdc", StitchType::BackPostHalfDouble),
    ("fpdc", StitchType::FrontPostDouble),
    ("bpdc", StitchType::BackPostDouble),
    ("fptr", StitchType::FrontPostTreble),
    ("bptr", StitchType::BackPostTreble),
    ("lp", StitchType::LoopStitch),
    ("bob", StitchType::Bobble),
    ("bobble", StitchType::Bobble),
    ("pc", StitchType::Popcorn),
    ("pop", StitchType::Popcorn),
    ("popcorn", StitchType::Popcorn),
    ("puff", StitchType::Puff),
    ("cl", StitchType::Cluster),
    ("cluster", StitchType::Cluster),
    ("bul", StitchType::Bullion),
    ("bullion", StitchType::Bullion),
    ("spk", StitchType::Spike),
    ("spike", StitchType::Spike),
    ("xdc", StitchType::CrossedDouble),
    ("mr", StitchType::MagicRing),
    ("magic", StitchType::MagicRing),
    ("ring", StitchType::MagicRing),
    ("sk", StitchType::Skip),
    ("skip", StitchType::Skip),
    ("tch", StitchType::TurningChain),
    ("chsp", StitchType::ChainSpace),
    ("sp", StitchType::ChainSpace),
    ("fsc", StitchType::FoundationSingle),
    ("fdc", StitchType::FoundationDouble),
    ("picot", StitchType::Picot),
    ("p", StitchType::Picot),
    ("sh", StitchType::Shell),
    ("shell", StitchType::Shell),
    ("vst", StitchType::VStitch),
    ("fan", StitchType::Fan),
    ("rsc", StitchType::ReverseSingle),
    ("crab", StitchType::ReverseSingle),
    ("star", StitchType::Star),
    ("knot", StitchType::SolomonKnot),
];

/// Minimum key length eligible for prefix fallback.
const MIN_PREFIX_LEN: usize = 2;

static EXACT: Lazy<HashMap<&'static str, StitchType>> =
    Lazy::new(|| KEYS.iter().copied().collect());

/// Prefix candidates: longest key first, ties keep table order.
static PREFIX_ORDER: Lazy<Vec<(&'static str, StitchType)>> = Lazy::new(|| {
    let mut keys: Vec<_> = KEYS
        .iter()
        .copied()
        .filter(|(key, _)| key.len() >= MIN_PREFIX_LEN)
        .collect();
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    keys
});

// =============================================================================
// RESOLUTION
// =============================================================================

/// Which resolution rule matched a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The word is a canonical abbreviation or alias.
    Exact(StitchType),
    /// The word starts with `key`.
    Prefix {
        key: &'static str,
        stitch: StitchType,
    },
    Unresolved,
}

impl Resolution {
    /// The resolved stitch, if any.
    pub fn stitch(self) -> Option<StitchType> {
        match self {
            Self::Exact(stitch) | Self::Prefix { stitch, .. } => Some(stitch),
            Self::Unresolved => None,
        }
    }
}

/// Resolve a word against the dictionary, reporting which rule fired.
pub fn resolve(word: &str) -> Resolution {
    let word = word.to_lowercase();
    if let Some(stitch) = EXACT.get(word.as_str()) {
        return Resolution::Exact(*stitch);
    }
    for &(key, stitch) in PREFIX_ORDER.iter() {
        if word.starts_with(key) {
            tracing::trace!(word = %word, key, "prefix fallback");
            return Resolution::Prefix { key, stitch };
        }
    }
    Resolution::Unresolved
}

/// Resolve a word to a stitch type.
pub fn lookup(word: &str) -> Option<StitchType> {
    resolve(word).stitch()
}

/// Resolve a word, defaulting to single crochet when nothing matches.
pub fn lookup_or_default(word: &str) -> StitchType {
    lookup(word).unwrap_or(StitchType::SingleCrochet)
}

/// Metadata for a stitch type.
pub const fn metadata(stitch: StitchType) -> StitchInfo {
    stitch.info()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_exact_lookup_is_case_insensitive() {
        assert_eq!(lookup("sc"), Some(StitchType::SingleCrochet));
        assert_eq!(lookup("SC"), Some(StitchType::SingleCrochet));
        assert_eq!(lookup("Hdc"), Some(StitchType::HalfDoubleCrochet));
        assert_eq!(resolve("x"), Resolution::Exact(StitchType::SingleCrochet));
    }

    #[test]
    fn test_chart_letters() {
        assert_eq!(lookup("v"), Some(StitchType::Increase));
        assert_eq!(lookup("a"), Some(StitchType::Decrease));
        assert_eq!(lookup("w"), Some(StitchType::TripleIncrease));
        assert_eq!(lookup("+"), Some(StitchType::SingleCrochet));
    }

    #[test]
    fn test_prefix_fallback() {
        assert_eq!(
            resolve("chains"),
            Resolution::Prefix {
                key: "ch",
                stitch: StitchType::Chain
            }
        );
        assert_eq!(
            resolve("bobbles"),
            Resolution::Prefix {
                key: "bobble",
                stitch: StitchType::Bobble
            }
        );
    }

    #[test]
    fn test_prefix_prefers_longest_key() {
        // "hdc" and "hdcinc" are both prefixes of "hdcincs".
        assert_eq!(
            resolve("hdcincs"),
            Resolution::Prefix {
                key: "hdcinc",
                stitch: StitchType::HalfDoubleIncrease
            }
        );
    }

    #[test]
    fn test_single_letter_keys_never_prefix() {
        // "x" must not swallow "xyz".
        assert_eq!(resolve("xyz"), Resolution::Unresolved);
        assert_eq!(resolve("vertical"), Resolution::Unresolved);
    }

    #[test]
    fn test_unresolved_defaults_to_single_crochet() {
        assert_eq!(lookup("hook"), None);
        assert_eq!(lookup_or_default("hook"), StitchType::SingleCrochet);
    }

    #[test]
    fn test_every_variant_has_canonical_key() {
        for stitch in StitchType::ALL {
            assert_eq!(
                StitchType::from_abbreviation(stitch.abbreviation()),
                Some(stitch),
                "{:?} abbreviation does not resolve to itself",
                stitch
            );
        }
    }

    #[test]
    fn test_variants_are_distinct() {
        let set: HashSet<_> = StitchType::ALL.iter().collect();
        assert_eq!(set.len(), StitchType::ALL.len());
    }

    #[test]
    fn test_heights_non_negative() {
        for stitch in StitchType::ALL {
            assert!(stitch.height() >= 0.0, "{:?}", stitch);
        }
        assert_eq!(StitchType::Chain.height(), 1.0);
    }

    #[test]
    fn test_fan_sizes() {
        assert_eq!(StitchType::Increase.fan_size(), Some(2));
        assert_eq!(StitchType::TripleIncrease.fan_size(), Some(3));
        assert_eq!(StitchType::TripleDecrease.fan_size(), Some(3));
        assert_eq!(StitchType::SingleCrochet.fan_size(), None);
        assert_eq!(StitchType::Shell.fan_size(), None);
    }

    #[test]
    fn test_increase_and_decrease_fans_exceed_one() {
        for stitch in StitchType::ALL {
            if let Some(fan) = stitch.fan_size() {
                assert!(fan >= 2, "{:?}", stitch);
            }
        }
    }

    #[test]
    fn test_metadata_matches_info() {
        let meta = metadata(StitchType::TrebleCrochet);
        assert_eq!(meta.category, StitchCategory::Basic);
        assert_eq!(meta.wraps, 2);
        assert_eq!(meta.height, 3.0);
    }
}
