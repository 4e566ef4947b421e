//! Label codes and reason strings.
//!
//! Every emitted classification carries exactly one [`StabilityLabel`] and one
//! [`Reason`]; reasons serialize as the fixed strings downstream consumers
//! already key on.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final solvent-removal stability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum StabilityLabel {
    /// Framework does not survive solvent removal (-1)
    Unstable,
    /// Evidence is absent, conflicting, or out of scope (0)
    Undetermined,
    /// Framework survives solvent removal (+1)
    Stable,
}

impl StabilityLabel {
    pub fn code(&self) -> i8 {
        match self {
            Self::Unstable => -1,
            Self::Undetermined => 0,
            Self::Stable => 1,
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            -1 => Some(Self::Unstable),
            0 => Some(Self::Undetermined),
            1 => Some(Self::Stable),
            _ => None,
        }
    }
}

impl From<StabilityLabel> for i8 {
    fn from(label: StabilityLabel) -> i8 {
        label.code()
    }
}

impl TryFrom<i8> for StabilityLabel {
    type Error = String;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| format!("invalid stability label code {}", code))
    }
}

impl fmt::Display for StabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Internal resolver signal.
///
/// `OffTopic` (code -100) means the sentence is about another stability
/// dimension (water, air, the solvent molecule itself). It never leaves the
/// engine; the synthesizer remaps it to an undetermined label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    OffTopic,
    Label(StabilityLabel),
}

impl Signal {
    pub const UNDETERMINED: Signal = Signal::Label(StabilityLabel::Undetermined);

    pub fn code(&self) -> i8 {
        match self {
            Self::OffTopic => -100,
            Self::Label(label) => label.code(),
        }
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::UNDETERMINED
    }
}

/// Why a label was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Reason {
    /// Dependency resolution ran and no rule fired
    Default,
    WaterStability,
    AirStability,
    SolventMoleculeStability,
    MultistepTga,
    LossConfound,
    NegatedStable,
    NegatedCollapse,
    TwoLossWithStable,
    DoubleNegationStable,
    TwoLossWithCollapse,
    DoubleNegationCollapse,
    UnclearDoubleNegative,
    NoSolvent,
    HasCollapse,
    HasStable,
    HasBoth,
}

impl Reason {
    pub const ALL: [Reason; 17] = [
        Reason::Default,
        Reason::WaterStability,
        Reason::AirStability,
        Reason::SolventMoleculeStability,
        Reason::MultistepTga,
        Reason::LossConfound,
        Reason::NegatedStable,
        Reason::NegatedCollapse,
        Reason::TwoLossWithStable,
        Reason::DoubleNegationStable,
        Reason::TwoLossWithCollapse,
        Reason::DoubleNegationCollapse,
        Reason::UnclearDoubleNegative,
        Reason::NoSolvent,
        Reason::HasCollapse,
        Reason::HasStable,
        Reason::HasBoth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::WaterStability => "water stability",
            Self::AirStability => "air stability",
            Self::SolventMoleculeStability => "solvent molecule stability",
            Self::MultistepTga => {
                "TGA sentence, rule based parsing will fail for multistep procedure"
            }
            Self::LossConfound => "solvent stability confounding loss keywords",
            Self::NegatedStable => "negation with stable kw",
            Self::NegatedCollapse => "negation with collapse kw",
            Self::TwoLossWithStable => "two loss keywords, single negation with stability kw",
            Self::DoubleNegationStable => "double negation with stability kw",
            Self::TwoLossWithCollapse => "two loss keywords, single negation with collapse kw",
            Self::DoubleNegationCollapse => "double negation with collapse kw",
            Self::UnclearDoubleNegative => "unclear double negative",
            Self::NoSolvent => "no solvent kw",
            Self::HasCollapse => "has collapse kw",
            Self::HasStable => "has stable kw",
            Self::HasBoth => "has both collapse and stability kw",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|reason| reason.as_str() == s)
    }

    /// Reasons a TGA-ambiguous sentence keeps instead of the generic TGA reason.
    pub fn survives_tga_override(&self) -> bool {
        matches!(
            self,
            Self::WaterStability
                | Self::AirStability
                | Self::SolventMoleculeStability
                | Self::MultistepTga
                | Self::LossConfound
        )
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Reason> for &'static str {
    fn from(reason: Reason) -> &'static str {
        reason.as_str()
    }
}

impl TryFrom<String> for Reason {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("unknown reason `{}`", s))
    }
}
