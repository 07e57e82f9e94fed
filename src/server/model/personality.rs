//! Bot airline personality classification.

/// Derived label summarizing a bot airline's financial and operational posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Personality {
    Aggressive,
    Conservative,
    Balanced,
    Regional,
    Premium,
    Budget,
}

/// Service quality above which a bot is considered premium.
pub const PREMIUM_SERVICE_QUALITY: f64 = 70.0;
/// Service quality below which a bot is considered budget.
pub const BUDGET_SERVICE_QUALITY: f64 = 30.0;
/// Balance above which a bot is considered aggressive.
pub const AGGRESSIVE_BALANCE: i64 = 500_000_000;
/// Balance below which a bot is considered conservative.
pub const CONSERVATIVE_BALANCE: i64 = 50_000_000;
/// Reputation below which a bot is considered regional.
pub const REGIONAL_REPUTATION: f64 = 30.0;

impl Personality {
    /// Every personality, in the order the summary reports them.
    pub const ALL: [Personality; 6] = [
        Personality::Aggressive,
        Personality::Conservative,
        Personality::Balanced,
        Personality::Regional,
        Personality::Premium,
        Personality::Budget,
    ];

    /// Classifies a bot from its balance, reputation and service quality.
    ///
    /// Thresholds are checked in a fixed order and the first match wins: service quality
    /// (premium, then budget), then balance (aggressive, then conservative), then
    /// reputation (regional). Anything else is balanced.
    pub fn classify(balance: i64, reputation: f64, service_quality: f64) -> Self {
        if service_quality > PREMIUM_SERVICE_QUALITY {
            Personality::Premium
        } else if service_quality < BUDGET_SERVICE_QUALITY {
            Personality::Budget
        } else if balance > AGGRESSIVE_BALANCE {
            Personality::Aggressive
        } else if balance < CONSERVATIVE_BALANCE {
            Personality::Conservative
        } else if reputation < REGIONAL_REPUTATION {
            Personality::Regional
        } else {
            Personality::Balanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Aggressive => "AGGRESSIVE",
            Personality::Conservative => "CONSERVATIVE",
            Personality::Balanced => "BALANCED",
            Personality::Regional => "REGIONAL",
            Personality::Premium => "PREMIUM",
            Personality::Budget => "BUDGET",
        }
    }
}
