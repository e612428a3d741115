//! Investor profile model — the onboarding answers that parameterize a
//! journey.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Whether the investor already operates in the Kingdom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestorStatus {
    New,
    Existing,
}

impl std::fmt::Display for InvestorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Existing => write!(f, "existing"),
        }
    }
}

/// Origin of the investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    Foreign,
    Local,
    /// GCC-national investor.
    Gulf,
}

impl std::fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Foreign => write!(f, "foreign"),
            Self::Local => write!(f, "local"),
            Self::Gulf => write!(f, "gulf"),
        }
    }
}

/// How the venture is structured commercially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessModel {
    /// Establish a new company.
    Standard,
    /// Operate an international franchise.
    Franchise,
}

impl Default for BusinessModel {
    fn default() -> Self {
        Self::Standard
    }
}

impl std::fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Franchise => write!(f, "franchise"),
        }
    }
}

/// Legal form of the entity being established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegalEntityType {
    /// Limited liability company.
    Llc,
    /// Branch of a foreign company.
    Branch,
    /// Sole proprietorship.
    Sole,
    /// Joint-stock company.
    Jsc,
    /// Simplified joint-stock company.
    Sjsc,
}

impl LegalEntityType {
    /// Entity forms available to a given investment type.
    ///
    /// Branches are foreign-only; sole proprietorships are for local and
    /// gulf investors.
    pub fn available_for(investment_type: InvestmentType) -> &'static [LegalEntityType] {
        use LegalEntityType::*;
        match investment_type {
            InvestmentType::Foreign => &[Llc, Branch, Jsc, Sjsc],
            InvestmentType::Local | InvestmentType::Gulf => &[Llc, Sole, Jsc, Sjsc],
        }
    }
}

impl std::fmt::Display for LegalEntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Llc => write!(f, "llc"),
            Self::Branch => write!(f, "branch"),
            Self::Sole => write!(f, "sole"),
            Self::Jsc => write!(f, "jsc"),
            Self::Sjsc => write!(f, "sjsc"),
        }
    }
}

/// Investment sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Technology,
    Industrial,
    Tourism,
    RealEstate,
    Health,
    Trade,
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Technology => write!(f, "technology"),
            Self::Industrial => write!(f, "industrial"),
            Self::Tourism => write!(f, "tourism"),
            Self::RealEstate => write!(f, "real_estate"),
            Self::Health => write!(f, "health"),
            Self::Trade => write!(f, "trade"),
        }
    }
}

/// Baseline minimum capital, SAR.
pub const MIN_CAPITAL_DEFAULT: Decimal = dec!(500_000);
/// Minimum capital for a foreign investor in the trade sector, SAR.
pub const MIN_CAPITAL_FOREIGN_TRADE: Decimal = dec!(30_000_000);
/// Reduced trade-sector minimum when a Saudi partner holds equity, SAR.
pub const MIN_CAPITAL_FOREIGN_TRADE_WITH_PARTNER: Decimal = dec!(25_000_000);

/// The investor's profile, created at login and finalized once at onboarding
/// commit.
///
/// Entity type and sector stay `None` until onboarding supplies them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub investor_status: InvestorStatus,
    pub investment_type: InvestmentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_entity_type: Option<LegalEntityType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    /// Declared capital, SAR.
    pub capital: Decimal,
    pub business_model: BusinessModel,
    pub has_onboarded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_saudi_partner: Option<bool>,
}

impl UserProfile {
    /// The profile a user starts with at login.
    ///
    /// Existing investors skip onboarding: their fixed journey needs no
    /// answers, so they come up with `has_onboarded` already set.
    pub fn at_login(investor_status: InvestorStatus) -> Self {
        Self {
            investor_status,
            investment_type: InvestmentType::Foreign,
            legal_entity_type: None,
            sector: None,
            capital: MIN_CAPITAL_DEFAULT,
            business_model: BusinessModel::default(),
            has_onboarded: investor_status == InvestorStatus::Existing,
            has_saudi_partner: None,
        }
    }

    /// Merge onboarding answers into the profile and mark it onboarded.
    ///
    /// Capital below the applicable minimum is raised to it.
    pub fn apply_onboarding(&mut self, answers: OnboardingAnswers) {
        let minimum = answers.minimum_capital();
        self.investment_type = answers.investment_type;
        self.legal_entity_type = Some(answers.legal_entity_type);
        self.sector = Some(answers.sector);
        self.capital = answers.capital.max(minimum);
        self.business_model = answers.business_model;
        self.has_saudi_partner = answers.has_saudi_partner;
        self.has_onboarded = true;
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::at_login(InvestorStatus::New)
    }
}

/// The answers collected by the onboarding flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingAnswers {
    pub investment_type: InvestmentType,
    pub legal_entity_type: LegalEntityType,
    pub sector: Sector,
    /// Declared capital, SAR.
    pub capital: Decimal,
    pub business_model: BusinessModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_saudi_partner: Option<bool>,
}

impl OnboardingAnswers {
    /// Whether the trade-sector foreign-investment capital floor applies.
    pub fn is_foreign_trade(&self) -> bool {
        self.investment_type == InvestmentType::Foreign && self.sector == Sector::Trade
    }

    /// Minimum capital required for these answers, SAR.
    pub fn minimum_capital(&self) -> Decimal {
        if self.is_foreign_trade() {
            if self.has_saudi_partner == Some(true) {
                MIN_CAPITAL_FOREIGN_TRADE_WITH_PARTNER
            } else {
                MIN_CAPITAL_FOREIGN_TRADE
            }
        } else {
            MIN_CAPITAL_DEFAULT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> OnboardingAnswers {
        OnboardingAnswers {
            investment_type: InvestmentType::Local,
            legal_entity_type: LegalEntityType::Llc,
            sector: Sector::Technology,
            capital: dec!(750_000),
            business_model: BusinessModel::Standard,
            has_saudi_partner: None,
        }
    }

    #[test]
    fn login_defaults() {
        let profile = UserProfile::at_login(InvestorStatus::New);
        assert_eq!(profile.investment_type, InvestmentType::Foreign);
        assert!(profile.legal_entity_type.is_none());
        assert!(profile.sector.is_none());
        assert_eq!(profile.capital, MIN_CAPITAL_DEFAULT);
        assert_eq!(profile.business_model, BusinessModel::Standard);
        assert!(!profile.has_onboarded);
    }

    #[test]
    fn existing_investor_is_pre_onboarded() {
        let profile = UserProfile::at_login(InvestorStatus::Existing);
        assert!(profile.has_onboarded);
    }

    #[test]
    fn apply_onboarding_merges_answers() {
        let mut profile = UserProfile::at_login(InvestorStatus::New);
        profile.apply_onboarding(answers());
        assert!(profile.has_onboarded);
        assert_eq!(profile.investment_type, InvestmentType::Local);
        assert_eq!(profile.legal_entity_type, Some(LegalEntityType::Llc));
        assert_eq!(profile.sector, Some(Sector::Technology));
        assert_eq!(profile.capital, dec!(750_000));
    }

    #[test]
    fn minimum_capital_baseline() {
        assert_eq!(answers().minimum_capital(), MIN_CAPITAL_DEFAULT);
    }

    #[test]
    fn minimum_capital_foreign_trade() {
        let mut a = answers();
        a.investment_type = InvestmentType::Foreign;
        a.sector = Sector::Trade;
        assert_eq!(a.minimum_capital(), MIN_CAPITAL_FOREIGN_TRADE);

        a.has_saudi_partner = Some(true);
        assert_eq!(a.minimum_capital(), MIN_CAPITAL_FOREIGN_TRADE_WITH_PARTNER);

        // An explicit "no partner" keeps the full floor.
        a.has_saudi_partner = Some(false);
        assert_eq!(a.minimum_capital(), MIN_CAPITAL_FOREIGN_TRADE);
    }

    #[test]
    fn gulf_trade_is_not_floored() {
        let mut a = answers();
        a.investment_type = InvestmentType::Gulf;
        a.sector = Sector::Trade;
        assert_eq!(a.minimum_capital(), MIN_CAPITAL_DEFAULT);
    }

    #[test]
    fn low_capital_is_raised_at_commit() {
        let mut a = answers();
        a.investment_type = InvestmentType::Foreign;
        a.sector = Sector::Trade;
        a.capital = dec!(1_000_000);

        let mut profile = UserProfile::at_login(InvestorStatus::New);
        profile.apply_onboarding(a);
        assert_eq!(profile.capital, MIN_CAPITAL_FOREIGN_TRADE);
    }

    #[test]
    fn entity_forms_per_investment_type() {
        assert!(LegalEntityType::available_for(InvestmentType::Foreign)
            .contains(&LegalEntityType::Branch));
        assert!(!LegalEntityType::available_for(InvestmentType::Local)
            .contains(&LegalEntityType::Branch));
        assert!(LegalEntityType::available_for(InvestmentType::Gulf)
            .contains(&LegalEntityType::Sole));
    }

    #[test]
    fn profile_serde_roundtrip() {
        let mut profile = UserProfile::at_login(InvestorStatus::New);
        profile.apply_onboarding(answers());

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn enum_display_matches_serde() {
        let json = serde_json::to_string(&InvestmentType::Gulf).unwrap();
        assert_eq!(json, format!("\"{}\"", InvestmentType::Gulf));

        let json = serde_json::to_string(&Sector::RealEstate).unwrap();
        assert_eq!(json, format!("\"{}\"", Sector::RealEstate));

        let json = serde_json::to_string(&BusinessModel::Franchise).unwrap();
        assert_eq!(json, format!("\"{}\"", BusinessModel::Franchise));
    }
}
