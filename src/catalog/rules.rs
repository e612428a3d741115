//! Journey rules — which catalog services apply to which investor, and in
//! what order.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::session::profile::{BusinessModel, InvestmentType, UserProfile};

use super::service::ServiceCatalog;

/// One entry in a journey blueprint: a service reference plus applicability
/// predicates.
///
/// An absent predicate matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyRule {
    pub id: String,
    /// The catalog service this rule resolves to.
    pub service_id: String,
    /// Investment types this step applies to; `None` = all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable_to: Option<Vec<InvestmentType>>,
    /// Business model this step requires; `None` = any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model: Option<BusinessModel>,
}

impl JourneyRule {
    /// A rule with no predicates, applicable to every profile.
    pub fn for_all(id: &str) -> Self {
        Self {
            id: id.to_string(),
            service_id: id.to_string(),
            applicable_to: None,
            business_model: None,
        }
    }

    /// Restrict the rule to the given investment types.
    pub fn applicable_to(mut self, types: &[InvestmentType]) -> Self {
        self.applicable_to = Some(types.to_vec());
        self
    }

    /// Restrict the rule to one business model.
    pub fn business_model(mut self, model: BusinessModel) -> Self {
        self.business_model = Some(model);
        self
    }

    /// Whether this rule's predicates accept `profile`.
    pub fn matches(&self, profile: &UserProfile) -> bool {
        let type_match = self
            .applicable_to
            .as_ref()
            .is_none_or(|types| types.contains(&profile.investment_type));
        let model_match = self
            .business_model
            .is_none_or(|model| model == profile.business_model);
        type_match && model_match
    }
}

/// An ordered, validated list of journey rules.
///
/// Rule ids are unique and every service reference resolves against the
/// catalog the set was validated with. Declaration order is the journey
/// order; nothing downstream re-sorts.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<JourneyRule>,
}

impl RuleSet {
    /// Build a rule set, checking id uniqueness and service references.
    pub fn new(rules: Vec<JourneyRule>, catalog: &ServiceCatalog) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(CatalogError::DuplicateRule(rule.id.clone()));
            }
            if !catalog.contains(&rule.service_id) {
                return Err(CatalogError::UnknownService {
                    rule: rule.id.clone(),
                    service: rule.service_id.clone(),
                });
            }
        }
        Ok(Self { rules })
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &JourneyRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The two journey blueprints the product ships with.
///
/// New investors get the establishment checklist, filtered per profile;
/// existing investors get a fixed post-establishment checklist that ignores
/// profile answers entirely.
#[derive(Debug, Clone)]
pub struct JourneyRules {
    pub standard: RuleSet,
    pub existing_investor: RuleSet,
}

impl JourneyRules {
    pub fn new(standard: RuleSet, existing_investor: RuleSet) -> Self {
        Self {
            standard,
            existing_investor,
        }
    }
}
