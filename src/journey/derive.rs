//! Journey derivation — turn a profile and the rule blueprints into the
//! investor's concrete checklist.

use serde::{Deserialize, Serialize};

use crate::catalog::{JourneyRules, RuleSet, Service, ServiceCatalog};
use crate::session::profile::{InvestorStatus, UserProfile};

/// One entry of a derived journey: the rule id plus its resolved service.
///
/// Derived on demand, never persisted; the status map references steps by
/// id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyStep {
    pub id: String,
    pub service: Service,
}

/// Derive the ordered checklist for `profile`.
///
/// Pure: same inputs, same output, no side effects. Profiles that have not
/// completed onboarding get an empty journey; the caller renders a
/// "not ready" state, never an error.
///
/// Existing investors receive the fixed post-establishment list with no
/// filtering; new investors get the standard list filtered by the rule
/// predicates, in declaration order.
pub fn derive_journey(
    profile: &UserProfile,
    rules: &JourneyRules,
    catalog: &ServiceCatalog,
) -> Vec<JourneyStep> {
    if !profile.has_onboarded {
        return Vec::new();
    }

    if profile.investor_status == InvestorStatus::Existing {
        return resolve_all(&rules.existing_investor, catalog);
    }

    rules
        .standard
        .iter()
        .filter(|rule| rule.matches(profile))
        .filter_map(|rule| resolve(rule.id.as_str(), &rule.service_id, catalog))
        .collect()
}

fn resolve_all(rules: &RuleSet, catalog: &ServiceCatalog) -> Vec<JourneyStep> {
    rules
        .iter()
        .filter_map(|rule| resolve(rule.id.as_str(), &rule.service_id, catalog))
        .collect()
}

fn resolve(rule_id: &str, service_id: &str, catalog: &ServiceCatalog) -> Option<JourneyStep> {
    match catalog.get(service_id) {
        Some(service) => Some(JourneyStep {
            id: rule_id.to_string(),
            service: service.clone(),
        }),
        None => {
            // Validated rule sets make this unreachable; tolerate it anyway.
            tracing::warn!(rule_id, service_id, "Skipping rule with unknown service");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Locale;
    use crate::session::profile::{BusinessModel, InvestmentType};

    fn fixtures() -> (ServiceCatalog, JourneyRules) {
        let catalog = ServiceCatalog::builtin(Locale::En);
        let rules = JourneyRules::builtin(&catalog);
        (catalog, rules)
    }

    fn onboarded(
        investment_type: InvestmentType,
        business_model: BusinessModel,
    ) -> UserProfile {
        UserProfile {
            investment_type,
            business_model,
            has_onboarded: true,
            ..UserProfile::default()
        }
    }

    fn ids(journey: &[JourneyStep]) -> Vec<&str> {
        journey.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn not_onboarded_profiles_get_an_empty_journey() {
        let (catalog, rules) = fixtures();
        let mut profile = UserProfile::default();
        assert!(!profile.has_onboarded);
        assert!(derive_journey(&profile, &rules, &catalog).is_empty());

        // Even with otherwise journey-worthy answers.
        profile.investment_type = InvestmentType::Foreign;
        profile.business_model = BusinessModel::Franchise;
        assert!(derive_journey(&profile, &rules, &catalog).is_empty());
    }

    #[test]
    fn existing_investor_gets_the_fixed_list_regardless_of_answers() {
        let (catalog, rules) = fixtures();
        let expected = [
            "contract-review",
            "articles-amendment",
            "advanced-tax-consulting",
            "dispute-resolution",
            "trademark-register",
            "work-visa",
        ];

        for investment_type in [
            InvestmentType::Foreign,
            InvestmentType::Local,
            InvestmentType::Gulf,
        ] {
            for model in [BusinessModel::Standard, BusinessModel::Franchise] {
                let profile = UserProfile {
                    investor_status: InvestorStatus::Existing,
                    ..onboarded(investment_type, model)
                };
                let journey = derive_journey(&profile, &rules, &catalog);
                assert_eq!(ids(&journey), expected);
            }
        }
    }

    #[test]
    fn local_standard_investor_journey() {
        let (catalog, rules) = fixtures();
        let profile = onboarded(InvestmentType::Local, BusinessModel::Standard);
        let journey = derive_journey(&profile, &rules, &catalog);

        // misa-license and investor-visa exclude local; doc-auth is
        // foreign-only; franchise-register requires Franchise.
        assert_eq!(
            ids(&journey),
            [
                "cr-issue",
                "municipal-license",
                "hrsd-register",
                "gosi-register",
                "zatca-register",
                "work-visa",
                "civil-defense-cert",
            ]
        );
    }

    #[test]
    fn foreign_franchise_investor_journey() {
        let (catalog, rules) = fixtures();
        let profile = onboarded(InvestmentType::Foreign, BusinessModel::Franchise);
        let journey = derive_journey(&profile, &rules, &catalog);
        assert_eq!(
            ids(&journey),
            [
                "misa-license",
                "doc-auth",
                "cr-issue",
                "franchise-register",
                "municipal-license",
                "hrsd-register",
                "gosi-register",
                "zatca-register",
                "investor-visa",
                "work-visa",
                "civil-defense-cert",
            ]
        );
    }

    #[test]
    fn gulf_investor_skips_foreign_only_steps() {
        let (catalog, rules) = fixtures();
        let profile = onboarded(InvestmentType::Gulf, BusinessModel::Standard);
        let journey = derive_journey(&profile, &rules, &catalog);
        let journey_ids = ids(&journey);

        assert!(journey_ids.contains(&"misa-license"));
        assert!(journey_ids.contains(&"investor-visa"));
        assert!(!journey_ids.contains(&"doc-auth"));
        assert!(!journey_ids.contains(&"franchise-register"));
    }

    #[test]
    fn derivation_is_idempotent() {
        let (catalog, rules) = fixtures();
        let profile = onboarded(InvestmentType::Foreign, BusinessModel::Standard);
        let first = derive_journey(&profile, &rules, &catalog);
        let second = derive_journey(&profile, &rules, &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn steps_carry_their_resolved_service() {
        let (catalog, rules) = fixtures();
        let profile = onboarded(InvestmentType::Foreign, BusinessModel::Standard);
        let journey = derive_journey(&profile, &rules, &catalog);
        let misa = journey.iter().find(|s| s.id == "misa-license").unwrap();
        assert_eq!(misa.service.id, "misa-license");
        assert!(!misa.service.name.is_empty());
        assert!(!misa.service.documents.is_empty());
    }
}
