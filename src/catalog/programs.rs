//! Investment incentive programs — informational reference table.

use serde::{Deserialize, Serialize};

use super::Locale;

/// A government incentive or support program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: String,
    pub name: String,
    pub description: String,
}

fn program(id: &str, name: &str, description: &str) -> Program {
    Program {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

impl Program {
    /// The built-in program table, resolved for `locale`.
    pub fn builtin(locale: Locale) -> Vec<Program> {
        match locale {
            Locale::En => vec![
                program(
                    "strategic-investor",
                    "Strategic Investor Program",
                    "Accelerated licensing and dedicated account management for large strategic investments.",
                ),
                program(
                    "miza-program",
                    "Miza Investor Benefits",
                    "Bundled discounts and fast-tracked services for newly licensed investors.",
                ),
                program(
                    "monshaat-sme-support",
                    "Monsha'at SME Support",
                    "Funding, incubation and advisory programs for small and medium enterprises.",
                ),
                program(
                    "local-content-initiative",
                    "Local Content Initiative",
                    "Procurement preferences for companies that grow local content in their supply chains.",
                ),
                program(
                    "rhq-program",
                    "Regional Headquarters Program",
                    "Incentives for multinationals locating their regional headquarters in the Kingdom.",
                ),
                program(
                    "nidlp-program",
                    "Industrial Development and Logistics Program",
                    "Sector incentives across industry, mining, energy and logistics.",
                ),
                program(
                    "tourism-fund",
                    "Tourism Development Fund",
                    "Financing solutions for tourism and hospitality projects.",
                ),
                program(
                    "rd-initiative",
                    "Research and Development Incentives",
                    "Grants and support for companies running R&D activities in the Kingdom.",
                ),
            ],
            Locale::Ar => vec![
                program(
                    "strategic-investor",
                    "برنامج المستثمر الاستراتيجي",
                    "ترخيص معجل وإدارة حساب مخصصة للاستثمارات الاستراتيجية الكبرى.",
                ),
                program(
                    "miza-program",
                    "مزايا برنامج ميزة",
                    "حزمة خصومات وخدمات معجلة للمستثمرين المرخصين حديثًا.",
                ),
                program(
                    "monshaat-sme-support",
                    "دعم منشآت",
                    "برامج تمويل واحتضان واستشارات للمنشآت الصغيرة والمتوسطة.",
                ),
                program(
                    "local-content-initiative",
                    "مبادرة المحتوى المحلي",
                    "أفضلية في المشتريات للشركات التي تنمي المحتوى المحلي في سلاسل إمدادها.",
                ),
                program(
                    "rhq-program",
                    "برنامج المقرات الإقليمية",
                    "حوافز للشركات متعددة الجنسيات التي تتخذ من المملكة مقرًا إقليميًا.",
                ),
                program(
                    "nidlp-program",
                    "برنامج تطوير الصناعة والخدمات اللوجستية",
                    "حوافز قطاعية في الصناعة والتعدين والطاقة والخدمات اللوجستية.",
                ),
                program(
                    "tourism-fund",
                    "صندوق التنمية السياحي",
                    "حلول تمويلية لمشاريع السياحة والضيافة.",
                ),
                program(
                    "rd-initiative",
                    "حوافز البحث والتطوير",
                    "منح ودعم للشركات التي تمارس أنشطة البحث والتطوير في المملكة.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_carry_the_same_program_ids() {
        let en: Vec<String> = Program::builtin(Locale::En)
            .into_iter()
            .map(|p| p.id)
            .collect();
        let ar: Vec<String> = Program::builtin(Locale::Ar)
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(en, ar);
        assert_eq!(en.len(), 8);
    }
}
