//! Built-in reference tables — services and journey blueprints, English and
//! Arabic.
//!
//! Tables are constructed fresh per call and validated on the way out; the
//! ids and declaration order here are load-bearing (journey order is rule
//! declaration order).

use crate::session::profile::{BusinessModel, InvestmentType};

use super::rules::{JourneyRule, JourneyRules, RuleSet};
use super::service::{Service, ServiceCatalog};
use super::Locale;

fn service(
    id: &str,
    name: &str,
    agency: &str,
    short_description: &str,
    documents: &[&str],
    conditions: &[&str],
    fees: &str,
    time: &str,
) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        agency: agency.to_string(),
        short_description: short_description.to_string(),
        documents: documents.iter().map(|s| s.to_string()).collect(),
        conditions: conditions.iter().map(|s| s.to_string()).collect(),
        fees: fees.to_string(),
        time: time.to_string(),
    }
}

impl ServiceCatalog {
    /// The built-in service table, resolved for `locale`.
    pub fn builtin(locale: Locale) -> Self {
        let services = match locale {
            Locale::En => services_en(),
            Locale::Ar => services_ar(),
        };
        ServiceCatalog::new(services).expect("built-in service ids are unique")
    }
}

impl JourneyRules {
    /// The built-in journey blueprints, validated against `catalog`.
    ///
    /// `catalog` must contain every referenced service; both built-in
    /// locales do.
    pub fn builtin(catalog: &ServiceCatalog) -> Self {
        use InvestmentType::{Foreign, Gulf};

        let standard = RuleSet::new(
            vec![
                JourneyRule::for_all("misa-license").applicable_to(&[Foreign, Gulf]),
                JourneyRule::for_all("doc-auth").applicable_to(&[Foreign]),
                JourneyRule::for_all("cr-issue"),
                JourneyRule::for_all("franchise-register")
                    .business_model(BusinessModel::Franchise),
                JourneyRule::for_all("municipal-license"),
                JourneyRule::for_all("hrsd-register"),
                JourneyRule::for_all("gosi-register"),
                JourneyRule::for_all("zatca-register"),
                JourneyRule::for_all("investor-visa").applicable_to(&[Foreign, Gulf]),
                JourneyRule::for_all("work-visa"),
                JourneyRule::for_all("civil-defense-cert"),
            ],
            catalog,
        )
        .expect("built-in standard journey references known services");

        let existing_investor = RuleSet::new(
            vec![
                JourneyRule::for_all("contract-review"),
                JourneyRule::for_all("articles-amendment"),
                JourneyRule::for_all("advanced-tax-consulting"),
                JourneyRule::for_all("dispute-resolution"),
                JourneyRule::for_all("trademark-register"),
                JourneyRule::for_all("work-visa"),
            ],
            catalog,
        )
        .expect("built-in existing-investor journey references known services");

        JourneyRules::new(standard, existing_investor)
    }
}

fn services_en() -> Vec<Service> {
    vec![
        service(
            "misa-license",
            "Investment License",
            "Ministry of Investment (MISA)",
            "Obtain the investment license that authorizes you to own and operate a business in the Kingdom.",
            &[
                "Certified commercial registration of the parent company",
                "Audited financial statements for the last fiscal year",
                "Passport copies of the shareholders",
            ],
            &[
                "Parent company must have operated for at least one year",
                "Activity must be open to foreign investment",
            ],
            "2,000 SAR annually",
            "1–3 working days",
        ),
        service(
            "cr-issue",
            "Commercial Registration",
            "Ministry of Commerce",
            "Issue the commercial registration that gives your company its legal personality.",
            &[
                "Articles of association",
                "Approved trade-name reservation",
                "Shareholder identity documents",
            ],
            &[
                "Trade name must be reserved beforehand",
                "Declared capital must match the articles",
            ],
            "1,200 SAR",
            "1 working day",
        ),
        service(
            "franchise-register",
            "Franchise Registration",
            "Ministry of Commerce",
            "Register the franchise agreement in the national franchise register before operating the brand.",
            &[
                "Copy of the franchise agreement",
                "Franchise disclosure document",
                "Franchisor's commercial registration",
                "Power of attorney for the local applicant",
            ],
            &[
                "Agreement must be registered before operations start",
                "Franchisor must have operated the model for at least one year",
            ],
            "1,000 SAR",
            "5 working days",
        ),
        service(
            "gosi-register",
            "Social Insurance Registration",
            "General Organization for Social Insurance (GOSI)",
            "Open the establishment's social-insurance file and register employees for contributions.",
            &[
                "Commercial registration",
                "Company bank IBAN",
                "Employee list with contract wages",
            ],
            &[
                "Registration within 15 days of the first hire",
                "Declared wages must match contracts",
            ],
            "No fee",
            "1 working day",
        ),
        service(
            "hrsd-register",
            "Labor File Registration",
            "Ministry of Human Resources and Social Development",
            "Open the company's labor file, a prerequisite for work visas and employment contracts.",
            &[
                "Commercial registration",
                "National address certificate",
                "Manager appointment letter",
            ],
            &["File must be opened before any work visa is requested"],
            "No fee",
            "1 working day",
        ),
        service(
            "zatca-register",
            "Tax Registration",
            "Zakat, Tax and Customs Authority (ZATCA)",
            "Register the entity for zakat, income tax and VAT as applicable.",
            &["Commercial registration", "Company bank account details"],
            &["VAT registration is mandatory above the revenue threshold"],
            "No fee",
            "Immediate",
        ),
        service(
            "doc-auth",
            "Document Attestation",
            "Saudi Embassy and Ministry of Foreign Affairs",
            "Attest the parent company's incorporation documents for use before Saudi authorities.",
            &[
                "Parent company incorporation documents",
                "Board resolution to establish in the Kingdom",
            ],
            &["Documents must be attested in the country of origin first"],
            "Varies by document",
            "5–10 working days",
        ),
        service(
            "renew-cr",
            "Commercial Registration Renewal",
            "Ministry of Commerce",
            "Renew the commercial registration before its expiry date.",
            &["Current commercial registration", "Paid renewal invoice"],
            &["Renewal must be completed before expiry"],
            "1,200 SAR",
            "Immediate",
        ),
        service(
            "trademark-register",
            "Trademark Registration",
            "Saudi Authority for Intellectual Property (SAIP)",
            "Register and protect the company's trademark across its commercial classes.",
            &[
                "Trademark artwork file",
                "Applicant's commercial registration",
                "List of classes to protect",
            ],
            &[
                "Mark must be distinctive",
                "No conflict with previously registered marks",
            ],
            "6,000 SAR",
            "Around 90 days",
        ),
        service(
            "renew-misa",
            "Investment License Renewal",
            "Ministry of Investment (MISA)",
            "Renew the annual investment license and update the investor's file.",
            &[
                "Current investment license",
                "Latest audited financial statements",
                "Updated commercial registration",
            ],
            &[
                "No outstanding violations on the license",
                "Renewal is annual",
            ],
            "2,000 SAR",
            "1–3 working days",
        ),
        service(
            "investor-visa",
            "Investor Residency Visa",
            "Ministry of Investment and Ministry of Interior",
            "Issue the residency visa that lets the investor reside and manage the business in person.",
            &[
                "Investment license",
                "Passport copy",
                "Medical examination report",
            ],
            &["Investment license must be valid"],
            "2,000 SAR",
            "1–2 weeks",
        ),
        service(
            "work-visa",
            "Work Visas",
            "Ministry of Human Resources (Qiwa)",
            "Request work visas to recruit employees from abroad within the company's quota.",
            &[
                "Commercial registration",
                "Saudization compliance certificate",
                "Employment contracts",
            ],
            &[
                "Visa quota depends on company size and activity",
                "Saudization band must be maintained",
            ],
            "2,400 SAR per visa",
            "1–2 weeks",
        ),
        service(
            "saudization-cert",
            "Saudization Certificate",
            "Ministry of Human Resources (Nitaqat)",
            "Obtain the certificate proving the establishment meets its required Saudization ratio.",
            &["GOSI employee registry", "Wage protection records"],
            &["Required Saudization ratio must be maintained"],
            "No fee",
            "Immediate",
        ),
        service(
            "gosi-compliance",
            "GOSI Compliance Certificate",
            "General Organization for Social Insurance (GOSI)",
            "Certificate confirming the establishment has no overdue social-insurance contributions.",
            &["Paid contributions statement"],
            &["No overdue contributions"],
            "No fee",
            "Immediate",
        ),
        service(
            "tax-return",
            "Tax Return Filing",
            "Zakat, Tax and Customs Authority (ZATCA)",
            "Prepare and file the annual zakat/tax return for the establishment.",
            &["Audited financial statements", "VAT ledgers"],
            &["Filed within 120 days of the fiscal year end"],
            "No fee",
            "1 working day",
        ),
        service(
            "municipal-license",
            "Municipal License",
            "Ministry of Municipalities and Housing (Balady)",
            "License the physical premises for the intended commercial activity.",
            &[
                "Lease contract",
                "Commercial registration",
                "Photos of the shop front",
            ],
            &["Premises must match the licensed activity"],
            "Varies by activity and area",
            "1–5 working days",
        ),
        service(
            "civil-defense-cert",
            "Civil Defense Safety Certificate",
            "General Directorate of Civil Defense",
            "Certify the premises against fire-and-safety requirements before opening.",
            &[
                "Safety plan for the premises",
                "Fire-equipment maintenance contract",
            ],
            &["Premises inspection must be passed"],
            "Varies by premises size",
            "1–2 weeks",
        ),
        service(
            "contract-review",
            "Contract Review and Drafting",
            "Al Turki Law Firm",
            "Review, draft and negotiate commercial contracts under Saudi law.",
            &[
                "Draft contract",
                "Counterparty details",
                "Relevant prior correspondence",
            ],
            &["Arabic version is the binding text before courts"],
            "By engagement",
            "3–7 working days",
        ),
        service(
            "articles-amendment",
            "Articles of Association Amendment",
            "Ministry of Commerce",
            "Amend the company's articles — capital, partners, management or activity.",
            &[
                "Current articles of association",
                "Shareholder resolution approving the amendment",
                "Amended draft",
            ],
            &["Shareholder approval must be notarized"],
            "500 SAR plus notary fees",
            "3–5 working days",
        ),
        service(
            "advanced-tax-consulting",
            "Advanced Tax Advisory",
            "Al Turki Law Firm",
            "Structure the group's zakat, tax and transfer-pricing position with ZATCA liaison.",
            &["Latest tax filings", "Group structure chart"],
            &["Signed engagement letter"],
            "By engagement",
            "Ongoing",
        ),
        service(
            "dispute-resolution",
            "Dispute Resolution and Litigation",
            "Commercial Courts",
            "Represent the company in commercial disputes, arbitration and enforcement.",
            &[
                "Statement of claim",
                "Supporting evidence",
                "Power of attorney",
            ],
            &["Power of attorney must be notarized"],
            "By engagement",
            "Varies by case",
        ),
    ]
}

fn services_ar() -> Vec<Service> {
    vec![
        service(
            "misa-license",
            "رخصة الاستثمار",
            "وزارة الاستثمار",
            "الحصول على رخصة الاستثمار التي تتيح لك تملك وتشغيل نشاطك التجاري في المملكة.",
            &[
                "سجل تجاري موثق للشركة الأم",
                "قوائم مالية مدققة لآخر سنة مالية",
                "صور جوازات سفر الشركاء",
            ],
            &[
                "ألا يقل عمر الشركة الأم عن سنة",
                "أن يكون النشاط متاحًا للاستثمار الأجنبي",
            ],
            "2,000 ريال سنويًا",
            "1–3 أيام عمل",
        ),
        service(
            "cr-issue",
            "إصدار السجل التجاري",
            "وزارة التجارة",
            "إصدار السجل التجاري الذي يمنح شركتك شخصيتها الاعتبارية.",
            &[
                "عقد التأسيس",
                "حجز الاسم التجاري المعتمد",
                "هويات الشركاء",
            ],
            &[
                "حجز الاسم التجاري مسبقًا",
                "مطابقة رأس المال المعلن لعقد التأسيس",
            ],
            "1,200 ريال",
            "يوم عمل واحد",
        ),
        service(
            "franchise-register",
            "قيد الامتياز التجاري",
            "وزارة التجارة",
            "قيد اتفاقية الامتياز في سجل الامتياز التجاري قبل تشغيل العلامة.",
            &[
                "نسخة من اتفاقية الامتياز",
                "وثيقة الإفصاح عن الامتياز",
                "السجل التجاري لمانح الامتياز",
                "وكالة شرعية لمقدم الطلب المحلي",
            ],
            &[
                "قيد الاتفاقية قبل بدء التشغيل",
                "أن يكون مانح الامتياز قد شغل النموذج سنة على الأقل",
            ],
            "1,000 ريال",
            "5 أيام عمل",
        ),
        service(
            "gosi-register",
            "التسجيل في التأمينات الاجتماعية",
            "المؤسسة العامة للتأمينات الاجتماعية",
            "فتح ملف المنشأة في التأمينات الاجتماعية وتسجيل الموظفين.",
            &[
                "السجل التجاري",
                "الآيبان البنكي للشركة",
                "قائمة الموظفين وأجورهم التعاقدية",
            ],
            &[
                "التسجيل خلال 15 يومًا من أول تعيين",
                "مطابقة الأجور المعلنة للعقود",
            ],
            "بدون رسوم",
            "يوم عمل واحد",
        ),
        service(
            "hrsd-register",
            "فتح ملف منشأة في مكتب العمل",
            "وزارة الموارد البشرية والتنمية الاجتماعية",
            "فتح ملف المنشأة العمالي، وهو شرط لإصدار تأشيرات العمل وتوثيق العقود.",
            &[
                "السجل التجاري",
                "شهادة العنوان الوطني",
                "قرار تعيين المدير",
            ],
            &["فتح الملف قبل طلب أي تأشيرة عمل"],
            "بدون رسوم",
            "يوم عمل واحد",
        ),
        service(
            "zatca-register",
            "التسجيل الضريبي",
            "هيئة الزكاة والضريبة والجمارك",
            "تسجيل المنشأة في الزكاة وضريبة الدخل وضريبة القيمة المضافة حسب الحال.",
            &["السجل التجاري", "بيانات الحساب البنكي للشركة"],
            &["التسجيل في ضريبة القيمة المضافة إلزامي فوق حد الإيرادات"],
            "بدون رسوم",
            "فوري",
        ),
        service(
            "doc-auth",
            "تصديق الوثائق",
            "السفارة السعودية ووزارة الخارجية",
            "تصديق وثائق تأسيس الشركة الأم لاعتمادها أمام الجهات السعودية.",
            &[
                "وثائق تأسيس الشركة الأم",
                "قرار مجلس الإدارة بالتأسيس في المملكة",
            ],
            &["تصديق الوثائق في بلد المنشأ أولًا"],
            "حسب الوثيقة",
            "5–10 أيام عمل",
        ),
        service(
            "renew-cr",
            "تجديد السجل التجاري",
            "وزارة التجارة",
            "تجديد السجل التجاري قبل تاريخ انتهائه.",
            &["السجل التجاري الحالي", "فاتورة التجديد المسددة"],
            &["إتمام التجديد قبل الانتهاء"],
            "1,200 ريال",
            "فوري",
        ),
        service(
            "trademark-register",
            "تسجيل العلامة التجارية",
            "الهيئة السعودية للملكية الفكرية",
            "تسجيل العلامة التجارية وحمايتها في فئاتها التجارية.",
            &[
                "ملف شعار العلامة",
                "السجل التجاري لمقدم الطلب",
                "قائمة الفئات المطلوب حمايتها",
            ],
            &[
                "أن تكون العلامة مميزة",
                "عدم التعارض مع علامات مسجلة سابقًا",
            ],
            "6,000 ريال",
            "نحو 90 يومًا",
        ),
        service(
            "renew-misa",
            "تجديد رخصة الاستثمار",
            "وزارة الاستثمار",
            "تجديد رخصة الاستثمار السنوية وتحديث ملف المستثمر.",
            &[
                "رخصة الاستثمار الحالية",
                "أحدث قوائم مالية مدققة",
                "السجل التجاري المحدث",
            ],
            &["خلو الرخصة من المخالفات", "التجديد سنوي"],
            "2,000 ريال",
            "1–3 أيام عمل",
        ),
        service(
            "investor-visa",
            "إقامة مستثمر",
            "وزارة الاستثمار ووزارة الداخلية",
            "إصدار إقامة المستثمر التي تتيح له الإقامة وإدارة نشاطه بنفسه.",
            &[
                "رخصة الاستثمار",
                "صورة جواز السفر",
                "تقرير الفحص الطبي",
            ],
            &["سريان رخصة الاستثمار"],
            "2,000 ريال",
            "1–2 أسبوع",
        ),
        service(
            "work-visa",
            "تأشيرات العمل",
            "وزارة الموارد البشرية (قوى)",
            "طلب تأشيرات عمل لاستقدام الموظفين ضمن حصة المنشأة.",
            &[
                "السجل التجاري",
                "شهادة الالتزام بالسعودة",
                "عقود العمل",
            ],
            &[
                "الحصة حسب حجم المنشأة ونشاطها",
                "المحافظة على نطاق السعودة",
            ],
            "2,400 ريال للتأشيرة",
            "1–2 أسبوع",
        ),
        service(
            "saudization-cert",
            "شهادة السعودة",
            "وزارة الموارد البشرية (نطاقات)",
            "الحصول على شهادة التزام المنشأة بنسبة السعودة المطلوبة.",
            &["سجل موظفي التأمينات", "سجلات حماية الأجور"],
            &["المحافظة على نسبة السعودة المطلوبة"],
            "بدون رسوم",
            "فوري",
        ),
        service(
            "gosi-compliance",
            "شهادة التزام التأمينات",
            "المؤسسة العامة للتأمينات الاجتماعية",
            "شهادة تؤكد خلو المنشأة من اشتراكات تأمينية متأخرة.",
            &["كشف الاشتراكات المسددة"],
            &["عدم وجود اشتراكات متأخرة"],
            "بدون رسوم",
            "فوري",
        ),
        service(
            "tax-return",
            "تقديم الإقرار الضريبي",
            "هيئة الزكاة والضريبة والجمارك",
            "إعداد وتقديم الإقرار الزكوي/الضريبي السنوي للمنشأة.",
            &["القوائم المالية المدققة", "دفاتر ضريبة القيمة المضافة"],
            &["التقديم خلال 120 يومًا من نهاية السنة المالية"],
            "بدون رسوم",
            "يوم عمل واحد",
        ),
        service(
            "municipal-license",
            "الرخصة البلدية",
            "وزارة البلديات والإسكان (بلدي)",
            "ترخيص المقر لمزاولة النشاط التجاري المقصود.",
            &[
                "عقد الإيجار",
                "السجل التجاري",
                "صور لواجهة المحل",
            ],
            &["مطابقة المقر للنشاط المرخص"],
            "حسب النشاط والمساحة",
            "1–5 أيام عمل",
        ),
        service(
            "civil-defense-cert",
            "شهادة سلامة الدفاع المدني",
            "المديرية العامة للدفاع المدني",
            "اعتماد المقر وفق اشتراطات السلامة والحماية من الحريق قبل الافتتاح.",
            &[
                "مخطط السلامة للمقر",
                "عقد صيانة معدات الإطفاء",
            ],
            &["اجتياز معاينة المقر"],
            "حسب مساحة المقر",
            "1–2 أسبوع",
        ),
        service(
            "contract-review",
            "مراجعة العقود وصياغتها",
            "مكتب التركي للمحاماة",
            "مراجعة العقود التجارية وصياغتها والتفاوض عليها وفق النظام السعودي.",
            &[
                "مسودة العقد",
                "بيانات الطرف الآخر",
                "المراسلات السابقة ذات الصلة",
            ],
            &["النسخة العربية هي المعتمدة أمام المحاكم"],
            "حسب الاتفاق",
            "3–7 أيام عمل",
        ),
        service(
            "articles-amendment",
            "تعديل عقد التأسيس",
            "وزارة التجارة",
            "تعديل عقد تأسيس الشركة — رأس المال أو الشركاء أو الإدارة أو النشاط.",
            &[
                "عقد التأسيس الحالي",
                "قرار الشركاء بالموافقة على التعديل",
                "المسودة المعدلة",
            ],
            &["توثيق موافقة الشركاء"],
            "500 ريال مع رسوم التوثيق",
            "3–5 أيام عمل",
        ),
        service(
            "advanced-tax-consulting",
            "استشارات ضريبية متقدمة",
            "مكتب التركي للمحاماة",
            "هيكلة الوضع الزكوي والضريبي وتسعير المعاملات مع التنسيق مع هيئة الزكاة.",
            &["أحدث الإقرارات الضريبية", "هيكل المجموعة"],
            &["توقيع خطاب الارتباط"],
            "حسب الاتفاق",
            "مستمر",
        ),
        service(
            "dispute-resolution",
            "تسوية المنازعات والتقاضي",
            "المحاكم التجارية",
            "تمثيل الشركة في المنازعات التجارية والتحكيم والتنفيذ.",
            &[
                "صحيفة الدعوى",
                "المستندات المؤيدة",
                "وكالة شرعية",
            ],
            &["توثيق الوكالة الشرعية"],
            "حسب الاتفاق",
            "حسب القضية",
        ),
    ]
}
