use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Interface language. Arabic is rendered right-to-left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// Parse a stored language key; anything but `ar` is English.
    pub fn from_key(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ar" => Language::Ar,
            _ => Language::En,
        }
    }

    /// Value for the document `dir` attribute.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    /// The language's own name, used on the toggle button.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// A bilingual text value as stored by the backend: `{ "en": .., "ar": .. }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
            extra: Map::new(),
        }
    }

    /// Same extra keys as `self`, new text.
    pub fn with_text(&self, en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
            extra: self.extra.clone(),
        }
    }

    /// Text in `lang`, falling back to the other language when blank.
    pub fn get(&self, lang: Language) -> &str {
        let (preferred, fallback) = match lang {
            Language::En => (&self.en, &self.ar),
            Language::Ar => (&self.ar, &self.en),
        };
        if preferred.trim().is_empty() {
            fallback
        } else {
            preferred
        }
    }

    pub fn is_blank(&self) -> bool {
        self.en.trim().is_empty() && self.ar.trim().is_empty()
    }
}

// (key, english, arabic)
static TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("app.name", "Monitor 360", "مونيتور 360"),
    ("nav.home", "Home", "الرئيسية"),
    ("nav.dashboard", "Dashboard", "لوحة التحكم"),
    ("nav.cases", "Cases", "القضايا"),
    ("nav.manage_cases", "Manage Cases", "إدارة القضايا"),
    ("nav.create_case", "Create Case", "إنشاء قضية"),
    ("nav.reports", "Reports", "التقارير"),
    ("nav.review_reports", "Review Reports", "مراجعة التقارير"),
    ("nav.case_types", "Case Types", "أنواع القضايا"),
    ("nav.statistics", "Statistics", "الإحصائيات"),
    ("nav.submit_report", "Submit Report", "تقديم بلاغ"),
    ("nav.profile", "Profile", "الملف الشخصي"),
    ("nav.login", "Login", "تسجيل الدخول"),
    ("nav.logout", "Logout", "تسجيل الخروج"),
    ("common.loading", "Loading...", "جار التحميل..."),
    ("common.save", "Save", "حفظ"),
    ("common.cancel", "Cancel", "إلغاء"),
    ("common.submit", "Submit", "إرسال"),
    ("common.search", "Search", "بحث"),
    ("common.all", "All", "الكل"),
    ("common.retry", "Retry", "إعادة المحاولة"),
    ("common.back", "Back", "رجوع"),
    ("common.no_results", "No results found.", "لا توجد نتائج."),
    ("common.sort", "Sort by", "ترتيب حسب"),
    ("common.newest", "Newest first", "الأحدث أولاً"),
    ("common.oldest", "Oldest first", "الأقدم أولاً"),
    ("common.case_id", "Case ID", "رقم القضية"),
    ("login.title", "Sign in", "تسجيل الدخول"),
    ("login.username", "Username", "اسم المستخدم"),
    ("login.password", "Password", "كلمة المرور"),
    ("login.submit", "Login", "دخول"),
    ("login.failed", "Login failed", "فشل تسجيل الدخول"),
    ("case.title", "Title", "العنوان"),
    ("case.title_en", "Title (English)", "العنوان (إنجليزي)"),
    ("case.title_ar", "Title (Arabic)", "العنوان (عربي)"),
    ("case.description_en", "Description (English)", "الوصف (إنجليزي)"),
    ("case.description_ar", "Description (Arabic)", "الوصف (عربي)"),
    ("case.description", "Description", "الوصف"),
    ("case.status", "Status", "الحالة"),
    ("case.priority", "Priority", "الأولوية"),
    ("case.country_en", "Country (English)", "الدولة (إنجليزي)"),
    ("case.country_ar", "Country (Arabic)", "الدولة (عربي)"),
    ("case.region_en", "Region (English)", "المنطقة (إنجليزي)"),
    ("case.region_ar", "Region (Arabic)", "المنطقة (عربي)"),
    ("case.region", "Region", "المنطقة"),
    ("case.location", "Location", "الموقع"),
    ("case.latitude", "Latitude", "خط العرض"),
    ("case.longitude", "Longitude", "خط الطول"),
    ("case.date_occurred", "Date occurred", "تاريخ الوقوع"),
    ("case.date_reported", "Date reported", "تاريخ الإبلاغ"),
    ("case.violation_types", "Violation types", "أنواع الانتهاكات"),
    ("case.evidence", "Evidence", "الأدلة"),
    ("case.archive", "Archive", "أرشفة"),
    ("case.unarchive", "Unarchive", "إلغاء الأرشفة"),
    ("case.edit", "Edit", "تعديل"),
    ("case.view", "View", "عرض"),
    ("case.select", "Report on this case", "الإبلاغ عن هذه القضية"),
    ("case.updated", "Case updated", "تم تحديث القضية"),
    ("case.created", "Case created", "تم إنشاء القضية"),
    ("report.title", "Submit a report", "تقديم بلاغ"),
    ("report.anonymous", "Submit anonymously", "إرسال دون الكشف عن الهوية"),
    ("report.pseudonym", "Pseudonym", "اسم مستعار"),
    ("report.reporter_type", "Reporter type", "نوع المبلغ"),
    ("report.victim", "Victim", "ضحية"),
    ("report.witness", "Witness", "شاهد"),
    ("report.email", "Email", "البريد الإلكتروني"),
    ("report.phone", "Phone", "الهاتف"),
    ("report.preferred_contact", "Preferred contact", "وسيلة التواصل المفضلة"),
    ("report.date", "Incident date", "تاريخ الحادثة"),
    ("report.location", "Location", "الموقع"),
    ("report.description", "What happened?", "ماذا حدث؟"),
    ("report.violation_types", "Violation types", "أنواع الانتهاكات"),
    ("report.other", "Other", "أخرى"),
    ("report.suggested_case_name", "Suggested violation type", "نوع الانتهاك المقترح"),
    ("report.evidence", "Evidence files (up to 5)", "ملفات الأدلة (حتى 5)"),
    ("report.submit", "Submit report", "إرسال البلاغ"),
    ("report.success", "Report submitted successfully", "تم إرسال البلاغ بنجاح"),
    ("report.approve", "Approve", "قبول"),
    ("report.reject", "Reject", "رفض"),
    ("report.comment", "Rejection comment", "سبب الرفض"),
    ("report.pending", "Pending reports", "البلاغات المعلقة"),
    ("report.list", "Reports", "البلاغات"),
    ("report.start_date", "From", "من"),
    ("report.end_date", "To", "إلى"),
    ("status.new", "New", "جديدة"),
    ("status.under_investigation", "Under investigation", "قيد التحقيق"),
    ("status.resolved", "Resolved", "محلولة"),
    ("status.archived", "Archived", "مؤرشفة"),
    ("status.approved", "Approved", "مقبول"),
    ("status.rejected", "Rejected", "مرفوض"),
    ("priority.low", "Low", "منخفضة"),
    ("priority.medium", "Medium", "متوسطة"),
    ("priority.high", "High", "عالية"),
    ("welcome.admin", "Welcome, administrator", "مرحباً أيها المسؤول"),
    ("welcome.institution", "Welcome to your institution portal", "مرحباً بك في بوابة المؤسسة"),
    ("welcome.investigator", "Welcome, investigator", "مرحباً أيها المحقق"),
    ("welcome.investigator_subtitle", "Review and investigate reported cases", "مراجعة القضايا المبلغ عنها والتحقيق فيها"),
    ("home.tagline", "Documenting human rights violations, together.", "نوثق انتهاكات حقوق الإنسان معاً."),
    ("profile.title", "Institution profile", "ملف المؤسسة"),
    ("profile.name_en", "Institution name (English)", "اسم المؤسسة (إنجليزي)"),
    ("profile.name_ar", "Institution name (Arabic)", "اسم المؤسسة (عربي)"),
    ("profile.username", "Username", "اسم المستخدم"),
    ("profile.active", "Active", "نشط"),
    ("profile.inactive", "Inactive", "غير نشط"),
    ("profile.email", "Email", "البريد الإلكتروني"),
    ("profile.phone", "Phone", "الهاتف"),
    ("profile.website", "Website", "الموقع الإلكتروني"),
    ("profile.address_en", "Address (English)", "العنوان (إنجليزي)"),
    ("profile.address_ar", "Address (Arabic)", "العنوان (عربي)"),
    ("profile.saved", "Profile updated", "تم تحديث الملف"),
    ("case_type.title", "Case type suggestions", "اقتراحات أنواع القضايا"),
    ("case_type.suggest", "Suggest a violation type", "اقتراح نوع انتهاك"),
    ("case_type.name", "Name", "الاسم"),
    ("case_type.submitted", "Suggestion submitted for review", "تم إرسال الاقتراح للمراجعة"),
    ("stats.total_reports", "Total reports", "إجمالي البلاغات"),
    ("stats.total_cases", "Total cases", "إجمالي القضايا"),
    ("stats.by_status", "By status", "حسب الحالة"),
    ("stats.by_violation", "By violation type", "حسب نوع الانتهاك"),
    ("not_found.title", "Page not found", "الصفحة غير موجودة"),
];

/// Translate a UI key. Unknown keys are returned unchanged so a missing
/// entry shows up on screen instead of vanishing.
pub fn t(lang: Language, key: &'static str) -> &'static str {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, ar)| match lang {
            Language::En => *en,
            Language::Ar => *ar,
        })
        .unwrap_or(key)
}
