//! UI strings in both portal languages.
//!
//! Record names come from the API already localized; this table only covers
//! the chrome around them (buttons, headers, prompts).

use contracts::shared::Language;

const STRINGS: &[(&str, &str, &str)] = &[
    // common actions
    ("new", "New", "جديد"),
    ("refresh", "Refresh", "تحديث"),
    ("delete", "Delete", "حذف"),
    ("save", "Save", "حفظ"),
    ("cancel", "Cancel", "إلغاء"),
    ("close", "Close", "إغلاق"),
    ("search", "Search", "بحث"),
    ("expand_all", "Expand all", "توسيع الكل"),
    ("collapse_all", "Collapse all", "طي الكل"),
    ("confirm_delete", "Delete the selected records?", "حذف السجلات المحددة؟"),
    ("confirm_delete_node", "Delete this node?", "حذف هذا العنصر؟"),
    ("no_records", "No records", "لا توجد سجلات"),
    ("editing", "Edit", "تعديل"),
    // columns and fields
    ("code", "Code", "الرمز"),
    ("name_en", "Name (English)", "الاسم (الإنجليزية)"),
    ("name_ar", "Name (Arabic)", "الاسم (العربية)"),
    ("name", "Name", "الاسم"),
    ("status", "Status", "الحالة"),
    ("active", "Active", "نشط"),
    ("inactive", "Inactive", "غير نشط"),
    ("created", "Created", "تاريخ الإنشاء"),
    ("parent", "Parent", "العنصر الأب"),
    ("email", "Email", "البريد الإلكتروني"),
    ("staff_role", "Role", "الدور"),
    ("no_parent", "(top level)", "(المستوى الأعلى)"),
    // pagination
    ("first_page", "First page", "الصفحة الأولى"),
    ("previous_page", "Previous page", "الصفحة السابقة"),
    ("next_page", "Next page", "الصفحة التالية"),
    ("last_page", "Last page", "الصفحة الأخيرة"),
    // navigation
    ("menu_references", "Reference data", "البيانات المرجعية"),
    ("menu_account", "Account", "الحساب"),
    ("toggle_sidebar", "Toggle navigation", "إظهار/إخفاء القائمة"),
    ("toggle_panel", "Toggle notifications panel", "إظهار/إخفاء لوحة الإشعارات"),
    ("app_title", "Business admin", "إدارة الأعمال"),
    // notifications
    ("notifications", "Notifications", "الإشعارات"),
    ("mark_all_read", "Mark all as read", "تحديد الكل كمقروء"),
    ("no_notifications", "You are all caught up", "لا توجد إشعارات جديدة"),
    // account lifecycle
    ("account_lifecycle", "Account status", "حالة الحساب"),
    ("deactivate", "Deactivate account", "تعطيل الحساب"),
    ("reactivate", "Reactivate account", "إعادة تفعيل الحساب"),
    ("transfer", "Transfer account", "تحويل الحساب"),
    ("insighter", "Insighter", "خبير"),
    ("company", "Company", "شركة"),
    ("reason", "Reason", "السبب"),
    ("attachment", "Attachment (optional)", "مرفق (اختياري)"),
    ("submit", "Submit", "إرسال"),
    ("retry", "Try again", "حاول مرة أخرى"),
    ("start_over", "Start over", "البدء من جديد"),
    ("request_sent", "Your request has been sent", "تم إرسال طلبك"),
    ("request_failed", "Your request could not be sent", "تعذر إرسال طلبك"),
    ("role", "Account type", "نوع الحساب"),
    ("transfer_to", "The account will become", "سيصبح الحساب"),
    ("step_reason", "1. Reason", "١. السبب"),
    ("step_result", "2. Result", "٢. النتيجة"),
    // payment account
    ("payment_account", "Payment account", "حساب الدفع"),
    ("stripe_account", "Stripe account", "حساب Stripe"),
    ("manual_account", "Bank account", "الحساب البنكي"),
    ("not_configured", "No payment account configured", "لم يتم إعداد حساب دفع"),
    ("charges_enabled", "Charges enabled", "المدفوعات مفعلة"),
    ("payouts_enabled", "Payouts enabled", "التحويلات مفعلة"),
    ("account_id", "Account ID", "معرف الحساب"),
    ("country", "Country", "الدولة"),
    ("account_holder", "Account holder", "صاحب الحساب"),
    ("bank_name", "Bank", "البنك"),
    ("iban", "IBAN", "رقم الآيبان"),
    ("swift", "SWIFT", "رمز السويفت"),
    ("yes", "Yes", "نعم"),
    ("no", "No", "لا"),
    // profile
    ("profile_photo", "Profile photo", "الصورة الشخصية"),
    ("upload", "Upload", "رفع"),
    ("uploaded", "Photo updated", "تم تحديث الصورة"),
];

/// Translated UI string; unknown keys come back unchanged
pub fn t(lang: Language, key: &'static str) -> &'static str {
    STRINGS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, ar)| match lang {
            Language::En => *en,
            Language::Ar => *ar,
        })
        .unwrap_or(key)
}
