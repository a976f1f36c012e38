//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 当前语言同时决定日历预约链接的文案（见 [`Language::booking_template`]）。

use std::sync::atomic::{AtomicUsize, Ordering};

use salon_catalog_core::BookingTemplate;

mod en_us;
mod es_ar;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 英语（美国）
    #[default]
    EnUs,
    /// 西班牙语（阿根廷）
    EsAr,
}

impl Language {
    /// 获取所有支持的语言
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::EsAr]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::EsAr => "Español (Argentina)",
        }
    }

    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::EsAr => "es-AR",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "es-AR" | "es" => Some(Language::EsAr),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        let all = Self::all();
        let index = all.iter().position(|l| *l == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// 该语言对应的预约链接文案
    pub fn booking_template(self) -> BookingTemplate {
        match self {
            Language::EnUs => BookingTemplate::english(),
            Language::EsAr => BookingTemplate::spanish(),
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EnUs

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &es_ar::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    let index = match lang {
        Language::EnUs => 0,
        Language::EsAr => 1,
    };
    CURRENT_LANGUAGE.store(index, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("es"), Some(Language::EsAr));
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(Language::EnUs.next(), Language::EsAr);
        assert_eq!(Language::EsAr.next(), Language::EnUs);
    }

    #[test]
    fn test_booking_template_follows_language() {
        assert_eq!(Language::EsAr.booking_template().title_prefix, "Turno Estética");
        assert_eq!(Language::EnUs.booking_template().title_prefix, "Appointment");
    }
}
