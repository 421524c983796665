use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_SWAP: &str = "main_menu.swap";
    pub const MAIN_MENU_CATEGORY: &str = "main_menu.category";
    pub const MAIN_MENU_UNITS: &str = "main_menu.units";
    pub const MAIN_MENU_HISTORY: &str = "main_menu.history";
    pub const MAIN_MENU_CLEAR_HISTORY: &str = "main_menu.clear_history";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_ABOUT: &str = "main_menu.about";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SELECTION_CURRENT: &str = "selection.current";
    pub const CONVERT_PROMPT_VALUE: &str = "convert.prompt_value";
    pub const CONVERT_RESULT: &str = "convert.result";
    pub const CONVERT_FORMULA: &str = "convert.formula";
    pub const SWAP_DONE: &str = "swap.done";

    pub const CATEGORY_HEADING: &str = "category.heading";
    pub const CATEGORY_PROMPT: &str = "category.prompt";
    pub const UNITS_HEADING: &str = "units.heading";
    pub const UNITS_PROMPT_FROM: &str = "units.prompt_from";
    pub const UNITS_PROMPT_TO: &str = "units.prompt_to";

    pub const HISTORY_HEADING: &str = "history.heading";
    pub const HISTORY_EMPTY: &str = "history.empty";
    pub const HISTORY_CLEARED: &str = "history.cleared";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ABOUT_HEADING: &str = "about.heading";
    pub const ABOUT_DEVELOPER: &str = "about.developer";
    pub const ABOUT_ROLE: &str = "about.role";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 영어 번역이 없으면 한국어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션/키로 구성된 문자열 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content)?;
    debug!(path = %path.display(), entries = map.len(), "language pack loaded");
    Some(map)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 단위 변환기 ===",
        MAIN_MENU_CONVERT => "1) 변환",
        MAIN_MENU_SWAP => "2) 단위 맞바꾸기",
        MAIN_MENU_CATEGORY => "3) 범주 선택",
        MAIN_MENU_UNITS => "4) 단위 선택",
        MAIN_MENU_HISTORY => "5) 변환 기록",
        MAIN_MENU_CLEAR_HISTORY => "6) 기록 지우기",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_ABOUT => "8) 개발자 정보",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        SELECTION_CURRENT => "현재 선택:",
        CONVERT_PROMPT_VALUE => "값 입력: ",
        CONVERT_RESULT => "변환 결과:",
        CONVERT_FORMULA => "계산식:",
        SWAP_DONE => "단위를 맞바꿨습니다:",
        CATEGORY_HEADING => "\n-- 범주 --",
        CATEGORY_PROMPT => "범주 번호 입력: ",
        UNITS_HEADING => "\n-- 단위 --",
        UNITS_PROMPT_FROM => "입력 단위 번호 (엔터=유지): ",
        UNITS_PROMPT_TO => "변환 단위 번호 (엔터=유지): ",
        HISTORY_HEADING => "\n-- 변환 기록 (최근 순) --",
        HISTORY_EMPTY => "기록이 없습니다.",
        HISTORY_CLEARED => "기록을 지웠습니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) 시스템 설정 따름",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        ABOUT_HEADING => "\n-- 개발자 --",
        ABOUT_DEVELOPER => "Ibrahim Tayyab (Tayyab.R)",
        ABOUT_ROLE => "단위 변환 전문가",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Unit Converter ===",
        MAIN_MENU_CONVERT => "1) Convert",
        MAIN_MENU_SWAP => "2) Swap units",
        MAIN_MENU_CATEGORY => "3) Choose category",
        MAIN_MENU_UNITS => "4) Choose units",
        MAIN_MENU_HISTORY => "5) Conversion history",
        MAIN_MENU_CLEAR_HISTORY => "6) Clear history",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_ABOUT => "8) About the developer",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SELECTION_CURRENT => "Current selection:",
        CONVERT_PROMPT_VALUE => "Value: ",
        CONVERT_RESULT => "Result:",
        CONVERT_FORMULA => "Formula:",
        SWAP_DONE => "Units swapped:",
        CATEGORY_HEADING => "\n-- Category --",
        CATEGORY_PROMPT => "Category number: ",
        UNITS_HEADING => "\n-- Units --",
        UNITS_PROMPT_FROM => "From unit number (enter to keep): ",
        UNITS_PROMPT_TO => "To unit number (enter to keep): ",
        HISTORY_HEADING => "\n-- Conversion history (newest first) --",
        HISTORY_EMPTY => "No conversions yet.",
        HISTORY_CLEARED => "History cleared.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) 한국어  2) English  3) Follow system",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        ABOUT_HEADING => "\n-- Developer --",
        ABOUT_DEVELOPER => "Ibrahim Tayyab (Tayyab.R)",
        ABOUT_ROLE => "Unit Conversion Expert",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-us")), "en");
    }

    #[test]
    fn english_lookup_and_fallback() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
        let ko = Translator::new("ko");
        assert_eq!(ko.t(keys::ERROR_PREFIX), "오류");
    }

    #[test]
    fn nested_pack_is_flattened() {
        let map = parse_toml_to_map("[general]\nerror_prefix = \"Fehler\"\n").unwrap();
        assert_eq!(map.get(keys::ERROR_PREFIX).map(String::as_str), Some("Fehler"));
    }
}
