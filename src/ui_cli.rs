use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::ConversionEngine;
use crate::i18n::{keys, Translator};
use crate::session::Session;
use crate::table::ConversionTable;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Swap,
    Category,
    Units,
    History,
    ClearHistory,
    Settings,
    About,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    for key in [
        keys::MAIN_MENU_CONVERT,
        keys::MAIN_MENU_SWAP,
        keys::MAIN_MENU_CATEGORY,
        keys::MAIN_MENU_UNITS,
        keys::MAIN_MENU_HISTORY,
        keys::MAIN_MENU_CLEAR_HISTORY,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_ABOUT,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Swap),
            "3" => return Ok(MenuChoice::Category),
            "4" => return Ok(MenuChoice::Units),
            "5" => return Ok(MenuChoice::History),
            "6" => return Ok(MenuChoice::ClearHistory),
            "7" => return Ok(MenuChoice::Settings),
            "8" => return Ok(MenuChoice::About),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

pub fn print_selection(tr: &Translator, session: &Session) {
    println!(
        "\n{} [{}] {} → {}",
        tr.t(keys::SELECTION_CURRENT),
        session.category(),
        session.from_unit(),
        session.to_unit()
    );
}

/// 값을 입력받아 변환한다. 변환 실패는 출력만 하고 세션은 계속된다.
pub fn handle_convert(
    tr: &Translator,
    engine: &ConversionEngine<'_>,
    session: &mut Session,
) -> Result<(), AppError> {
    let value = read_f64(tr, tr.t(keys::CONVERT_PROMPT_VALUE))?;
    match session.convert(engine, value) {
        Ok(result) => {
            if let Some(line) = session.recent().next() {
                println!("{} {line}", tr.t(keys::CONVERT_RESULT));
            }
            println!("{} {}", tr.t(keys::CONVERT_FORMULA), result.formula);
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

pub fn handle_swap(tr: &Translator, session: &mut Session) {
    session.swap();
    println!(
        "{} {} → {}",
        tr.t(keys::SWAP_DONE),
        session.from_unit(),
        session.to_unit()
    );
}

/// 범주 선택 메뉴를 처리한다.
pub fn handle_category(
    tr: &Translator,
    table: &ConversionTable,
    session: &mut Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CATEGORY_HEADING));
    let categories = table.categories();
    print_numbered(&categories);
    if let Some(idx) = read_index(tr, tr.t(keys::CATEGORY_PROMPT), categories.len())? {
        session.select_category(table, categories[idx])?;
    }
    Ok(())
}

/// 입력/변환 단위 선택 메뉴를 처리한다. 엔터는 현재 값을 유지한다.
pub fn handle_units(
    tr: &Translator,
    table: &ConversionTable,
    session: &mut Session,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNITS_HEADING));
    let units = table.units(session.category())?;
    print_numbered(&units);
    if let Some(idx) = read_index(tr, tr.t(keys::UNITS_PROMPT_FROM), units.len())? {
        session.set_from(table, units[idx])?;
    }
    if let Some(idx) = read_index(tr, tr.t(keys::UNITS_PROMPT_TO), units.len())? {
        session.set_to(table, units[idx])?;
    }
    Ok(())
}

pub fn handle_history(tr: &Translator, session: &Session) {
    println!("{}", tr.t(keys::HISTORY_HEADING));
    if session.history_len() == 0 {
        println!("{}", tr.t(keys::HISTORY_EMPTY));
        return;
    }
    for entry in session.recent() {
        println!("  {entry}");
    }
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let lang = match sel.trim() {
        "" => return Ok(false),
        "1" => "ko",
        "2" => "en",
        "3" => "auto",
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    };
    cfg.language = lang.to_string();
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(true)
}

/// 개발자 정보 패널.
pub fn handle_about(tr: &Translator) {
    println!("{}", tr.t(keys::ABOUT_HEADING));
    println!("  {}", tr.t(keys::ABOUT_DEVELOPER));
    println!("  {}", tr.t(keys::ABOUT_ROLE));
}

fn print_numbered(items: &[&str]) {
    for (i, item) in items.iter().enumerate() {
        println!("{}) {item}", i + 1);
    }
}

/// 1부터 시작하는 번호를 읽는다. 빈 입력은 None.
fn read_index(tr: &Translator, prompt: &str, len: usize) -> Result<Option<usize>, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<usize>() {
            Ok(n) if (1..=len).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
