use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::category::CategoryKind;
use crate::config::{Config, ConfigError};
use crate::conversion::{history_line, ConversionEngine, ConversionError, IdentityPolicy};
use crate::i18n::{self, Translator};
use crate::session::Session;
use crate::table::ConversionTable;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// 범주 없이 입력된 단위 쌍을 어느 범주에서도 찾지 못함
    #[error("cannot infer a category containing both {from} and {to}; use --category")]
    CannotInferCategory { from: String, to: String },
}

/// 한 번의 변환 요청을 테이블의 범주/단위명으로 정규화한 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub category: String,
    pub from: String,
    pub to: String,
}

/// 별칭(`m`, `kg`, `C`, `mass` 등)을 표준 이름으로 바꾼다.
///
/// 범주가 없으면 두 단위를 모두 포함하는 첫 범주를 고른다. 별칭으로 해석되지 않는
/// 이름은 그대로 두어 엔진이 `UnknownUnit`/`UnknownCategory`를 보고하게 한다.
/// 범주를 추정할 수 없어도 `ShortCircuit` 정책에서 두 단위가 같으면 빈 범주로
/// 통과시켜 엔진이 항등 변환을 하게 한다.
pub fn resolve_request(
    category: Option<&str>,
    from: &str,
    to: &str,
    identity: IdentityPolicy,
) -> Result<ResolvedRequest, AppError> {
    let (kind, category) = match category {
        Some(raw) => {
            let kind = CategoryKind::parse(raw);
            let name = kind.map(CategoryKind::name).unwrap_or(raw);
            (kind, name.to_string())
        }
        None => match CategoryKind::infer(from, to) {
            Some(kind) => (Some(kind), kind.name().to_string()),
            None if from == to && identity == IdentityPolicy::ShortCircuit => {
                return Ok(ResolvedRequest {
                    category: String::new(),
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            None => {
                return Err(AppError::CannotInferCategory {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
        },
    };
    let canonical = |unit: &str| {
        kind.and_then(|k| k.canonical_unit(unit))
            .map(str::to_string)
            .unwrap_or_else(|| unit.to_string())
    };
    Ok(ResolvedRequest {
        category,
        from: canonical(from),
        to: canonical(to),
    })
}

/// 설정의 기본 범주/단위로 세션을 연다. 잘못된 기본값은 경고 후 무시한다.
pub fn open_session(table: &ConversionTable, config: &Config) -> Result<Session, AppError> {
    let mut session = match Session::new(table, &config.default_category) {
        Ok(s) => s,
        Err(e) => {
            warn!(error = %e, "default category ignored");
            let first = table.categories().first().copied().unwrap_or_default().to_string();
            Session::new(table, &first)?
        }
    };
    if let Err(e) = session.set_from(table, &config.default_from) {
        warn!(error = %e, "default from unit ignored");
    }
    if let Err(e) = session.set_to(table, &config.default_to) {
        warn!(error = %e, "default to unit ignored");
    }
    Ok(session
        .with_history_limit(config.history_limit)
        .with_precision(config.precision))
}

/// 단발성 변환을 수행하고 결과 줄과 계산식을 출력한다.
pub fn run_convert(
    config: &Config,
    value: f64,
    from: &str,
    to: &str,
    category: Option<&str>,
) -> Result<(), AppError> {
    let req = resolve_request(category, from, to, config.identity_policy)?;
    let engine = ConversionEngine::default().with_identity_policy(config.identity_policy);
    let result = engine.convert(value, &req.from, &req.to, &req.category)?;
    println!(
        "{}",
        history_line(value, &req.from, &result, &req.to, config.precision)
    );
    println!("{}", result.formula);
    Ok(())
}

/// 범주 목록 또는 한 범주의 단위 목록을 출력한다.
pub fn run_list(category: Option<&str>) -> Result<(), AppError> {
    let table = ConversionTable::standard();
    match category {
        None => {
            for name in table.categories() {
                println!("{name}");
            }
        }
        Some(c) => {
            let name = CategoryKind::parse(c).map(CategoryKind::name).unwrap_or(c);
            for unit in table.units(name)? {
                println!("{unit}");
            }
        }
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    let table = ConversionTable::standard();
    let engine = ConversionEngine::new(table).with_identity_policy(config.identity_policy);
    let mut session = open_session(table, config)?;
    loop {
        ui_cli::print_selection(tr, &session);
        match ui_cli::main_menu(tr)? {
            MenuChoice::Convert => ui_cli::handle_convert(tr, &engine, &mut session)?,
            MenuChoice::Swap => ui_cli::handle_swap(tr, &mut session),
            MenuChoice::Category => ui_cli::handle_category(tr, table, &mut session)?,
            MenuChoice::Units => ui_cli::handle_units(tr, table, &mut session)?,
            MenuChoice::History => ui_cli::handle_history(tr, &session),
            MenuChoice::ClearHistory => {
                session.clear_history();
                println!("{}", tr.t(i18n::keys::HISTORY_CLEARED));
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let lang = i18n::resolve_language(None, Some(&config.language));
                    *tr = Translator::new_with_pack(&lang, None);
                    config.save(config_path)?;
                }
            }
            MenuChoice::About => ui_cli::handle_about(tr),
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
