//! 단위 변환 엔진을 라이브러리로 분리하여 CLI 외의 프런트엔드에서도 재사용한다.

pub mod affine;
pub mod app;
pub mod category;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod session;
pub mod table;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert, ConversionEngine, ConversionError, ConversionResult};
pub use session::Session;
pub use table::ConversionTable;
