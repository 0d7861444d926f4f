//! Parser layer
//! - ini.rs: INI version file parser

pub mod ini;

pub use ini::{IniDocument, IniParser, ParseError};
