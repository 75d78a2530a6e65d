//! Scripted events replayed against a cascader.

use std::fmt;
use std::str::FromStr;

use cascader::OptionId;

/// One host event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open,
    Close,
    Toggle,
    Reset,
    /// `tab:LEVEL`
    Tab(usize),
    /// `select:LEVEL:ID`
    Select(usize, OptionId),
    /// `value:ID,ID,...`
    Value(Vec<OptionId>),
}

#[derive(Debug, thiserror::Error)]
pub enum EventParseError {
    #[error("Unknown event '{0}' (expected open, close, toggle, reset, tab:L, select:L:ID, value:IDS)")]
    Unknown(String),

    #[error("Invalid level '{0}' in event")]
    Level(String),
}

fn parse_level(s: &str) -> Result<usize, EventParseError> {
    s.parse()
        .map_err(|_| EventParseError::Level(s.to_string()))
}

/// Parse a comma-separated id list. Empty input is the empty list.
pub fn parse_ids(s: &str) -> Vec<OptionId> {
    s.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(OptionId::parse)
        .collect()
}

impl FromStr for Event {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None => match s {
                "open" => Ok(Event::Open),
                "close" => Ok(Event::Close),
                "toggle" => Ok(Event::Toggle),
                "reset" => Ok(Event::Reset),
                _ => Err(EventParseError::Unknown(s.to_string())),
            },
            Some(("tab", level)) => Ok(Event::Tab(parse_level(level)?)),
            Some(("value", ids)) => Ok(Event::Value(parse_ids(ids))),
            Some(("select", rest)) => {
                let (level, id) = rest
                    .split_once(':')
                    .ok_or_else(|| EventParseError::Unknown(s.to_string()))?;
                Ok(Event::Select(parse_level(level)?, OptionId::parse(id)))
            }
            Some(_) => Err(EventParseError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Open => f.write_str("open"),
            Event::Close => f.write_str("close"),
            Event::Toggle => f.write_str("toggle"),
            Event::Reset => f.write_str("reset"),
            Event::Tab(level) => write!(f, "tab:{}", level),
            Event::Select(level, id) => write!(f, "select:{}:{}", level, id),
            Event::Value(ids) => {
                let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "value:{}", ids.join(","))
            }
        }
    }
}
