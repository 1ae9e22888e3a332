use std::env;

use chrono::NaiveDate;
use url::Url;

use crate::error::Error;

pub const DEFAULT_BASE_URL: &str = "https://nutrition.sa.ucsc.edu/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Landing page, location listing and base of the hall registry.
    pub base_url: Url,
    pub user_agent: String,
    /// `None` lets the site pick today's menu.
    pub date: Option<NaiveDate>,
    pub discover: bool,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let base_url = lookup("MENU_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url)
            .map_err(|e| Error::config_error(format!("MENU_BASE_URL {base_url:?}: {e}")))?;

        let user_agent =
            lookup("MENU_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let date = lookup("MENU_DATE")
            .map(|d| {
                NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d").map_err(|e| {
                    Error::config_error(format!("MENU_DATE {d:?} is not YYYY-MM-DD: {e}"))
                })
            })
            .transpose()?;

        let discover = match lookup("MENU_DISCOVER").as_deref().map(str::trim) {
            None | Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(other) => {
                return Err(Error::config_error(format!(
                    "MENU_DISCOVER {other:?} should be true or false"
                )))
            }
        };

        let output = match lookup("MENU_OUTPUT").as_deref().map(str::trim) {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(Error::config_error(format!(
                    "MENU_OUTPUT {other:?} should be text or json"
                )))
            }
        };

        Ok(Self {
            base_url,
            user_agent,
            date,
            discover,
            output,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url should be valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            date: None,
            discover: true,
            output: OutputFormat::Text,
        }
    }
}
