use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    Url(url::ParseError),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::Url(e) => write!(f, "URL Error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HtmlParse(_) => None,
            Self::Url(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
