use std::borrow::Cow;

use url::Url;

use crate::parse::{Error, Result};

/// (locationNum, locationName as the site spells it, display name)
const REGISTRY: [(&str, &str, &str); 5] = [
    (
        "40",
        "College Nine/John R. Lewis Dining Hall",
        "John R. Lewis & College Nine Dining Hall",
    ),
    (
        "05",
        "Cowell/Stevenson Dining Hall",
        "Cowell & Stevenson Dining Hall",
    ),
    ("20", "Crown/Merrill Dining Hall", "Crown & Merrill Dining Hall"),
    ("25", "Porter/Kresge Dining Hall", "Porter & Kresge Dining Hall"),
    (
        "30",
        "Rachel Carson/Oakes Dining Hall",
        "Rachel Carson & Oakes Dining Hall",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiningHall {
    name: String,
    url: Url,
}

impl DiningHall {
    pub fn new(name: impl Into<String>, url: Url) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }

    /// Builds a hall from a short menu url, named after its `locationName` query parameter.
    pub fn from_url(url: Url) -> Result<Self> {
        let name = url
            .query_pairs()
            .find(|x| x.0 == "locationName")
            .ok_or_else(|| {
                Error::html_parse_error(
                    "Location url does not include the `locationName` query parameter",
                )
            })?
            .1
            .into_owned();
        Ok(Self { name, url })
    }

    /// A hall linked from the location listing. Registry halls keep their
    /// display name, others are named after `locationName` or the link text.
    pub fn from_listing(url: Url, link_text: &str) -> Self {
        let registered = url
            .query_pairs()
            .find(|x| x.0 == "locationNum")
            .and_then(|(_, id)| REGISTRY.iter().find(|(num, _, _)| *num == id))
            .map(|(_, _, name)| *name);
        match registered {
            Some(name) => Self::new(name, url),
            None => Self::from_url(url.clone()).unwrap_or_else(|_| Self::new(link_text, url)),
        }
    }

    /// The residential dining halls, with short menu urls relative to `base`.
    pub fn registry(base: &Url) -> Result<Vec<Self>> {
        let page = base.join("shortmenu.aspx")?;
        Ok(REGISTRY
            .iter()
            .map(|(id, location_name, name)| {
                let mut url = page.clone();
                url.query_pairs_mut()
                    .append_pair("sName", "UC Santa Cruz Dining")
                    .append_pair("locationNum", id)
                    .append_pair("locationName", location_name)
                    .append_pair("naFlag", "1");
                Self::new(*name, url)
            })
            .collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The site's `locationNum` for this hall, ex. 40 for College Nine/John R. Lewis.
    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.url
            .query_pairs()
            .find(|x| x.0 == "locationNum")
            .map(|x| x.1)
    }
}
