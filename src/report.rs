use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::search::{MatchSet, SearchReport};

const SEPARATOR: &str = "-----------------------------------------------------------------";

/// Console rendering of a [`SearchReport`].
pub struct TextReport<'a>(pub &'a SearchReport);

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let keyword = self.0.keyword();
        if self.0.is_empty() {
            return writeln!(
                f,
                "\nUnfortunately, no dining halls seem to be serving {keyword} :("
            );
        }
        writeln!(f, "{SEPARATOR}")?;
        writeln!(
            f,
            "\nYour desired {keyword} is served today, at the following dining halls: "
        )?;
        for (hall, found) in self.0.matches() {
            writeln!(f, "\n---{}---", hall.name())?;
            for (category, items) in found.iter() {
                writeln!(f, "{category}: ")?;
                for item in items {
                    writeln!(f, " - {item}")?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    keyword: &'a str,
    halls: Vec<JsonHall<'a>>,
}

#[derive(Serialize)]
struct JsonHall<'a> {
    name: &'a str,
    url: &'a str,
    categories: &'a MatchSet,
}

pub fn render_json(report: &SearchReport) -> serde_json::Result<String> {
    let json = JsonReport {
        keyword: report.keyword(),
        halls: report
            .matches()
            .map(|(hall, found)| JsonHall {
                name: hall.name(),
                url: hall.url().as_str(),
                categories: found,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&json)
}
