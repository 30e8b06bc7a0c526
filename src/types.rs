use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

/// Canonical show identity; two shows are the same show iff their names match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Show {
    pub name: String,
}

impl Show {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One schedule day as scraped from a day block
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub date: NaiveDate,
    /// Raw show labels in document order, e.g. "Show Title S02E05"
    pub shows: Vec<String>,
}

/// Next future air date per show
pub type ReleaseMap = HashMap<Show, NaiveDate>;

/// Output projection of a (show, date) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    pub title: String,
    pub subtitle: String,
    pub id: String,
}

/// Alfred script filter document
#[derive(Debug, Serialize)]
pub struct AlfredResponse<'a> {
    pub items: Vec<AlfredItem<'a>>,
}

#[derive(Debug, Serialize)]
pub struct AlfredItem<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub arg: &'a str,
    pub icon: AlfredIcon,
}

#[derive(Debug, Serialize)]
pub struct AlfredIcon {
    #[serde(rename = "type")]
    pub icon_type: &'static str,
    pub path: &'static str,
}

impl Default for AlfredIcon {
    fn default() -> Self {
        Self {
            icon_type: "filetype",
            path: "public.png",
        }
    }
}
