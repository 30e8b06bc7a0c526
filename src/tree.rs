use scraper::{ElementRef, Html, Selector};

use crate::error::ScheduleError;

/// Structural roles the day-block parser asks the document about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Day,
    Date,
    Title,
}

/// Read-only view of a parsed listings document
pub trait MarkupTree {
    type Node<'a>: Copy
    where
        Self: 'a;

    /// All nodes carrying `marker`, in document order
    fn find_all(&self, marker: Marker) -> Vec<Self::Node<'_>>;

    /// Descendants of `node` carrying `marker`, in document order
    fn find_within<'a>(&'a self, node: Self::Node<'a>, marker: Marker) -> Vec<Self::Node<'a>>;

    /// Concatenated text content of `node`
    fn text<'a>(&'a self, node: Self::Node<'a>) -> String;
}

/// CSS selectors identifying each [`Marker`] in airdates.tv markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub day: String,
    pub date: String,
    pub title: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            day: ".day".to_string(),
            date: ".date".to_string(),
            title: ".title".to_string(),
        }
    }
}

/// [`MarkupTree`] over an HTML document parsed with `scraper`
pub struct HtmlTree {
    document: Html,
    day: Selector,
    date: Selector,
    title: Selector,
}

impl HtmlTree {
    pub fn parse(html: &str, markers: &Markers) -> Result<Self, ScheduleError> {
        Ok(Self {
            document: Html::parse_document(html),
            day: compile(&markers.day)?,
            date: compile(&markers.date)?,
            title: compile(&markers.title)?,
        })
    }

    fn selector(&self, marker: Marker) -> &Selector {
        match marker {
            Marker::Day => &self.day,
            Marker::Date => &self.date,
            Marker::Title => &self.title,
        }
    }
}

fn compile(selector: &str) -> Result<Selector, ScheduleError> {
    Selector::parse(selector).map_err(|e| ScheduleError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

impl MarkupTree for HtmlTree {
    type Node<'a> = ElementRef<'a>;

    fn find_all(&self, marker: Marker) -> Vec<ElementRef<'_>> {
        self.document.select(self.selector(marker)).collect()
    }

    fn find_within<'a>(&'a self, node: ElementRef<'a>, marker: Marker) -> Vec<ElementRef<'a>> {
        node.select(self.selector(marker)).collect()
    }

    fn text<'a>(&'a self, node: ElementRef<'a>) -> String {
        node.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><body>
        <div class="day"><div class="date">Mon, 02 Jan</div>
            <div class="title">Foo <b>9:00pm</b></div>
        </div>
        <div class="day"><div class="date">Tue, 03 Jan</div></div>
    </body></html>"#;

    #[test]
    fn test_find_all_in_document_order() {
        let tree = HtmlTree::parse(HTML, &Markers::default()).unwrap();
        let days = tree.find_all(Marker::Day);
        assert_eq!(days.len(), 2);

        let dates: Vec<String> = days
            .iter()
            .flat_map(|day| tree.find_within(*day, Marker::Date))
            .map(|node| tree.text(node))
            .collect();
        assert_eq!(dates, vec!["Mon, 02 Jan", "Tue, 03 Jan"]);
    }

    #[test]
    fn test_text_includes_nested_elements() {
        let tree = HtmlTree::parse(HTML, &Markers::default()).unwrap();
        let titles = tree.find_all(Marker::Title);
        assert_eq!(titles.len(), 1);
        assert_eq!(tree.text(titles[0]), "Foo 9:00pm");
    }

    #[test]
    fn test_invalid_selector() {
        let markers = Markers {
            day: "div[".to_string(),
            ..Markers::default()
        };
        let result = HtmlTree::parse(HTML, &markers);
        assert!(matches!(result, Err(ScheduleError::Selector { ref selector, .. }) if selector == "div["));
    }
}
