use tracing::debug;

use crate::airdate::resolve;
use crate::error::ScheduleError;
use crate::tree::{Marker, MarkupTree};
use crate::types::DayEntry;

/// Extract day entries from a listings document
///
/// # Arguments
/// * `tree` - Parsed document
/// * `year` - Year implied by the year-less dates in the listing
///
/// # Returns
/// One entry per day block in document order, or the first date that
/// failed to resolve
pub fn parse_days<T: MarkupTree>(tree: &T, year: i32) -> Result<Vec<DayEntry>, ScheduleError> {
    let blocks = tree.find_all(Marker::Day);
    let mut days = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.into_iter().enumerate() {
        let date_text = block_date_text(tree, block);
        let date = resolve(&date_text, year).map_err(|e| e.in_block(index))?;

        let shows: Vec<String> = tree
            .find_within(block, Marker::Title)
            .into_iter()
            .map(|node| tree.text(node))
            .collect();

        debug!(block = index, %date, shows = shows.len(), "parsed day block");
        days.push(DayEntry { date, shows });
    }

    Ok(days)
}

/// Date label of a block with the stray period of the source format removed
fn block_date_text<'a, T: MarkupTree>(tree: &'a T, block: T::Node<'a>) -> String {
    let raw: String = tree
        .find_within(block, Marker::Date)
        .into_iter()
        .map(|node| tree.text(node))
        .collect();
    raw.replacen('.', "", 1).trim().to_string()
}
