//! Draws viewable objects into a terminal window.

use crate::count::KeywordCount;
use itertools::Itertools;

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self) -> String;
}

impl Viewable for Vec<String> {
    /// Renders a list of post titles, one per line.
    fn view(&self) -> String {
        self.join("\n")
    }
}

impl Viewable for Vec<KeywordCount> {
    /// Renders keyword counts as `keyword: count` lines.
    fn view(&self) -> String {
        self.iter()
            .map(|(keyword, count)| format!("{keyword}: {count}"))
            .join("\n")
    }
}
