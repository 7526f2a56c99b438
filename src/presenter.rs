//! Tabular presentation of extracted items.
//!
//! Items are grouped by category in first-seen order. Each column can be
//! copied on its own as newline-joined text.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::patterns;
use crate::result::Item;

/// A table column, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Category,
    Name,
    ImageUrl,
    Description,
    Price,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Category,
        Column::Name,
        Column::ImageUrl,
        Column::Description,
        Column::Price,
    ];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Column::Category => "Category",
            Column::Name => "Name",
            Column::ImageUrl => "Image URL",
            Column::Description => "Description",
            Column::Price => "Price",
        }
    }

    #[must_use]
    pub fn value(self, item: &Item) -> &str {
        match self {
            Column::Category => &item.category,
            Column::Name => &item.name,
            Column::ImageUrl => &item.image_url,
            Column::Description => &item.description,
            Column::Price => &item.price,
        }
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "category" => Ok(Column::Category),
            "name" => Ok(Column::Name),
            "imageurl" | "image" | "url" => Ok(Column::ImageUrl),
            "description" => Ok(Column::Description),
            "price" => Ok(Column::Price),
            other => Err(format!("unknown column: {other}")),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Items of one category, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub category: &'a str,
    pub items: Vec<&'a Item>,
}

/// Items grouped for display.
///
/// Items whose image is one of the platform's decorative icons are left out.
#[derive(Debug, Clone, Default)]
pub struct ItemTable<'a> {
    groups: Vec<Group<'a>>,
}

impl<'a> ItemTable<'a> {
    #[must_use]
    pub fn new(items: &'a [Item]) -> Self {
        let mut groups: Vec<Group<'a>> = Vec::new();

        for item in items.iter().filter(|i| !patterns::is_ignored_image(&i.image_url)) {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(Group {
                    category: &item.category,
                    items: vec![item],
                }),
            }
        }

        Self { groups }
    }

    #[must_use]
    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Displayed items, group by group.
    pub fn rows(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.groups.iter().flat_map(|g| g.items.iter().copied())
    }

    /// Copy payload for one column: its values in display order, one per line.
    #[must_use]
    pub fn column_text(&self, column: Column) -> String {
        self.rows().map(|item| column.value(item)).collect::<Vec<_>>().join("\n")
    }

    /// Plain-text table with aligned columns.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "No items found.".to_string();
        }

        let widths: Vec<usize> = Column::ALL
            .iter()
            .map(|col| {
                self.rows()
                    .map(|item| col.value(item).chars().count())
                    .chain(std::iter::once(col.header().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
        push_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths);

        for item in self.rows() {
            let cells: Vec<&str> = Column::ALL.iter().map(|c| c.value(item)).collect();
            push_line(&mut out, &cells, &widths);
        }
        out
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

/// Every item's image URL, one per line, unfiltered.
#[must_use]
pub fn copy_image_urls(items: &[Item]) -> String {
    items.iter().map(|i| i.image_url.as_str()).collect::<Vec<_>>().join("\n")
}
