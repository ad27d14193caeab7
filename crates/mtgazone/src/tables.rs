// ABOUTME: Parses the MTGAZone metagame page, one table per format, into deck name -> link mappings.
// ABOUTME: Skips the leading placeholder table and header rows; "Decks" cells become absolute URLs.

use dom_query::{Document, Selection};
use mtgscrape_deck::{DeckError, Links, Result};

use crate::options::{resolve_link, TableOptions};
use crate::selectors::{ANCHOR, DATA_CELL, HEADER_CELL, ROW, TABLE};

/// Text of the cell that links to a deck page.
const DECKS_CELL: &str = "Decks";
/// Column holding the deck name.
const NAME_FIELD: usize = 3;
/// Column holding the deck link.
const LINK_FIELD: usize = 5;

/// Collects deck links from the combined metagame page.
#[derive(Debug, Clone, Default)]
pub struct TableLinkCollector {
    opts: TableOptions,
}

impl TableLinkCollector {
    pub fn new(opts: TableOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &TableOptions {
        &self.opts
    }

    /// Returns the links of the first format table.
    pub fn collect(&self, html: &str) -> Result<Links> {
        let document = Document::from(html);
        let tables = document.select_matcher(&TABLE);
        let first = tables
            .iter()
            .nth(1)
            .ok_or_else(|| DeckError::malformed("no metagame table after the placeholder"))?;
        self.table_links(&first)
    }

    /// Returns the links of every format table, in document order.
    pub fn collect_formats(&self, html: &str) -> Result<Vec<Links>> {
        let document = Document::from(html);
        let formats = document
            .select_matcher(&TABLE)
            .iter()
            .skip(1)
            .map(|table| self.table_links(&table))
            .collect::<Result<Vec<_>>>()?;
        if formats.is_empty() {
            return Err(DeckError::malformed("no metagame table after the placeholder"));
        }
        Ok(formats)
    }

    fn table_links(&self, table: &Selection) -> Result<Links> {
        let mut links = Links::new();
        for record in self.table_records(table)? {
            if record.len() <= LINK_FIELD {
                return Err(DeckError::malformed(format!(
                    "metagame row has {} fields, expected at least {}",
                    record.len(),
                    LINK_FIELD + 1
                )));
            }
            let mut fields = record.into_iter();
            let name = fields.nth(NAME_FIELD).unwrap_or_default();
            let link = fields.nth(LINK_FIELD - NAME_FIELD - 1).unwrap_or_default();
            links.insert(name, link);
        }
        Ok(links)
    }

    /// Cell values of every data row; a "Decks" cell holds its resolved link.
    fn table_records(&self, table: &Selection) -> Result<Vec<Vec<String>>> {
        let mut records = Vec::new();
        for row in table.select_matcher(&ROW).iter() {
            if row.select_matcher(&HEADER_CELL).exists() {
                continue;
            }
            let cells = row.select_matcher(&DATA_CELL);
            if !cells.exists() {
                continue;
            }

            let mut record = Vec::new();
            for cell in cells.iter() {
                let text = cell.text();
                let text = text.trim();
                if text == DECKS_CELL {
                    let href = cell.select_matcher(&ANCHOR).attr("href").ok_or_else(|| {
                        DeckError::malformed("\"Decks\" cell without a link")
                    })?;
                    record.push(resolve_link(&self.opts.origin, &href)?);
                } else {
                    record.push(text.to_string());
                }
            }
            records.push(record);
        }
        Ok(records)
    }
}

/// Links of the first format table, resolved against the MTGAZone origin.
pub fn collect_links(html: &str) -> Result<Links> {
    TableLinkCollector::default().collect(html)
}

/// Links of every format table, resolved against the MTGAZone origin.
pub fn collect_format_tables(html: &str) -> Result<Vec<Links>> {
    TableLinkCollector::default().collect_formats(html)
}
