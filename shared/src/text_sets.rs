use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== TEXT SET TYPES =====

pub type CategoryId = String;

/// One text element of a text set, in page data units (see `units::PAGE_WIDTH`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    #[serde(default = "default_font_weight")]
    pub font_weight: u32,
}

fn default_font_weight() -> u32 {
    400
}

/// A predefined group of text elements offered for insertion into a page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextSet {
    pub id: String,
    pub elements: Vec<TextElement>,
}

/// Category id -> text sets, in catalog order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct TextSetCatalog {
    pub categories: IndexMap<CategoryId, Vec<TextSet>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub id: CategoryId,
    pub label: String,
}

// ===== ERRORS =====

#[derive(Debug)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed
    Parse(serde_json::Error),
    /// Two text sets share the same id
    DuplicateId { id: String, category: CategoryId },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(error) => write!(f, "invalid text set catalog: {error}"),
            CatalogError::DuplicateId { id, category } => {
                write!(f, "duplicate text set id '{id}' in category '{category}'")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(error) => Some(error),
            CatalogError::DuplicateId { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Parse(error)
    }
}

// ===== CATALOG =====

impl TextSetCatalog {
    pub fn new(categories: IndexMap<CategoryId, Vec<TextSet>>) -> Self {
        Self { categories }
    }

    /// Parse the bundled JSON catalog and reject duplicate text set ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: TextSetCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for (category, text_sets) in &self.categories {
            for text_set in text_sets {
                if !seen.insert(text_set.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        id: text_set.id.clone(),
                        category: category.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|text_sets| text_sets.is_empty())
    }

    /// Category pills in catalog order.
    pub fn category_options(&self) -> Vec<CategoryOption> {
        self.categories
            .keys()
            .map(|id| CategoryOption {
                id: id.clone(),
                label: category_label(id).to_string(),
            })
            .collect()
    }

    /// Every text set, category order first, then order within the category.
    pub fn all_items(&self) -> Vec<TextSet> {
        self.categories.values().flatten().cloned().collect()
    }

    /// `all_items` narrowed to `selected_category` when one is set.
    pub fn visible_items(&self, selected_category: Option<&str>) -> Vec<TextSet> {
        match selected_category {
            Some(category) => self
                .categories
                .get(category)
                .cloned()
                .unwrap_or_default(),
            None => self.all_items(),
        }
    }
}

/// Display label for a category id; unknown ids are shown as-is.
pub fn category_label(id: &str) -> &str {
    match id {
        "cover" => "Cover",
        "step" => "Steps",
        "section_header" => "Section",
        "editorial" => "Editorial",
        "contact" => "Contact",
        "table" => "Table",
        "list" => "List",
        "quote" => "Quote",
        other => other,
    }
}

// ===== ROW PAIRING =====

pub const ITEMS_PER_ROW: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TextSetRow<'a> {
    pub index: usize,
    pub first: &'a TextSet,
    pub second: Option<&'a TextSet>,
}

impl TextSetRow<'_> {
    /// Flat index of the row's first item.
    pub fn first_item_index(&self) -> usize {
        self.index * ITEMS_PER_ROW
    }
}

pub fn row_count(item_count: usize) -> usize {
    item_count.div_ceil(ITEMS_PER_ROW)
}

/// Row `index` of `items`, or `None` past the last row.
pub fn row_at(items: &[TextSet], index: usize) -> Option<TextSetRow<'_>> {
    let start = index.checked_mul(ITEMS_PER_ROW)?;
    let first = items.get(start)?;
    Some(TextSetRow {
        index,
        first,
        second: items.get(start + 1),
    })
}

pub fn pair_rows(items: &[TextSet]) -> impl Iterator<Item = TextSetRow<'_>> {
    items
        .chunks(ITEMS_PER_ROW)
        .enumerate()
        .map(|(index, chunk)| TextSetRow {
            index,
            first: &chunk[0],
            second: chunk.get(1),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_set(id: &str) -> TextSet {
        TextSet {
            id: id.to_string(),
            elements: Vec::new(),
        }
    }

    fn catalog(entries: &[(&str, &[&str])]) -> TextSetCatalog {
        TextSetCatalog::new(
            entries
                .iter()
                .map(|(category, ids)| {
                    (category.to_string(), ids.iter().map(|id| text_set(id)).collect())
                })
                .collect(),
        )
    }

    fn ids(items: &[TextSet]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_flattening_and_filtering_scenario() {
        let catalog = catalog(&[("a", &["t1", "t2", "t3"]), ("b", &["t4"])]);

        let all = catalog.visible_items(None);
        assert_eq!(ids(&all), vec!["t1", "t2", "t3", "t4"]);

        let rows: Vec<_> = pair_rows(&all).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].first.id, "t1");
        assert_eq!(rows[0].second.map(|t| t.id.as_str()), Some("t2"));
        assert_eq!(rows[1].first.id, "t3");
        assert_eq!(rows[1].second.map(|t| t.id.as_str()), Some("t4"));

        let only_b = catalog.visible_items(Some("b"));
        let rows: Vec<_> = pair_rows(&only_b).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first.id, "t4");
        assert!(rows[0].second.is_none());
    }

    #[test]
    fn test_deselect_restores_original_order() {
        let catalog = catalog(&[("quote", &["q1", "q2"]), ("cover", &["c1"]), ("list", &["l1", "l2"])]);
        let before = catalog.visible_items(None);
        let _selected = catalog.visible_items(Some("cover"));
        let after = catalog.visible_items(None);
        assert_eq!(before, after);
        assert_eq!(ids(&after), vec!["q1", "q2", "c1", "l1", "l2"]);
    }

    #[test]
    fn test_row_count_and_slots() {
        for n in 0..9 {
            let items: Vec<TextSet> = (0..n).map(|i| text_set(&format!("t{i}"))).collect();
            let rows: Vec<_> = pair_rows(&items).collect();
            assert_eq!(rows.len(), row_count(n));
            assert_eq!(row_count(n), (n + 1) / 2);
            for row in &rows {
                assert_eq!(row.first.id, items[2 * row.index].id);
                assert_eq!(row.second.map(|t| &t.id), items.get(2 * row.index + 1).map(|t| &t.id));
                assert_eq!(Some(row), row_at(&items, row.index).as_ref());
            }
            assert!(row_at(&items, rows.len()).is_none());
        }
    }

    #[test]
    fn test_odd_count_leaves_last_slot_empty() {
        let items: Vec<TextSet> = (0..5).map(|i| text_set(&format!("t{i}"))).collect();
        let last = row_at(&items, 2).unwrap();
        assert_eq!(last.first.id, "t4");
        assert!(last.second.is_none());
        assert_eq!(last.first_item_index(), 4);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = TextSetCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.category_options().is_empty());
        assert!(catalog.visible_items(None).is_empty());
        assert_eq!(pair_rows(&catalog.visible_items(None)).count(), 0);
    }

    #[test]
    fn test_unknown_category_selection_is_empty() {
        let catalog = catalog(&[("a", &["t1"])]);
        assert!(catalog.visible_items(Some("missing")).is_empty());
    }

    #[test]
    fn test_category_labels() {
        let catalog = catalog(&[("section_header", &[]), ("step", &[]), ("custom_kind", &[])]);
        let labels: Vec<_> = catalog
            .category_options()
            .into_iter()
            .map(|option| option.label)
            .collect();
        assert_eq!(labels, vec!["Section", "Steps", "custom_kind"]);
    }

    #[test]
    fn test_catalog_json_keeps_category_order() {
        let json = r#"{
            "quote": [{ "id": "q1", "elements": [
                { "content": "Hi", "x": 10, "y": 20, "width": 100, "height": 30, "font_size": 24 }
            ] }],
            "cover": [{ "id": "c1", "elements": [] }]
        }"#;
        let catalog = TextSetCatalog::from_json(json).unwrap();
        let keys: Vec<_> = catalog.categories.keys().cloned().collect();
        assert_eq!(keys, vec!["quote", "cover"]);
        assert_eq!(catalog.categories["quote"][0].elements[0].font_weight, 400);
    }

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let json = r#"{ "a": [{ "id": "x", "elements": [] }], "b": [{ "id": "x", "elements": [] }] }"#;
        match TextSetCatalog::from_json(json) {
            Err(CatalogError::DuplicateId { id, category }) => {
                assert_eq!(id, "x");
                assert_eq!(category, "b");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn test_catalog_parse_error() {
        let result = TextSetCatalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
