//! Catalog content: promotional items and the sections that present them.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// A displayable unit of catalog content (book, universe or print).
///
/// Items carry no identity beyond their position in a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoItem {
    /// Image reference, passed through to the renderer unchecked
    pub image: String,
    /// Short display title
    pub title: String,
    /// One or two sentence description
    pub subtitle: String,
    /// Classification label shown as a badge ("Novel", "Universe", ...)
    pub category: String,
}

impl PromoItem {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            category: category.into(),
        }
    }

    /// Name of the first required field that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("title")
        } else if self.category.trim().is_empty() {
            Some("category")
        } else {
            None
        }
    }
}

/// Responsive column scheme for a section grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridLayout {
    /// 1 / 2 / 3 columns as the viewport widens
    #[default]
    Triptych,
    /// 1 / 2 columns, for wide feature cards
    Diptych,
}

impl GridLayout {
    /// CSS class for the grid container
    pub fn class(&self) -> &'static str {
        match self {
            GridLayout::Triptych => "story-grid story-grid--triptych",
            GridLayout::Diptych => "story-grid story-grid--diptych",
        }
    }

    /// Layout modifier applied to every card in the grid
    pub fn card_modifier(&self) -> Option<&'static str> {
        match self {
            GridLayout::Triptych => None,
            GridLayout::Diptych => Some("story-card--wide"),
        }
    }
}

/// Extra panel appended after a section's item grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionTrailer {
    /// Descriptive text with a call-to-action link
    Description {
        text: String,
        link_label: String,
        link_href: String,
    },
    /// Dashed placeholder card announcing future entries
    ComingSoon { label: String },
}

impl SectionTrailer {
    /// Short name used in listings and logs
    pub fn kind(&self) -> &'static str {
        match self {
            SectionTrailer::Description { .. } => "description",
            SectionTrailer::ComingSoon { .. } => "coming_soon",
        }
    }
}

/// A named, anchored page region presenting one category of items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// In-page anchor id
    pub id: String,
    /// Ordinal label shown above the heading ("01 — Publications")
    pub label: String,
    pub heading: String,
    #[serde(default)]
    pub layout: GridLayout,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<PromoItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailer: Option<SectionTrailer>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        heading: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            heading: heading.into(),
            layout: GridLayout::default(),
            items: Vec::new(),
            trailer: None,
        }
    }

    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_items(mut self, items: Vec<PromoItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_trailer(mut self, trailer: SectionTrailer) -> Self {
        self.trailer = Some(trailer);
        self
    }

    /// Check that every item can be rendered.
    pub fn validate(&self) -> SiteResult<()> {
        for (index, item) in self.items.iter().enumerate() {
            if let Some(field) = item.missing_field() {
                return Err(SiteError::EmptyItemField {
                    section: self.id.clone(),
                    index,
                    field,
                });
            }
        }
        Ok(())
    }
}
