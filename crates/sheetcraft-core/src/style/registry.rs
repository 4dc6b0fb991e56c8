//! Workbook-wide style store

use std::hash::{Hash, Hasher};

use ahash::AHashMap;

use super::{
    Alignment, BorderLineStyle, CellStyle, FontStyle, HorizontalAlignment, StyleId,
    VerticalAlignment,
};

/// Store of the styles created for a workbook
///
/// Every call to [`StyleRegistry::register`] appends a new entry, even when an
/// equal style already exists; callers that want sharing look one up first
/// with [`StyleRegistry::find`].
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: Vec<CellStyle>,
    /// Hash of a style to every id holding an equal-hashing style
    by_hash: AHashMap<u64, Vec<u32>>,
}

fn style_hash(style: &CellStyle) -> u64 {
    let mut hasher = ahash::AHasher::default();
    style.hash(&mut hasher);
    hasher.finish()
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style and return its id
    pub fn register(&mut self, style: CellStyle) -> StyleId {
        let idx = self.styles.len() as u32;
        self.by_hash.entry(style_hash(&style)).or_default().push(idx);
        self.styles.push(style);
        StyleId(idx)
    }

    /// Build a style from font, alignment and an optional all-edges border
    pub fn create(
        &mut self,
        font: FontStyle,
        alignment: Alignment,
        border: Option<BorderLineStyle>,
    ) -> StyleId {
        self.register(CellStyle::from_parts(font, alignment, border))
    }

    /// Bold font, thin borders on all edges, centered and wrapped
    pub fn bold_with_all_borders(&mut self, font_name: &str, font_size: f64) -> StyleId {
        self.preset(font_name, font_size, true, HorizontalAlignment::Center, true)
    }

    /// Regular font, thin borders on all edges, centered and wrapped
    pub fn regular_with_all_borders(&mut self, font_name: &str, font_size: f64) -> StyleId {
        self.preset(font_name, font_size, false, HorizontalAlignment::Center, true)
    }

    /// Bold font, no borders, centered and wrapped
    pub fn bold_without_borders(&mut self, font_name: &str, font_size: f64) -> StyleId {
        self.preset(font_name, font_size, true, HorizontalAlignment::Center, false)
    }

    /// Bold font, no borders, left-aligned, vertically centered and wrapped
    pub fn bold_left_without_borders(&mut self, font_name: &str, font_size: f64) -> StyleId {
        self.preset(font_name, font_size, true, HorizontalAlignment::Left, false)
    }

    fn preset(
        &mut self,
        font_name: &str,
        font_size: f64,
        bold: bool,
        horizontal: HorizontalAlignment,
        borders: bool,
    ) -> StyleId {
        self.create(
            FontStyle::named(font_name, font_size).with_bold(bold),
            Alignment::new(horizontal, VerticalAlignment::Center, true),
            borders.then_some(BorderLineStyle::Thin),
        )
    }

    /// Get a style by id
    pub fn get(&self, id: StyleId) -> Option<&CellStyle> {
        self.styles.get(id.0 as usize)
    }

    /// Whether `id` was issued by this registry
    pub fn contains(&self, id: StyleId) -> bool {
        (id.0 as usize) < self.styles.len()
    }

    /// First registered style equal to `style`
    pub fn find(&self, style: &CellStyle) -> Option<StyleId> {
        self.by_hash
            .get(&style_hash(style))?
            .iter()
            .copied()
            .find(|&idx| self.styles[idx as usize] == *style)
            .map(StyleId)
    }

    /// Get the number of styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no style was registered
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Iterate over all styles with their ids
    pub fn iter(&self) -> impl Iterator<Item = (StyleId, &CellStyle)> {
        self.styles
            .iter()
            .enumerate()
            .map(|(i, s)| (StyleId(i as u32), s))
    }
}
