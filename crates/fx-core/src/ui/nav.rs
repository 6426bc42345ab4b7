//! Active-section tracking for the navigation menu.

use fnv::FnvHashMap;

/// Maps observed section ids to navigation link indices and remembers which
/// link is active. A focused link always takes over.
#[derive(Clone, Debug, Default)]
pub struct NavHighlighter {
    index: FnvHashMap<String, usize>,
    active: Option<usize>,
}

impl NavHighlighter {
    /// `sections` pairs each section id with the index of the link pointing
    /// at it. When several links share a section the first one is kept.
    pub fn new<I, K>(sections: I) -> Self
    where
        I: IntoIterator<Item = (K, usize)>,
        K: Into<String>,
    {
        let mut index = FnvHashMap::default();
        for (id, i) in sections {
            index.entry(id.into()).or_insert(i);
        }
        Self {
            index,
            active: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// An observed section crossed the viewport band. Returns the link to
    /// activate, if any.
    pub fn on_intersection(&mut self, section_id: &str, intersecting: bool) -> Option<usize> {
        if !intersecting {
            return None;
        }
        let idx = *self.index.get(section_id)?;
        self.active = Some(idx);
        Some(idx)
    }

    pub fn on_focus(&mut self, link: usize) -> usize {
        self.active = Some(link);
        link
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}
