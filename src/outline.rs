use pdf_writer::{Finish, Pdf, TextStr};

use crate::refs::{ObjectReferences, RefType};

/// A flat list of bookmarks, written as the PDF document outline
#[derive(Default, Debug, Clone)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub page_index: usize,
    pub title: String,
    /// Distance from the bottom of the page (PDF space) that the reader
    /// scrolls to
    pub top: f32,
}

impl Outline {
    pub fn add_bookmark(&mut self, page_index: usize, title: String, top: f32) {
        self.entries.push(OutlineEntry {
            page_index,
            title,
            top,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        if self.entries.is_empty() {
            return;
        }

        // generate IDs for everything
        let outlines_id = refs.gen(RefType::Outlines);
        let entry_ids: Vec<_> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(entry_ids[0]);
        outline.last(entry_ids[entry_ids.len() - 1]);
        outline.count(entry_ids.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let Some(page_id) = refs.get(RefType::Page(entry.page_index)) else {
                log::warn!("bookmark `{}` points at a missing page", entry.title);
                continue;
            };
            let mut item = writer.outline_item(entry_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(entry_ids[i - 1]);
            }
            if i + 1 < entry_ids.len() {
                item.next(entry_ids[i + 1]);
            }
            item.dest().page(page_id).xyz(0.0, entry.top, None);
        }
    }
}
