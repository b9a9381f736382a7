use crate::refs::{ObjectReferences, RefType};
use chrono::{Datelike, NaiveDateTime, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// The PDF info dictionary: who the résumé belongs to and which template drew it
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// Keywords for the document, comma separated
    pub keywords: Option<String>,
    /// When the document was generated. Left out of the PDF when [None], which
    /// keeps repeated renders byte-identical.
    pub creation_date: Option<NaiveDateTime>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the keywords of the info block, modifying `self`
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Stamp the info block with a generation time, modifying `self`
    pub fn creation_date(&mut self, date: NaiveDateTime) -> &mut Self {
        self.creation_date = Some(date);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        if let Some(when) = self.creation_date {
            let date = PDate::new(when.year() as u16)
                .month(when.month() as u8)
                .day(when.day() as u8)
                .hour(when.hour() as u8)
                .minute(when.minute() as u8)
                .second(when.second() as u8)
                .utc_offset_hour(0)
                .utc_offset_minute(0);
            info.creation_date(date);
        }
    }
}
