//! RIS reference types.
//!
//! The `TY` tag of every record carries one of a fixed set of codes. Unlike
//! ordinary tags, an unrecognized code is an error: a citation without a
//! known kind cannot be built.
//!
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

use crate::{CitationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of work a citation describes.
///
/// Variants carry the name of their RIS code, except `CASE` which maps to
/// [`ReferenceType::CASETYPE`].
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ReferenceType {
    ABST,
    ADVS,
    AGGR,
    ANCIENT,
    ART,
    BILL,
    BLOG,
    BOOK,
    CASETYPE,
    CHAP,
    CHART,
    CLSWK,
    COMP,
    CONF,
    CPAPER,
    CTLG,
    DATA,
    DBASE,
    DICT,
    EBOOK,
    ECHAP,
    EDBOOK,
    EJOUR,
    ELEC,
    ENCYC,
    EQUA,
    FIGURE,
    GEN,
    GOVDOC,
    GRANT,
    HEAR,
    ICOMM,
    INPR,
    JFULL,
    JOUR,
    LEGAL,
    MANSCPT,
    MAP,
    MGZN,
    MPCT,
    MULTI,
    MUSIC,
    NEWS,
    PAMP,
    PAT,
    PCOMM,
    RPRT,
    SER,
    SLIDE,
    SOUND,
    STAND,
    STAT,
    THES,
    UNBILL,
    UNPB,
    VIDEO,
}

/// Code, variant and human label for every reference type.
const REFERENCE_TYPES: &[(&str, ReferenceType, &str)] = &[
    ("ABST", ReferenceType::ABST, "Abstract"),
    ("ADVS", ReferenceType::ADVS, "Audiovisual material"),
    ("AGGR", ReferenceType::AGGR, "Aggregated Database"),
    ("ANCIENT", ReferenceType::ANCIENT, "Ancient Text"),
    ("ART", ReferenceType::ART, "Art Work"),
    ("BILL", ReferenceType::BILL, "Bill"),
    ("BLOG", ReferenceType::BLOG, "Blog"),
    ("BOOK", ReferenceType::BOOK, "Whole book"),
    ("CASE", ReferenceType::CASETYPE, "Case"),
    ("CHAP", ReferenceType::CHAP, "Book chapter"),
    ("CHART", ReferenceType::CHART, "Chart"),
    ("CLSWK", ReferenceType::CLSWK, "Classical Work"),
    ("COMP", ReferenceType::COMP, "Computer program"),
    ("CONF", ReferenceType::CONF, "Conference proceeding"),
    ("CPAPER", ReferenceType::CPAPER, "Conference paper"),
    ("CTLG", ReferenceType::CTLG, "Catalog"),
    ("DATA", ReferenceType::DATA, "Data file"),
    ("DBASE", ReferenceType::DBASE, "Online Database"),
    ("DICT", ReferenceType::DICT, "Dictionary"),
    ("EBOOK", ReferenceType::EBOOK, "Electronic Book"),
    ("ECHAP", ReferenceType::ECHAP, "Electronic Book Section"),
    ("EDBOOK", ReferenceType::EDBOOK, "Edited Book"),
    ("EJOUR", ReferenceType::EJOUR, "Electronic Article"),
    ("ELEC", ReferenceType::ELEC, "Electronic Citation"),
    ("ENCYC", ReferenceType::ENCYC, "Encyclopedia"),
    ("EQUA", ReferenceType::EQUA, "Equation"),
    ("FIGURE", ReferenceType::FIGURE, "Figure"),
    ("GEN", ReferenceType::GEN, "Generic"),
    ("GOVDOC", ReferenceType::GOVDOC, "Government Document"),
    ("GRANT", ReferenceType::GRANT, "Grant"),
    ("HEAR", ReferenceType::HEAR, "Hearing"),
    ("ICOMM", ReferenceType::ICOMM, "Internet Communication"),
    ("INPR", ReferenceType::INPR, "In Press"),
    ("JFULL", ReferenceType::JFULL, "Journal (full)"),
    ("JOUR", ReferenceType::JOUR, "Journal"),
    ("LEGAL", ReferenceType::LEGAL, "Legal Rule or Regulation"),
    ("MANSCPT", ReferenceType::MANSCPT, "Manuscript"),
    ("MAP", ReferenceType::MAP, "Map"),
    ("MGZN", ReferenceType::MGZN, "Magazine article"),
    ("MPCT", ReferenceType::MPCT, "Motion picture"),
    ("MULTI", ReferenceType::MULTI, "Online Multimedia"),
    ("MUSIC", ReferenceType::MUSIC, "Music score"),
    ("NEWS", ReferenceType::NEWS, "Newspaper"),
    ("PAMP", ReferenceType::PAMP, "Pamphlet"),
    ("PAT", ReferenceType::PAT, "Patent"),
    ("PCOMM", ReferenceType::PCOMM, "Personal communication"),
    ("RPRT", ReferenceType::RPRT, "Report"),
    ("SER", ReferenceType::SER, "Serial publication"),
    ("SLIDE", ReferenceType::SLIDE, "Slide"),
    ("SOUND", ReferenceType::SOUND, "Sound recording"),
    ("STAND", ReferenceType::STAND, "Standard"),
    ("STAT", ReferenceType::STAT, "Statute"),
    ("THES", ReferenceType::THES, "Thesis/Dissertation"),
    ("UNBILL", ReferenceType::UNBILL, "Unenacted Bill"),
    ("UNPB", ReferenceType::UNPB, "Unpublished work"),
    ("VIDEO", ReferenceType::VIDEO, "Video recording"),
];

impl ReferenceType {
    /// Every reference type, in code order.
    pub const ALL: [ReferenceType; 56] = {
        let mut all = [ReferenceType::ABST; 56];
        let mut i = 0;
        while i < REFERENCE_TYPES.len() {
            all[i] = REFERENCE_TYPES[i].1;
            i += 1;
        }
        all
    };

    /// Look up a type by its exact RIS code.
    ///
    /// Matching is case-sensitive and the input is not trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use risparse::ReferenceType;
    /// assert_eq!(ReferenceType::from_code("CASE"), Some(ReferenceType::CASETYPE));
    /// assert_eq!(ReferenceType::from_code("jour"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        REFERENCE_TYPES
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(_, ty, _)| *ty)
    }

    /// Like [`ReferenceType::from_code`], but an unknown code is an error.
    pub fn resolve(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| CitationError::UnknownReferenceType(code.to_string()))
    }

    /// The RIS code for this type.
    pub fn code(self) -> &'static str {
        self.entry().0
    }

    /// A human readable name for this type.
    pub fn description(self) -> &'static str {
        self.entry().2
    }

    fn entry(self) -> &'static (&'static str, ReferenceType, &'static str) {
        // Table rows are declared in variant order.
        &REFERENCE_TYPES[self as usize]
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ReferenceType {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl TryFrom<String> for ReferenceType {
    type Error = CitationError;

    fn try_from(value: String) -> Result<Self> {
        Self::resolve(&value)
    }
}

impl From<ReferenceType> for &'static str {
    fn from(value: ReferenceType) -> Self {
        value.code()
    }
}
