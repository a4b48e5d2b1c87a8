//! RIS format tags and their definitions.
//!
//! Every recognized tag maps to one [`TagAction`]. The mapping is a table
//! rather than a chain of conditionals; tags missing from it are unknown and
//! get collected verbatim by the record builder.
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

use crate::Citation;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// TY - Type of reference. Must open every record.
pub const TYPE_TAG: &str = "TY";
/// ER - End of reference. Must close every record.
pub const END_TAG: &str = "ER";

/// Declares the scalar tag enum together with the [`Citation`] field each
/// variant fills, so the two can never drift apart.
macro_rules! scalar_tags {
    ($( $(#[$doc:meta])* $variant:ident => $tag:literal, $field:ident; )*) => {
        /// Tags that keep only their first value.
        #[non_exhaustive]
        #[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
        pub enum ScalarTag {
            $( $(#[$doc])* $variant, )*
        }

        impl ScalarTag {
            /// Every scalar tag.
            pub const ALL: &'static [ScalarTag] = &[$( ScalarTag::$variant, )*];

            /// The two letter tag code.
            pub fn as_tag(self) -> &'static str {
                match self {
                    $( ScalarTag::$variant => $tag, )*
                }
            }

            /// Read the field this tag fills.
            pub(crate) fn get(self, citation: &Citation) -> Option<&str> {
                match self {
                    $( ScalarTag::$variant => citation.$field.as_deref(), )*
                }
            }

            /// Mutable access to the field this tag fills.
            pub(crate) fn slot(self, citation: &mut Citation) -> &mut Option<String> {
                match self {
                    $( ScalarTag::$variant => &mut citation.$field, )*
                }
            }
        }
    };
}

scalar_tags! {
    /// AB - Abstract
    Abstract => "AB", abstract_text;
    /// AD - Author address
    AuthorAddress => "AD", author_address;
    /// AN - Accession number
    AccessionNumber => "AN", accession_number;
    /// C1 - Custom 1
    Custom1 => "C1", custom1;
    /// C2 - Custom 2
    Custom2 => "C2", custom2;
    /// C3 - Custom 3
    Custom3 => "C3", custom3;
    /// C4 - Custom 4
    Custom4 => "C4", custom4;
    /// C5 - Custom 5
    Custom5 => "C5", custom5;
    /// C6 - Custom 6
    Custom6 => "C6", custom6;
    /// C7 - Custom 7
    Custom7 => "C7", custom7;
    /// C8 - Custom 8
    Custom8 => "C8", custom8;
    /// CA - Caption
    Caption => "CA", caption;
    /// CN - Call number
    CallNumber => "CN", call_number;
    /// CY - Place published
    PlacePublished => "CY", place_published;
    /// DA - Date
    Date => "DA", date;
    /// DB - Name of database
    DatabaseName => "DB", database_name;
    /// DO - DOI
    Doi => "DO", doi;
    /// DP - Database provider
    DatabaseProvider => "DP", database_provider;
    /// EP - End page
    EndPage => "EP", end_page;
    /// ET - Edition
    Edition => "ET", edition;
    /// IS - Issue number
    Issue => "IS", issue;
    /// J2 - Alternate title
    AlternateTitle => "J2", alternate_title;
    /// LA - Language
    Language => "LA", language;
    /// LB - Label
    Label => "LB", label;
    /// M1 - Number
    Number => "M1", number;
    /// M3 - Type of work
    TypeOfWork => "M3", type_of_work;
    /// N1 - Notes
    Notes => "N1", notes;
    /// NV - Number of volumes
    NumberOfVolumes => "NV", number_of_volumes;
    /// OP - Original publication
    OriginalPublication => "OP", original_publication;
    /// PB - Publisher
    Publisher => "PB", publisher;
    /// PY - Publication year
    Year => "PY", year;
    /// RN - Research notes
    ResearchNotes => "RN", research_notes;
    /// SE - Section
    Section => "SE", section;
    /// SN - ISBN/ISSN
    IsbnIssn => "SN", isbn_issn;
    /// SP - Start page
    StartPage => "SP", start_page;
    /// ST - Short title
    ShortTitle => "ST", short_title;
    /// T2 - Secondary title
    SecondaryTitle => "T2", secondary_title;
    /// T3 - Tertiary title
    TertiaryTitle => "T3", tertiary_title;
    /// TI - Primary title
    Title => "TI", title;
    /// TT - Translated title
    TranslatedTitle => "TT", translated_title;
    /// UR - Web/URL
    Url => "UR", url;
    /// VL - Volume number
    Volume => "VL", volume;
    /// Y2 - Access date
    AccessDate => "Y2", access_date;
}

/// Tags that accumulate every value in file order.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum RepeatableTag {
    /// AU - Author
    Author,
    /// A2 - Secondary author
    SecondaryAuthor,
    /// A3 - Tertiary author
    TertiaryAuthor,
    /// A4 - Subsidiary author
    SubsidiaryAuthor,
    /// KW - Keyword
    Keyword,
}

impl RepeatableTag {
    /// Every repeatable tag.
    pub const ALL: &'static [RepeatableTag] = &[
        RepeatableTag::Author,
        RepeatableTag::SecondaryAuthor,
        RepeatableTag::TertiaryAuthor,
        RepeatableTag::SubsidiaryAuthor,
        RepeatableTag::Keyword,
    ];

    /// The two letter tag code.
    pub fn as_tag(self) -> &'static str {
        match self {
            RepeatableTag::Author => "AU",
            RepeatableTag::SecondaryAuthor => "A2",
            RepeatableTag::TertiaryAuthor => "A3",
            RepeatableTag::SubsidiaryAuthor => "A4",
            RepeatableTag::Keyword => "KW",
        }
    }

    /// Mutable access to the list this tag appends to.
    pub(crate) fn list(self, citation: &mut Citation) -> &mut Vec<String> {
        match self {
            RepeatableTag::Author => &mut citation.authors,
            RepeatableTag::SecondaryAuthor => &mut citation.secondary_authors,
            RepeatableTag::TertiaryAuthor => &mut citation.tertiary_authors,
            RepeatableTag::SubsidiaryAuthor => &mut citation.subsidiary_authors,
            RepeatableTag::Keyword => &mut citation.keywords,
        }
    }
}

/// What the record builder does with a recognized tag.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum TagAction {
    /// Resolve the value as a reference type and store it.
    ResolveType,
    /// Append the value to a list.
    Append(RepeatableTag),
    /// Store the value unless the field already holds one.
    SetIfAbsent(ScalarTag),
    /// Stop reading the record.
    Terminate,
}

static DISPATCH: Lazy<HashMap<&'static str, TagAction>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(ScalarTag::ALL.len() + RepeatableTag::ALL.len() + 2);
    table.insert(TYPE_TAG, TagAction::ResolveType);
    table.insert(END_TAG, TagAction::Terminate);
    for tag in RepeatableTag::ALL {
        table.insert(tag.as_tag(), TagAction::Append(*tag));
    }
    for tag in ScalarTag::ALL {
        table.insert(tag.as_tag(), TagAction::SetIfAbsent(*tag));
    }
    table
});

impl TagAction {
    /// Find the action for a tag code, or `None` if the tag is unknown.
    pub fn lookup(tag: &str) -> Option<TagAction> {
        DISPATCH.get(tag).copied()
    }
}
