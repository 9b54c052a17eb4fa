//! Data type indicators.
//!
//! The letter after the second `:` in a tag classifies the payload. The
//! parser reports the raw letter; this module maps the letters ADIF defines
//! onto [`DataType`]. Nothing here validates payloads.

use phf::phf_map;

/// Payload type named by a data type indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// `B`: `Y` or `N`
    Boolean,
    /// `N`: signed decimal number
    Number,
    /// `D`: `YYYYMMDD`
    Date,
    /// `T`: `HHMM` or `HHMMSS`
    Time,
    /// `S`: ASCII string
    String,
    /// `I`: Unicode string
    IntlString,
    /// `M`: ASCII string with line breaks
    MultilineString,
    /// `G`: Unicode string with line breaks
    IntlMultilineString,
    /// `E`: member of an enumeration
    Enumeration,
    /// `L`: `XDDD MM.MMM` latitude or longitude
    Location,
}

static INDICATORS: phf::Map<char, DataType> = phf_map! {
    'B' => DataType::Boolean,
    'N' => DataType::Number,
    'D' => DataType::Date,
    'T' => DataType::Time,
    'S' => DataType::String,
    'I' => DataType::IntlString,
    'M' => DataType::MultilineString,
    'G' => DataType::IntlMultilineString,
    'E' => DataType::Enumeration,
    'L' => DataType::Location,
};

impl DataType {
    /// Look up an indicator letter. Matching is case-sensitive, so only the
    /// upper-case letters ADIF defines are recognized.
    #[inline]
    pub fn from_indicator(indicator: char) -> Option<DataType> {
        INDICATORS.get(&indicator).copied()
    }

    /// The indicator letter for this type.
    pub fn indicator(self) -> char {
        match self {
            DataType::Boolean => 'B',
            DataType::Number => 'N',
            DataType::Date => 'D',
            DataType::Time => 'T',
            DataType::String => 'S',
            DataType::IntlString => 'I',
            DataType::MultilineString => 'M',
            DataType::IntlMultilineString => 'G',
            DataType::Enumeration => 'E',
            DataType::Location => 'L',
        }
    }

    /// True for the types whose payload may contain line breaks.
    #[inline]
    pub fn is_multiline(self) -> bool {
        matches!(self, DataType::MultilineString | DataType::IntlMultilineString)
    }
}
