quick_error! {
    /// Reasons why a single sentence did not yield a value.
    ///
    /// None of these are fatal. A caller reading a mixed NMEA stream will
    /// see `UnsupportedSentenceType` for most lines and should skip them.
    #[derive(Debug, Clone, PartialEq)]
    pub enum ParseError {
        UnsupportedSentenceType {
            description("Unsupported sentence type")
            display("Sentence type is not supported by this parser")
        }
        /// Index of the first required field that is missing and the number
        /// of fields the sentence actually has.
        MalformedSentence(index: usize, len: usize) {
            description("Malformed sentence")
            display("Field {} is out of range for a sentence with {} fields", index, len)
        }
        /// The named field is present but empty, i.e. the receiver has no
        /// value for it right now.
        MissingValue(field: &'static str) {
            description("Missing value")
            display("Field {} is empty", field)
        }
        InvalidNumber(field: &'static str, value: String) {
            description("Invalid number")
            display("Field {} holds \"{}\" which is not a decimal number", field, value)
        }
    }
}
