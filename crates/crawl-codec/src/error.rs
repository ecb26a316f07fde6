use crawl_core::CrawlError;

/// Alias for `Result<T, CodecError>`.
pub type CodecResult<T> = Result<T, CodecError>;

/// Everything that can go wrong reading or writing the save format.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input ended early.
    #[error("unexpected end of input: expected {0}")]
    Truncated(&'static str),

    /// The file declares zero rooms, so there is no root.
    #[error("map has no rooms")]
    NoRooms,

    /// An entity line lacks a required field.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A numeric field didn't parse.
    #[error("invalid {field}: \"{text}\"")]
    BadNumber {
        /// Which field was being read.
        field: &'static str,
        /// The offending text.
        text: String,
    },

    /// An entity line starts with a tag nobody recognizes.
    #[error("unknown tag: \"{0}\"")]
    UnknownTag(String),

    /// An entity line was handed to the wrong decoder.
    #[error("expected tag '{expected}', found \"{found}\"")]
    TagMismatch {
        /// The tag the decoder handles.
        expected: char,
        /// The first field actually present.
        found: String,
    },

    /// An exit line doesn't look like `<index> <name>`.
    #[error("malformed exit line: \"{0}\"")]
    MalformedExit(String),

    /// An exit points past the last room.
    #[error("room index {index} out of range (file has {count} rooms)")]
    IndexOutOfRange {
        /// The index found in the file.
        index: usize,
        /// Number of rooms declared.
        count: usize,
    },

    /// Rebuilding an exit broke a room map rule.
    #[error(transparent)]
    Exit(#[from] CrawlError),

    /// More than one explorer or builder in the file.
    #[error("more than one player in the map")]
    MultiplePlayers,

    /// An exit name can't be written without breaking the line format.
    #[error("exit name {0:?} contains a line break")]
    Unencodable(String),

    /// Another error, tagged with the 1-based line it happened on.
    #[error("line {line}: {source}")]
    AtLine {
        /// 1-based line number.
        line: usize,
        /// What went wrong there.
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Attach a line number.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            already @ Self::AtLine { .. } => already,
            other => Self::AtLine {
                line,
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, without line context.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            Self::AtLine { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
