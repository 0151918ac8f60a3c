#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RepeatCount {
    /// `{n}`
    Exact(u64),
    /// `{min,max}`, drawn once per render.
    Between { min: u64, max: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node<'a> {
    /// Text copied verbatim into the output.
    Literal { data: &'a str },
    /// The placeholder symbol, a digit in `0..=9`.
    Digit,
    /// `!`, a digit in `2..=9`.
    NonZeroDigit,
    /// `L`, the Luhn check digit over every digit rendered before it.
    Luhn,
    /// `[min-max]`
    Range { min: u64, max: u64 },
    /// A single-character subject followed by `{n}` or `{min,max}`.
    ///
    /// The subject is rendered afresh for every copy.
    Repeat {
        subject: Box<Node<'a>>,
        count: RepeatCount,
    },
}

impl Node<'_> {
    /// Whether a repeat token may directly follow this node.
    pub(crate) fn is_repeatable(&self) -> bool {
        match self {
            Self::Literal { data } => !data.is_empty(),
            Self::Digit | Self::NonZeroDigit => true,
            Self::Luhn | Self::Range { .. } | Self::Repeat { .. } => false,
        }
    }
}
