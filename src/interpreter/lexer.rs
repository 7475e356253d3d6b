use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Alphabetic runs are classified in a fixed priority order: trig/hyperbolic
/// names, then math function names, then the `print` builtin, and only then
/// generic identifiers. Logos resolves this through explicit token patterns,
/// which take precedence over the identifier regex at equal match length,
/// while a longer identifier (`sinx`) still wins by maximal munch.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens such as `42`, `3.14` or `12.`.
    /// No sign and no exponent notation; negative values only arise through
    /// the subtraction operator.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    Number(f64),

    /// A trigonometric, hyperbolic or inverse function name.
    #[token("sin", reserved_name)]
    #[token("cos", reserved_name)]
    #[token("tan", reserved_name)]
    #[token("csc", reserved_name)]
    #[token("sec", reserved_name)]
    #[token("cot", reserved_name)]
    #[token("sinh", reserved_name)]
    #[token("cosh", reserved_name)]
    #[token("tanh", reserved_name)]
    #[token("csch", reserved_name)]
    #[token("sech", reserved_name)]
    #[token("coth", reserved_name)]
    #[token("asin", reserved_name)]
    #[token("acos", reserved_name)]
    #[token("atan", reserved_name)]
    #[token("acsc", reserved_name)]
    #[token("asec", reserved_name)]
    #[token("acot", reserved_name)]
    #[token("asinh", reserved_name)]
    #[token("acosh", reserved_name)]
    #[token("atanh", reserved_name)]
    #[token("acsch", reserved_name)]
    #[token("asech", reserved_name)]
    #[token("acoth", reserved_name)]
    TrigFunction(String),

    /// A standard math function name: `sqrt`, `ln`, `abs`, `exp` or `log`.
    #[token("sqrt", reserved_name)]
    #[token("ln", reserved_name)]
    #[token("abs", reserved_name)]
    #[token("exp", reserved_name)]
    #[token("log", reserved_name)]
    MathFunction(String),

    /// The `print` directive keyword.
    #[token("print")]
    Print,

    /// Identifier tokens; user function or variable names such as `x` or `f`.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `!` (factorial)
    #[token("!")]
    Bang,
    /// `'` (derivative marker)
    #[token("'")]
    Prime,
    /// `,`
    #[token(",")]
    Comma,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// `# Comments extend to the end of the line.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    /// Line breaks; statements are one per physical line.
    #[token("\n", |lex| {
        lex.extras.line += 1;
    })]
    NewLine,

    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current 1-based line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Returns the matched reserved name as the token payload.
fn reserved_name(lex: &logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}
