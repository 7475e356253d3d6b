/// A value produced by evaluation.
///
/// Expressions reduce to one of three shapes: a scalar float, a numeric
/// matrix, or symbolic text when the inputs cannot be reduced to numbers
/// (for example an unbound variable).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit floating-point number.
    Scalar(f64),
    /// A rectangular matrix of 64-bit floats.
    Matrix(Vec<Vec<f64>>),
    /// Symbolic text for an expression that did not reduce to a number.
    Symbolic(String),
}

impl Value {
    /// Returns the scalar payload, or `None` for matrices and symbolic text.
    ///
    /// # Example
    /// ```
    /// use mrog::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Scalar(2.5).as_scalar(), Some(2.5));
    /// assert_eq!(Value::Symbolic("x".to_string()).as_scalar(), None);
    /// ```
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Matrix(_) | Self::Symbolic(_) => None,
        }
    }

    /// Returns `true` when the value is a scalar.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Matrix(rows) => {
                write!(f, "[")?;
                for (i, row) in rows.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "[")?;
                    for (j, cell) in row.iter().enumerate() {
                        if j > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{cell}")?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "]")
            }
            Self::Symbolic(text) => write!(f, "{text}"),
        }
    }
}
