use std::fmt::Formatter;

/// A platform assumption the bindings rely on does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeError {
    IntSize(usize),
    UintSize(usize),
    PtrdiffSize { ptr_size: usize, ptrdiff_size: usize },
    UnsupportedPointerSize(usize),
}

impl SizeError {
    /// The C condition that failed, as it would read in an `assert`.
    pub fn condition(&self) -> &'static str {
        match self {
            SizeError::IntSize(_) => "sizeof (int) == 4",
            SizeError::UintSize(_) => "sizeof (unsigned int) == 4",
            SizeError::PtrdiffSize { ptr_size: 4, .. } => "sizeof (ptrdiff_t) == 4",
            SizeError::PtrdiffSize { .. } => "sizeof (ptrdiff_t) == 8",
            SizeError::UnsupportedPointerSize(_) => "0",
        }
    }

    /// `<condition> (<message>)`, the one form every output uses.
    pub fn diagnostic(&self) -> String {
        format!("{} ({})", self.condition(), self)
    }
}

impl std::fmt::Display for SizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            SizeError::IntSize(n) => write!(f, "int is {} bytes, expected 4", n),
            SizeError::UintSize(n) => write!(f, "unsigned int is {} bytes, expected 4", n),
            SizeError::PtrdiffSize {
                ptr_size,
                ptrdiff_size,
            } => write!(
                f,
                "ptrdiff_t is {} bytes with {}-byte pointers, expected {}",
                ptrdiff_size, ptr_size, ptr_size
            ),
            SizeError::UnsupportedPointerSize(n) => {
                write!(f, "unsupported pointer size: {} bytes", n)
            }
        }
    }
}
