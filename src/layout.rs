use crate::error::SizeError;
use crate::machine;

/// Widths, in bytes, of the C types the bindings depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub int_size: usize,
    pub uint_size: usize,
    pub ptrdiff_size: usize,
    pub ptr_size: usize,
}

impl Layout {
    pub const HOST: Layout = Layout {
        int_size: machine::INT_SIZE,
        uint_size: machine::UINT_SIZE,
        ptrdiff_size: machine::PTRDIFF_SIZE,
        ptr_size: machine::PTR_SIZE,
    };

    /// Runs the checks in order and stops at the first one that fails.
    pub const fn check(&self) -> Result<(), SizeError> {
        if self.int_size != 4 {
            return Err(SizeError::IntSize(self.int_size));
        }
        if self.uint_size != 4 {
            return Err(SizeError::UintSize(self.uint_size));
        }
        self.check_ptrdiff()
    }

    /// Same checks as `check`, but keeps going and collects every failure.
    pub fn violations(&self) -> Vec<SizeError> {
        let mut result = Vec::new();
        if self.int_size != 4 {
            result.push(SizeError::IntSize(self.int_size));
        }
        if self.uint_size != 4 {
            result.push(SizeError::UintSize(self.uint_size));
        }
        if let Err(e) = self.check_ptrdiff() {
            result.push(e);
        }
        result
    }

    const fn check_ptrdiff(&self) -> Result<(), SizeError> {
        match self.ptr_size {
            4 | 8 => {
                if self.ptrdiff_size == self.ptr_size {
                    Ok(())
                } else {
                    Err(SizeError::PtrdiffSize {
                        ptr_size: self.ptr_size,
                        ptrdiff_size: self.ptrdiff_size,
                    })
                }
            }
            n => Err(SizeError::UnsupportedPointerSize(n)),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        writeln!(f, "{:<16} {:>2}", "int", self.int_size)?;
        writeln!(f, "{:<16} {:>2}", "unsigned int", self.uint_size)?;
        writeln!(f, "{:<16} {:>2}", "ptrdiff_t", self.ptrdiff_size)?;
        write!(f, "{:<16} {:>2}", "void *", self.ptr_size)
    }
}
