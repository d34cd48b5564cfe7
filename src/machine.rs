use std::mem::size_of;

use libc::{c_int, c_uint, c_void, ptrdiff_t};

pub const INT_SIZE: usize = size_of::<c_int>();
pub const UINT_SIZE: usize = size_of::<c_uint>();
// libc defines ptrdiff_t as isize, so on the host this always equals PTR_SIZE.
pub const PTRDIFF_SIZE: usize = size_of::<ptrdiff_t>();
pub const PTR_SIZE: usize = size_of::<*const c_void>();

#[cfg(not(feature = "runtime-only"))]
const_assert!(crate::layout::Layout::HOST.check().is_ok());
