use crate::layout::Layout;

pub fn layout(int_size: usize, uint_size: usize, ptrdiff_size: usize, ptr_size: usize) -> Layout {
    Layout {
        int_size,
        uint_size,
        ptrdiff_size,
        ptr_size,
    }
}

pub const LP64: Layout = Layout {
    int_size: 4,
    uint_size: 4,
    ptrdiff_size: 8,
    ptr_size: 8,
};

pub const ILP32: Layout = Layout {
    int_size: 4,
    uint_size: 4,
    ptrdiff_size: 4,
    ptr_size: 4,
};
