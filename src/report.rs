use std::io::Write;

use serde::Serialize;

use crate::layout::Layout;

#[derive(Serialize)]
pub struct Report {
    #[serde(rename = "intSize")]
    pub int_size: usize,
    #[serde(rename = "uintSize")]
    pub uint_size: usize,
    #[serde(rename = "ptrdiffSize")]
    pub ptrdiff_size: usize,
    #[serde(rename = "ptrSize")]
    pub ptr_size: usize,
    pub arch: &'static str,
    pub ok: bool,
    pub violations: Vec<String>,
}

impl Report {
    pub fn new(layout: &Layout) -> Self {
        let violations = layout
            .violations()
            .iter()
            .map(|e| e.diagnostic())
            .collect::<Vec<_>>();
        Self {
            int_size: layout.int_size,
            uint_size: layout.uint_size,
            ptrdiff_size: layout.ptrdiff_size,
            ptr_size: layout.ptr_size,
            arch: std::env::consts::ARCH,
            ok: layout.check().is_ok(),
            violations,
        }
    }

    pub fn write_json<W: Write>(&self, w: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer(w, &self)
    }
}
