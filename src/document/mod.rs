//! Document assembly: front matter, rendering, TOC placement and the HTML envelope

mod assembler;
pub mod styles;
pub mod template;

pub use assembler::{convert, Assembler};
