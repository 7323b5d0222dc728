//! Pages on writing content: page functions, headings, and code samples.

pub mod headings;
pub mod pages;
pub mod samples;
