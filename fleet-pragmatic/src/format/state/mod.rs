//! Specifies logic to read fleet state from json input and write it back.

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;
