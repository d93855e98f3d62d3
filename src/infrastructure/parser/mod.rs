//! Source parsers
//!
//! - `java` - tree-sitter based Java parser
//! - `syntax` - node helpers shared by grammar parsers

mod java;
mod syntax;

pub use java::JavaSourceParser;
