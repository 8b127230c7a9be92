pub mod guide;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use guide::{GenerateError, GeneratedGuide, GuideService, GuideSession, RenderedGuide, Source};
pub use io::*;
pub use parsing::{
    BlockNode, InlineNode, ParsedDoc, SourceBlock, inline::tokenize, parse_document, segment,
};
