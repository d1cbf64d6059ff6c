mod classifier;
mod doctype;
pub mod entities;
mod keyword;

pub use self::classifier::KeywordFlags;
pub use self::doctype::DocType;
pub use self::keyword::Keyword;
