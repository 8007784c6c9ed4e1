mod data;
mod engine;
mod restrictions;
mod results;

pub use data::read_word_list;
pub use data::Lexicon;
pub use data::ListVariant;
pub use data::ScoredWord;
pub use engine::*;
pub use restrictions::WordRestrictions;
pub use results::*;
