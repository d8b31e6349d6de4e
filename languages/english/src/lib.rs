pub mod definition;
pub mod lemmatizer;
pub mod lexer;
pub mod loader;
pub mod model;
pub mod processor;
pub mod tagger;
pub mod wordlist;

pub use definition::FreeDictionaryApi;
pub use lemmatizer::EnglishLemmatizer;
pub use lexer::EnglishLexer;
pub use loader::{LoadError, WordListLoader};
pub use model::{EnglishModel, Reading};
pub use processor::EnglishProcessor;
pub use tagger::EnglishTagger;
pub use wordlist::WordList;
