pub mod annotate;
pub mod article;
pub mod error;
pub mod language;
pub mod lemma;
pub mod link;
pub mod normalize;
pub mod selection;
pub mod vocabulary;

pub use annotate::{Annotator, LinkAwareBoundary, WordBoundary, add_bracket, remove_bracket};
pub use article::{Article, ArticleAnalyzer, WordPair};
pub use error::CoreError;
pub use lemma::select_lemma;
pub use language::{Lexer, Lexicon, PosTag, TaggedToken, Tagger};
pub use link::{LinkSpan, find_links, parse_link};
pub use selection::{CursorContext, TextCursor, selected_surface_word};
pub use vocabulary::{VocabularyStatus, VocabularyStore, lemmas_to_learn, lemmas_to_mark};
