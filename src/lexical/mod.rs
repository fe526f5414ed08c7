//! Lexical scorer (BM25-lite) and its tokenizer.

pub mod config;
pub mod scorer;
pub mod tokenizer;


pub use config::Bm25Params;
pub use scorer::{LexicalScorer, idf_proxy};
pub use tokenizer::{TextDocument, is_stop_word, tokenize};
