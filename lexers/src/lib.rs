mod scanner;
mod expr_tokenizer;

pub use scanner::Scanner;
pub use expr_tokenizer::{ExprTokenizer, ExprToken};
pub use expr_tokenizer::{is_word_char, tokenize};
