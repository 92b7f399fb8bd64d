/// The evaluator module reduces an AST to a number.
///
/// The evaluator traverses the tree bottom-up, applies the arithmetic
/// operators with integer/real promotion, and reports runtime errors such as
/// division by zero, integer overflow, or modulo on a real operand.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw input and produces a stream of tokens paired with
/// their column: number literals, operators and parentheses. Any other
/// character, whitespace included, is a lexical error.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over three binary precedence levels and
/// a prefix level. It validates the grammar and rejects empty input and
/// trailing tokens.
pub mod parser;
/// The value module defines the runtime numeric type.
pub mod value;
