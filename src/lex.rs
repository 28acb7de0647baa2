use std::iter::Peekable;
use std::str::CharIndices;

use phf::phf_map;
use thiserror::Error;

use crate::span::Span;
use crate::token::Token;

static SINGLE_CHAR_TOKENS: phf::Map<char, Token> = phf_map! {
    '+' => Token::Add,
    '-' => Token::Sub,
    '*' => Token::Mul,
    '/' => Token::Div,
    '(' => Token::LeftParen,
    ')' => Token::RightParen,
};

// A NUL character marks the end of input just like running out of characters.
const END_MARKER: char = '\0';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character `{0}` at position {1}")]
    UnexpectedCharacter(char, Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter(_, s) => *s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexItem {
    pub span: Span,
    pub token: Token,
}

impl LexItem {
    pub fn new(token: Token, span: Span) -> Self {
        LexItem { token, span }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Pull tokenizer over a borrowed input. Each call to [`Lexer::next_token`]
/// advances the cursor past exactly one token; once the input is exhausted
/// every further call yields [`Token::EndOfInput`].
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn next_token(&mut self) -> Result<LexItem, LexError> {
        self.skip_whitespace();

        let (offset, c) = match self.chars.peek().copied() {
            Some((_, END_MARKER)) | None => return Ok(self.end_of_input()),
            Some(pair) => pair,
        };

        if let Some(token) = SINGLE_CHAR_TOKENS.get(&c) {
            self.chars.next();
            return Ok(LexItem::new(*token, Span::one(offset)));
        }

        if c.is_ascii_digit() {
            return Ok(self.lex_number(offset));
        }

        Err(LexError::UnexpectedCharacter(
            c,
            Span::new(offset, offset + c.len_utf8() - 1),
        ))
    }

    fn end_of_input(&mut self) -> LexItem {
        let offset = match self.chars.peek() {
            Some(&(offset, _)) => offset,
            None => self.input.len(),
        };
        LexItem::new(Token::EndOfInput, Span::one(offset))
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, c)| is_whitespace(c)).is_some() {}
    }

    fn lex_number(&mut self, start_offset: usize) -> LexItem {
        let mut end_offset = start_offset;
        while let Some((offset, _)) = self.chars.next_if(|&(_, c)| c.is_ascii_digit()) {
            end_offset = offset;
        }
        LexItem::new(Token::Number, Span::new(start_offset, end_offset))
    }
}

/// Tokenizes the whole input eagerly. The returned list always ends with
/// a single [`Token::EndOfInput`] item.
pub fn lex(input: &str) -> Result<Vec<LexItem>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut result = vec![];

    loop {
        let li = lexer.next_token()?;
        result.push(li);
        if li.token == Token::EndOfInput {
            return Ok(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).unwrap().into_iter().map(|li| li.token).collect()
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            tokens("+-*/()"),
            vec![
                Token::Add,
                Token::Sub,
                Token::Mul,
                Token::Div,
                Token::LeftParen,
                Token::RightParen,
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_number_is_one_token() {
        let input = "12345+6";
        let items = lex(input).unwrap();
        assert_eq!(items[0].token, Token::Number);
        assert_eq!(items[0].span, Span::new(0, 4));
        assert_eq!(items[0].span.str_from_source(input), "12345");
        assert_eq!(items[2].span.str_from_source(input), "6");
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_whitespace_skipped_everywhere() {
        assert_eq!(
            tokens(" \t( 1\r\n+\t2 )\n"),
            vec![
                Token::LeftParen,
                Token::Number,
                Token::Add,
                Token::Number,
                Token::RightParen,
                Token::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("7");
        assert_eq!(lexer.next_token().unwrap().token, Token::Number);
        for _ in 0..5 {
            let li = lexer.next_token().unwrap();
            assert_eq!(li.token, Token::EndOfInput);
            assert_eq!(li.span, Span::one(1));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokens(""), vec![Token::EndOfInput]);
        assert_eq!(tokens("   "), vec![Token::EndOfInput]);
    }

    #[test]
    fn test_nul_marks_end_of_input() {
        let mut lexer = Lexer::new("1\0+2");
        assert_eq!(lexer.next_token().unwrap().token, Token::Number);
        assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
        assert_eq!(lexer.next_token().unwrap().token, Token::EndOfInput);
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("1 + x").unwrap_err();
        assert_eq!(err, LexError::UnexpectedCharacter('x', Span::one(4)));

        let err = lex("2.5").unwrap_err();
        assert_eq!(err, LexError::UnexpectedCharacter('.', Span::one(1)));
    }

    #[test]
    fn test_unexpected_multibyte_character() {
        let err = lex("1 × 2").unwrap_err();
        assert_eq!(err, LexError::UnexpectedCharacter('×', Span::new(2, 3)));
    }
}
