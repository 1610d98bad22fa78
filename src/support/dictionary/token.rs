//! Tokenizer for dictionary text.

use std::fmt;

use super::DictionaryError;

/// A lexical unit of dictionary text.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    Word(String),
    Number(f64),
    Open,
    Close,
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(word) => f.write_str(word),
            Self::Number(x) => write!(f, "{x}"),
            Self::Open => f.write_str("("),
            Self::Close => f.write_str(")"),
            Self::End => f.write_str(";"),
        }
    }
}

/// A token with the line it started on.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Spanned {
    pub(super) token: Token,
    pub(super) line: usize,
}

/// Splits `text` into tokens, skipping whitespace and comments.
pub(super) fn tokenize(text: &str) -> Result<Vec<Spanned>, DictionaryError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    let mut line = 1;

    while let Some(c) = chars.next() {
        match c {
            '\n' => line += 1,
            c if c.is_whitespace() => {}
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let start = line;
                let mut prev = '\0';
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                    }
                    if prev == '*' && c == '/' {
                        closed = true;
                        break;
                    }
                    prev = c;
                }
                if !closed {
                    return Err(DictionaryError::UnterminatedComment { line: start });
                }
            }
            '(' => tokens.push(Spanned {
                token: Token::Open,
                line,
            }),
            ')' => tokens.push(Spanned {
                token: Token::Close,
                line,
            }),
            ';' => tokens.push(Spanned {
                token: Token::End,
                line,
            }),
            c => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_whitespace() || matches!(next, '(' | ')' | ';') {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                let token = match word.parse::<f64>() {
                    Ok(x) if starts_numeric(&word) => Token::Number(x),
                    _ => Token::Word(word),
                };
                tokens.push(Spanned { token, line });
            }
        }
    }

    Ok(tokens)
}

/// Renders tokens back to text with conventional spacing.
///
/// No space is emitted inside parentheses or between a list count and its
/// opening parenthesis, e.g. `3(1 2 3)`.
pub(super) fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;
    for token in tokens {
        let space = match (prev, token) {
            (None, _) | (Some(Token::Open), _) | (_, Token::Close) => false,
            (Some(Token::Number(_)), Token::Open) => false,
            _ => true,
        };
        if space {
            out.push(' ');
        }
        out.push_str(&token.to_string());
        prev = Some(token);
    }
    out
}

/// Words such as `inf` or `nan` parse as floats but are kept as words.
fn starts_numeric(word: &str) -> bool {
    word.trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<Token> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn splits_words_numbers_and_punctuation() {
        assert_eq!(
            kinds("pulseValue nonuniform List<scalar> 2(1.5 -2e-1);"),
            vec![
                Token::Word("pulseValue".into()),
                Token::Word("nonuniform".into()),
                Token::Word("List<scalar>".into()),
                Token::Number(2.0),
                Token::Open,
                Token::Number(1.5),
                Token::Number(-0.2),
                Token::Close,
                Token::End,
            ]
        );
    }

    #[test]
    fn skips_comments_and_tracks_lines() {
        let tokens = tokenize("// header\n/* block\ncomment */ period 5;").unwrap();
        assert_eq!(tokens[0].token, Token::Word("period".into()));
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn unterminated_block_comment() {
        assert_eq!(
            tokenize("a 1;\n/* never closed"),
            Err(DictionaryError::UnterminatedComment { line: 2 })
        );
    }

    #[test]
    fn special_float_names_stay_words() {
        assert_eq!(kinds("inf"), vec![Token::Word("inf".into())]);
    }

    #[test]
    fn renders_lists_compactly() {
        let tokens = kinds("nonuniform List<vector> 2((1 0 0) (0 1 0))");
        assert_eq!(
            render(&tokens),
            "nonuniform List<vector> 2((1 0 0) (0 1 0))"
        );
    }
}
