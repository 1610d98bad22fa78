//! Keyword-value configuration text.
//!
//! A [`Dictionary`] is an ordered list of `keyword value;` entries, the format
//! in which boundary conditions are configured and persisted:
//!
//! ```text
//! type            pulseFixedValue;
//! period          5;
//! duration        0.5;
//! baseValue       (0 0 0);
//! pulseValue      nonuniform List<vector> 2((1 0 0) (0 1 0));
//! value           uniform (0 0 0);
//! ```
//!
//! Values are either scalars, words, element values (a scalar or a
//! parenthesised list of components), or per-face fields written as
//! `uniform <value>` or `nonuniform List<type> N(<value> ...)`.
//! Line (`//`) and block (`/* */`) comments are ignored on read.
//!
//! Sub-dictionaries and the wider configuration grammar are not supported.

mod error;
mod token;

use std::{fmt, str::FromStr};

use crate::support::field::FieldType;

pub use error::DictionaryError;

use token::{Token, render, tokenize};

/// An ordered set of configuration entries.
///
/// # Example
///
/// ```
/// use twine_boundary_models::support::dictionary::Dictionary;
///
/// let dict: Dictionary = "period 5;\nduration 0.5;".parse().unwrap();
/// assert_eq!(dict.get_scalar("period").unwrap(), 5.0);
/// assert!(dict.get_scalar("amplitude").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    keyword: String,
    tokens: Vec<Token>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `key` has an entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entry(key).is_some()
    }

    /// Returns the keywords in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    /// Looks up a required scalar.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::MissingKey`] if absent, or
    /// [`DictionaryError::Malformed`] if the entry is not a single number.
    pub fn get_scalar(&self, key: &str) -> Result<f64, DictionaryError> {
        match self.require(key)? {
            [Token::Number(x)] => Ok(*x),
            tokens => Err(malformed(key, "scalar", tokens)),
        }
    }

    /// Looks up a required word, such as a type name.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::MissingKey`] if absent, or
    /// [`DictionaryError::Malformed`] if the entry is not a single word.
    pub fn get_word(&self, key: &str) -> Result<&str, DictionaryError> {
        match self.require(key)? {
            [Token::Word(word)] => Ok(word.as_str()),
            tokens => Err(malformed(key, "word", tokens)),
        }
    }

    /// Looks up a required element value of type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::MissingKey`] if absent, or
    /// [`DictionaryError::Malformed`] if the entry is not a `T`.
    pub fn get_value<T: FieldType>(&self, key: &str) -> Result<T, DictionaryError> {
        let tokens = self.require(key)?;
        match read_value::<T>(tokens) {
            Some((value, rest)) if rest.is_empty() => Ok(value),
            _ => Err(malformed(key, T::TYPE_NAME, tokens)),
        }
    }

    /// Looks up an optional element value, falling back to `default`.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Malformed`] if the entry exists but is not a `T`.
    pub fn get_value_or<T: FieldType>(&self, key: &str, default: T) -> Result<T, DictionaryError> {
        if self.contains(key) {
            self.get_value(key)
        } else {
            Ok(default)
        }
    }

    /// Reads a per-face field entry with exactly `size` values.
    ///
    /// A `uniform` entry is broadcast to every face.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::MissingKey`] if absent,
    /// [`DictionaryError::Malformed`] if the entry is not a field of `T`, or
    /// [`DictionaryError::SizeMismatch`] if a `nonuniform` list has the wrong length.
    pub fn get_field<T: FieldType>(&self, key: &str, size: usize) -> Result<Vec<T>, DictionaryError> {
        let tokens = self.require(key)?;
        let bad = || malformed(key, &format!("field of {}", T::TYPE_NAME), tokens);

        match tokens {
            [Token::Word(kind), rest @ ..] if kind == "uniform" => match read_value::<T>(rest) {
                Some((value, [])) => Ok(vec![value; size]),
                _ => Err(bad()),
            },
            [Token::Word(kind), Token::Word(list), Token::Number(n), rest @ ..]
                if kind == "nonuniform" && *list == list_type::<T>() =>
            {
                let count = list_count(*n).ok_or_else(bad)?;
                let values = read_list::<T>(rest, count).ok_or_else(bad)?;
                if values.len() == size {
                    Ok(values)
                } else {
                    Err(DictionaryError::SizeMismatch {
                        key: key.to_owned(),
                        expected: size,
                        found: values.len(),
                    })
                }
            }
            _ => Err(bad()),
        }
    }

    /// Adds or replaces a scalar entry.
    pub fn add_scalar(&mut self, key: &str, value: f64) {
        self.insert(key, vec![Token::Number(value)]);
    }

    /// Adds or replaces a word entry.
    pub fn add_word(&mut self, key: &str, word: &str) {
        self.insert(key, vec![Token::Word(word.to_owned())]);
    }

    /// Adds or replaces an element value entry.
    pub fn add_value<T: FieldType>(&mut self, key: &str, value: &T) {
        self.insert(key, value_tokens(value));
    }

    /// Adds or replaces a per-face field entry.
    ///
    /// Non-empty fields whose entries are all equal are written `uniform`.
    pub fn add_field<T: FieldType>(&mut self, key: &str, values: &[T]) {
        let tokens = match values {
            [first, rest @ ..] if rest.iter().all(|v| v == first) => {
                let mut tokens = vec![Token::Word("uniform".to_owned())];
                tokens.extend(value_tokens(first));
                tokens
            }
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let count = values.len() as f64;
                let mut tokens = vec![
                    Token::Word("nonuniform".to_owned()),
                    Token::Word(list_type::<T>()),
                    Token::Number(count),
                    Token::Open,
                ];
                tokens.extend(values.iter().flat_map(value_tokens));
                tokens.push(Token::Close);
                tokens
            }
        };
        self.insert(key, tokens);
    }

    fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.keyword == key)
    }

    fn require(&self, key: &str) -> Result<&[Token], DictionaryError> {
        self.entry(key)
            .map(|e| e.tokens.as_slice())
            .ok_or_else(|| DictionaryError::MissingKey {
                key: key.to_owned(),
            })
    }

    fn insert(&mut self, key: &str, tokens: Vec<Token>) {
        match self.entries.iter_mut().find(|e| e.keyword == key) {
            Some(entry) => entry.tokens = tokens,
            None => self.entries.push(Entry {
                keyword: key.to_owned(),
                tokens,
            }),
        }
    }
}

impl FromStr for Dictionary {
    type Err = DictionaryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut dict = Self::new();
        let mut tokens = tokenize(text)?.into_iter();

        while let Some(first) = tokens.next() {
            let keyword = match first.token {
                Token::Word(keyword) => keyword,
                other => {
                    return Err(DictionaryError::UnexpectedToken {
                        line: first.line,
                        found: other.to_string(),
                    });
                }
            };

            let mut value = Vec::new();
            let mut depth = 0_usize;
            let mut terminated = false;
            for spanned in tokens.by_ref() {
                match spanned.token {
                    Token::End if depth == 0 => {
                        terminated = true;
                        break;
                    }
                    Token::Open => depth += 1,
                    Token::Close if depth == 0 => {
                        return Err(DictionaryError::UnexpectedToken {
                            line: spanned.line,
                            found: ")".to_owned(),
                        });
                    }
                    Token::Close => depth -= 1,
                    _ => {}
                }
                value.push(spanned.token);
            }

            if !terminated {
                return Err(DictionaryError::UnterminatedEntry { keyword });
            }
            dict.insert(&keyword, value);
        }

        Ok(dict)
    }
}

/// Writes one `keyword value;` line per entry, keywords padded to a column.
impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{:<15} {};", entry.keyword, render(&entry.tokens))?;
        }
        Ok(())
    }
}

fn list_type<T: FieldType>() -> String {
    format!("List<{}>", T::TYPE_NAME)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn list_count(n: f64) -> Option<usize> {
    (n >= 0.0 && n.fract() == 0.0).then_some(n as usize)
}

fn value_tokens<T: FieldType>(value: &T) -> Vec<Token> {
    let components = value.components();
    if T::COMPONENTS == 1 {
        return components.into_iter().map(Token::Number).collect();
    }
    let mut tokens = Vec::with_capacity(components.len() + 2);
    tokens.push(Token::Open);
    tokens.extend(components.into_iter().map(Token::Number));
    tokens.push(Token::Close);
    tokens
}

/// Reads one `T` from the front of `tokens`, returning the remainder.
fn read_value<T: FieldType>(tokens: &[Token]) -> Option<(T, &[Token])> {
    if T::COMPONENTS == 1 {
        return match tokens {
            [Token::Number(x), rest @ ..] => Some((T::from_components(&[*x])?, rest)),
            _ => None,
        };
    }

    let [Token::Open, rest @ ..] = tokens else {
        return None;
    };
    let mut components = Vec::with_capacity(T::COMPONENTS);
    let mut rest = rest;
    while let [Token::Number(x), tail @ ..] = rest {
        components.push(*x);
        rest = tail;
    }
    let [Token::Close, rest @ ..] = rest else {
        return None;
    };
    Some((T::from_components(&components)?, rest))
}

/// Reads `count` values wrapped in parentheses, which must end the entry.
fn read_list<T: FieldType>(tokens: &[Token], count: usize) -> Option<Vec<T>> {
    let [Token::Open, rest @ ..] = tokens else {
        return None;
    };
    let mut rest = rest;
    let mut values = Vec::new();
    for _ in 0..count {
        let (value, tail) = read_value::<T>(rest)?;
        values.push(value);
        rest = tail;
    }
    match rest {
        [Token::Close] => Some(values),
        _ => None,
    }
}

fn malformed(key: &str, expected: &str, tokens: &[Token]) -> DictionaryError {
    DictionaryError::Malformed {
        key: key.to_owned(),
        expected: expected.to_owned(),
        found: render(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nalgebra::{Matrix3, Vector3};

    #[test]
    #[allow(clippy::float_cmp)]
    fn scalars_and_words() {
        let dict: Dictionary = "type pulseFixedValue;\nperiod 5;\nduration 0.25;"
            .parse()
            .unwrap();
        assert_eq!(dict.get_word("type").unwrap(), "pulseFixedValue");
        assert_eq!(dict.get_scalar("period").unwrap(), 5.0);
        assert_eq!(dict.get_scalar("duration").unwrap(), 0.25);
        assert_eq!(dict.keys().collect::<Vec<_>>(), ["type", "period", "duration"]);
    }

    #[test]
    fn missing_and_malformed_scalars() {
        let dict: Dictionary = "period five;".parse().unwrap();
        assert_eq!(
            dict.get_scalar("duration"),
            Err(DictionaryError::MissingKey {
                key: "duration".into()
            })
        );
        assert_eq!(
            dict.get_scalar("period"),
            Err(DictionaryError::Malformed {
                key: "period".into(),
                expected: "scalar".into(),
                found: "five".into(),
            })
        );
    }

    #[test]
    fn element_values_with_default() {
        let dict: Dictionary = "baseValue (1 2 3);".parse().unwrap();
        assert_eq!(
            dict.get_value::<Vector3<f64>>("baseValue").unwrap(),
            Vector3::new(1.0, 2.0, 3.0)
        );
        assert!(dict.get_value::<f64>("baseValue").is_err());
        assert!(dict.get_value::<Matrix3<f64>>("baseValue").is_err());
        assert_eq!(dict.get_value_or("missing", 7.0).unwrap(), 7.0);
    }

    #[test]
    fn uniform_field_is_broadcast() {
        let dict: Dictionary = "value uniform 2.5;".parse().unwrap();
        assert_eq!(dict.get_field::<f64>("value", 3).unwrap(), vec![2.5; 3]);
    }

    #[test]
    fn nonuniform_field_must_match_size() {
        let dict: Dictionary = "pulseValue nonuniform List<scalar> 3(1 2 3);"
            .parse()
            .unwrap();
        assert_eq!(
            dict.get_field::<f64>("pulseValue", 3).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
        assert_eq!(
            dict.get_field::<f64>("pulseValue", 4),
            Err(DictionaryError::SizeMismatch {
                key: "pulseValue".into(),
                expected: 4,
                found: 3,
            })
        );
    }

    #[test]
    fn nonuniform_field_with_wrong_type_or_count() {
        let dict: Dictionary = "a nonuniform List<vector> 1((1 0 0));\nb nonuniform List<scalar> 3(1 2);"
            .parse()
            .unwrap();
        assert!(matches!(
            dict.get_field::<f64>("a", 1),
            Err(DictionaryError::Malformed { .. })
        ));
        assert!(matches!(
            dict.get_field::<f64>("b", 3),
            Err(DictionaryError::Malformed { .. })
        ));
    }

    #[test]
    fn huge_declared_count_is_malformed() {
        let dict: Dictionary = "pulseValue nonuniform List<scalar> 1e19(1 2);\nother nonuniform List<scalar> 1e17(1 2);"
            .parse()
            .unwrap();
        assert!(matches!(
            dict.get_field::<f64>("pulseValue", 2),
            Err(DictionaryError::Malformed { key, .. }) if key == "pulseValue"
        ));
        assert!(matches!(
            dict.get_field::<f64>("other", 2),
            Err(DictionaryError::Malformed { .. })
        ));
    }

    #[test]
    fn writes_uniform_when_all_equal() {
        let mut dict = Dictionary::new();
        dict.add_field("same", &[1.0, 1.0]);
        dict.add_field("varied", &[Vector3::new(1.0, 0.0, 0.0), Vector3::zeros()]);
        dict.add_field::<f64>("empty", &[]);
        assert_eq!(
            dict.to_string(),
            "same            uniform 1;\n\
             varied          nonuniform List<vector> 2((1 0 0) (0 0 0));\n\
             empty           nonuniform List<scalar> 0();\n"
        );
    }

    #[test]
    fn add_replaces_in_place() {
        let mut dict = Dictionary::new();
        dict.add_scalar("period", 1.0);
        dict.add_word("type", "fixedValue");
        dict.add_scalar("period", 2.0);
        assert_eq!(dict.to_string(), "period          2;\ntype            fixedValue;\n");
    }

    #[test]
    fn written_text_parses_back() {
        let mut dict = Dictionary::new();
        let tensor = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 0.125);
        dict.add_value("t", &tensor);
        dict.add_field("f", &[0.1, 0.2, 0.3]);

        let parsed: Dictionary = dict.to_string().parse().unwrap();
        assert_eq!(parsed, dict);
        assert_eq!(parsed.get_value::<Matrix3<f64>>("t").unwrap(), tensor);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "period 5".parse::<Dictionary>(),
            Err(DictionaryError::UnterminatedEntry {
                keyword: "period".into()
            })
        );
        assert_eq!(
            "\n5 period;".parse::<Dictionary>(),
            Err(DictionaryError::UnexpectedToken {
                line: 2,
                found: "5".into()
            })
        );
        assert!(matches!(
            "a 1);".parse::<Dictionary>(),
            Err(DictionaryError::UnexpectedToken { .. })
        ));
    }
}
