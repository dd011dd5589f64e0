use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use super::linked_list::{LinkedList, EMPTY_LIST};

/// matches the `->` between two rendered elements, together with the whitespace around it
const SEPARATOR_PATTERN: &str = r"\s*->\s*";

#[derive(Debug, Error)]
pub enum ListParsingError {
    #[error("input is blank, expected elements or \"Empty list\"")]
    EmptyInput,
    #[error("element {index} is missing between two separators")]
    MissingElement { index: usize },
    #[error("element {index} ({token:?}) could not be parsed")]
    InvalidElement { index: usize, token: String },
    #[error("invalid separator pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// parses the output of [`LinkedList::display()`] back into a [`LinkedList`]
pub fn string_to_list<T: FromStr>(input: &str) -> Result<LinkedList<T>, ListParsingError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ListParsingError::EmptyInput);
    }
    if input == EMPTY_LIST {
        return Ok(LinkedList::new());
    }

    let separator = Regex::new(SEPARATOR_PATTERN)?;
    separator
        .split(input)
        .enumerate()
        .map(|(index, token)| token_to_element(index, token))
        .collect()
}

fn token_to_element<T: FromStr>(index: usize, token: &str) -> Result<T, ListParsingError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ListParsingError::MissingElement { index });
    }
    token
        .parse()
        .map_err(|_| ListParsingError::InvalidElement {
            index,
            token: token.to_owned(),
        })
}

impl<T: FromStr> LinkedList<T> {
    /// parses a rendering like `"1 -> 2 -> 3"` or `"Empty list"` into a [`LinkedList`]
    ///
    /// # Examples
    /// ```
    /// use singly::LinkedList;
    ///
    /// let list: LinkedList<f64> = LinkedList::from_string("0 -> 1 -> 1.5").unwrap();
    /// assert_eq!(list.size(), 3);
    /// assert!(list.search(&1.5));
    /// ```
    pub fn from_string(input: &str) -> Result<Self, ListParsingError> {
        string_to_list(input)
    }
}

impl<T: FromStr> FromStr for LinkedList<T> {
    type Err = ListParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        string_to_list(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod valid_input {
        use super::*;

        #[test]
        fn parses_rendered_list() {
            let list: LinkedList<i32> = string_to_list("0 -> 1 -> 2 -> 3").unwrap();
            assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        }

        #[test]
        fn whitespace_around_separators_is_optional() {
            let list: LinkedList<i32> = "  4->5   ->6 ".parse().unwrap();
            assert_eq!(list.display(), "4 -> 5 -> 6");
        }

        #[test]
        fn empty_list_sentinel_parses_to_empty_list() {
            let list: LinkedList<i32> = string_to_list(" Empty list\n").unwrap();
            assert!(list.is_empty());
        }

        #[test]
        fn single_element() {
            let list: LinkedList<String> = LinkedList::from_string("hello").unwrap();
            assert_eq!(list.front().map(String::as_str), Some("hello"));
        }

        #[test]
        fn display_output_parses_back() {
            let list: LinkedList<f64> = [0.0, 1.0, 1.5, 2.0, -3.25].into_iter().collect();
            let parsed: LinkedList<f64> = list.display().parse().unwrap();
            assert_eq!(parsed, list);
        }
    }

    mod invalid_input {
        use super::*;

        #[test]
        fn blank_input() {
            let result = string_to_list::<i32>("   ");
            assert!(matches!(result, Err(ListParsingError::EmptyInput)));
        }

        #[test]
        fn missing_element_reports_its_index() {
            let result = string_to_list::<i32>("1 -> -> 2");
            assert!(matches!(
                result,
                Err(ListParsingError::MissingElement { index: 1 })
            ));
        }

        #[test]
        fn trailing_separator() {
            let result = string_to_list::<i32>("1 -> 2 ->");
            assert!(matches!(
                result,
                Err(ListParsingError::MissingElement { index: 2 })
            ));
        }

        #[test]
        fn unparsable_element() {
            match string_to_list::<u8>("1 -> 300") {
                Err(ListParsingError::InvalidElement { index, token }) => {
                    assert_eq!(index, 1);
                    assert_eq!(token, "300");
                }
                other => panic!("unexpected result: {:?}", other.map(|l| l.display())),
            }
        }

        #[test]
        fn error_messages_are_readable() {
            let err = string_to_list::<i32>("a").unwrap_err();
            println!("{err}");
            assert_eq!(err.to_string(), "element 0 (\"a\") could not be parsed");
        }
    }
}
