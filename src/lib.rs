//! An owning singly-linked list.
//!
//! [`LinkedList`] owns its head [`Node`], every node owns its successor. Insertion works at the
//! front, at the back or at any position (out of range positions clamp), deletion removes the
//! first node holding a given value, and [`LinkedList::display()`] renders the contents as
//! `"1 -> 2 -> 3"`. The rendering can be parsed back with [`LinkedList::from_string()`].
//!
//! The list is not synchronized. Callers sharing one between threads must guard it themselves.

mod linked_list;
mod list_string_parser;
#[cfg(feature = "serde")]
mod serde_impl;
#[cfg(feature = "wasm")]
mod wasm;

pub use linked_list::{Iter, IterMut, IntoIter, Link, LinkedList, Node, EMPTY_LIST, SEPARATOR};
pub use list_string_parser::{string_to_list, ListParsingError};
#[cfg(feature = "wasm")]
pub use wasm::JsLinkedList;
