use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::linked_list::LinkedList;

/// A [`LinkedList`] of numbers for use from JavaScript.
#[wasm_bindgen]
pub struct JsLinkedList {
    inner: LinkedList<f64>,
}

#[wasm_bindgen]
impl JsLinkedList {
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsLinkedList {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        JsLinkedList {
            inner: LinkedList::new(),
        }
    }

    /// builds a list from a JavaScript array of numbers, head first
    #[wasm_bindgen(js_name = fromArray)]
    pub fn from_array(values: JsValue) -> Result<JsLinkedList, JsError> {
        let inner: LinkedList<f64> = serde_wasm_bindgen::from_value(values)
            .map_err(|err| JsError::new(&err.to_string()))?;
        Ok(JsLinkedList { inner })
    }

    pub fn size(&self) -> usize {
        self.inner.size()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[wasm_bindgen(js_name = pushFront)]
    pub fn push_front(&mut self, value: f64) {
        self.inner.push_front(value);
    }

    #[wasm_bindgen(js_name = pushBack)]
    pub fn push_back(&mut self, value: f64) {
        self.inner.push_back(value);
    }

    pub fn insert(&mut self, value: f64, position: i32) {
        self.inner.insert(value, position as isize);
    }

    pub fn delete(&mut self, value: f64) -> bool {
        self.inner.delete(&value)
    }

    pub fn search(&self, value: f64) -> bool {
        self.inner.search(&value)
    }

    pub fn display(&self) -> String {
        self.inner.display()
    }

    #[wasm_bindgen(js_name = toArray)]
    pub fn to_array(&self) -> Array {
        self.inner.iter().map(|&v| JsValue::from_f64(v)).collect()
    }
}

impl Default for JsLinkedList {
    fn default() -> Self {
        Self::new()
    }
}
