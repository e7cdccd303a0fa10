pub mod document;
pub mod element;
pub mod elements;
pub mod form;
pub mod parse;
pub mod render;
pub mod selector;

pub use document::*;
pub use element::*;
pub use elements::*;
pub use form::FormData;
pub use selector::*;
