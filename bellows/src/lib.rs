//! Bellows binds the repeatable form sections of server-rendered admin
//! pages: adding input rows from an empty placeholder, and saving a section
//! form in the background with inline outcome banners.

pub mod alert;
pub mod button;
pub mod config;
pub mod dom;
pub mod error;
pub mod event;
pub mod handlers;
pub mod page;
pub mod rows;
pub mod section;
pub mod status;
pub mod transport;
pub mod validate;

pub use config::{BellowsConfig, HttpConfig, SectionConfig};
pub use error::{BellowsError, Result};
pub use event::{AddRow, Dispatch, DomEvent, Outcome};
pub use page::Page;
pub use section::{Section, SectionBuilder};
