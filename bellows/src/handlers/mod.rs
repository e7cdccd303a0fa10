pub mod form_submit;
pub mod row_add;

pub use form_submit::FormSubmitHandler;
pub use row_add::RowAddHandler;
