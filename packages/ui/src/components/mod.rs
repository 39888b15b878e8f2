//! Small building blocks shared by every page: form controls, list
//! pagination and search, feedback banners and dialogs.

mod feedback;
mod form;
mod pagination;
mod search;

pub use feedback::{ConfirmDialog, ErrorBanner, LoadingRow};
pub use form::{Button, ButtonVariant, Field, Input, Select, Textarea};
pub use pagination::{page_count, paginate, Pagination, PAGE_SIZE};
pub use search::{matches_search, SearchInput};
