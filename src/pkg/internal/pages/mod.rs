pub mod detail;
pub mod list;

pub use detail::DetailView;
pub use list::ListPage;
