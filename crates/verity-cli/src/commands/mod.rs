pub mod backend;
pub mod check;
pub mod dispatch;
pub mod forget;
pub mod list;
pub mod schema;
pub mod show;
pub mod status;
