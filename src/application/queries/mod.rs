pub mod articles;
pub mod dashboards;
pub mod publishers;
pub mod users;
