mod editor;
mod journalist;
mod reader;
mod service;

pub use service::DashboardQueryService;
