pub mod app;
pub mod auth;
pub mod clock;
pub mod dispatcher;
pub mod log;
pub mod router;
pub mod runtime;
pub mod scheduler;
pub mod search;
pub mod session;
