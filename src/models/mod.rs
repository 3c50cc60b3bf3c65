pub mod leave;
pub mod search_record;
pub mod theme;
pub mod toast;
pub mod user;
pub mod view;
