pub mod scroll_session;
