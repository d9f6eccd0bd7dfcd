pub mod explorer_session;
