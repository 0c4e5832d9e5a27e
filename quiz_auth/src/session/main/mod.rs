mod cookie;

pub(crate) use cookie::{open_session, seal_session};
