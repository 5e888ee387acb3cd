mod common;
mod properties;
mod session;
