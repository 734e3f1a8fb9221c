mod common;
mod drag;
mod filters;
