use super::*;

mod create;
mod get;
