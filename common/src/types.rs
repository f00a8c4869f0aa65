//! Types shared by all the layers

use std::result;


/// For the operations that may only fail at start-up (opening feeds, compiling patterns...), whose errors end up in `main`
pub type Result<T> = result::Result<T, Box<dyn std::error::Error>>;
