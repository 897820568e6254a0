// Create the Error, ErrorKind, ResultExt, and Result types.
// Other modules `use crate::errors::*;` to get access to everything `error_chain!` creates.
use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        InvalidDimension(rows: usize, columns: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {} x {}: rows and columns must be at least 1", rows, columns)
        }
        InvalidLength(name: &'static str, value: f32) {
            description("invalid length")
            display("invalid {}: {} (must be a finite value greater than zero)", name, value)
        }
    }
}
