//! Input loading: a file path, or `-` for stdin.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::{self, Read};

pub fn read_input(input: &str) -> AppResult<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| AppError::ReadInput {
                path: "<stdin>".to_string(),
                source,
            })?;
        return Ok(buf);
    }

    let path = crate::utils::path::expand_tilde(input);
    fs::read_to_string(&path).map_err(|source| AppError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}
