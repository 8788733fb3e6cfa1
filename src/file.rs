//! File manipulation utilities.

use std::fs::File;
use std::io;
use std::path::Path;
use std::{fs, io::Error};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

/// Writes a JSON-encoded type to a given file `path`, replacing any existing contents.
pub fn write_json<S: Serialize>(path: impl AsRef<Path>, value: &S) -> Result<(), io::Error> {
    let file = File::create(path)?;
    Ok(to_writer(file, value)?)
}

/// Reads an entire UTF-8 text file.
pub fn read_text(path: impl AsRef<Path>) -> Result<String, io::Error> {
    fs::read_to_string(path)
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, io::Error>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<D, Error> {
        read_json(path)
    }
}
