use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use csv::QuoteStyle;
use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use kdam::tqdm;
use serde::Serialize;

use crate::cut::CutError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), CutError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            let msg = format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            );
            CutError::InvalidUserInput(msg)
        })
    } else {
        Ok(())
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// opens a file for reading, decompressing it if the filename ends with `.gz`.
pub fn open_reader(path: &Path) -> Result<Box<dyn Read>, CutError> {
    let file = File::open(path).map_err(|e| CutError::ReadError {
        path: path.to_owned(),
        message: e.to_string(),
    })?;
    let reader = BufReader::new(file);
    if is_gzip(path) {
        Ok(Box::new(GzDecoder::new(reader)))
    } else {
        Ok(Box::new(reader))
    }
}

/// fails with a write error when `path` exists and `overwrite` is not set.
pub fn check_overwrite(path: &Path, overwrite: bool) -> Result<(), CutError> {
    if path.exists() && !overwrite {
        return Err(CutError::WriteError {
            path: path.to_owned(),
            message: "file exists, set overwrite to replace it".to_string(),
        });
    }
    Ok(())
}

/// writes a value as JSON, compressing it if the filename ends with `.gz`.
/// an existing file is only replaced when `overwrite` is set.
pub fn write_json<T: Serialize>(value: &T, path: &Path, overwrite: bool) -> Result<(), CutError> {
    check_overwrite(path, overwrite)?;
    let file = File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = BufWriter::new(file);
    if is_gzip(path) {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        serialize_json(&mut encoder, value, path)?;
        // the gzip trailer is only written by finish
        writer = encoder.finish().map_err(|e| write_error(path, e))?;
    } else {
        serialize_json(&mut writer, value, path)?;
    }
    writer.flush().map_err(|e| write_error(path, e))
}

fn serialize_json<W: Write, T: Serialize>(
    writer: W,
    value: &T,
    path: &Path,
) -> Result<(), CutError> {
    serde_json::to_writer(writer, value).map_err(|e| CutError::WriteError {
        path: path.to_owned(),
        message: format!("failure while serializing as JSON: {e}"),
    })
}

fn write_error(path: &Path, error: std::io::Error) -> CutError {
    CutError::WriteError {
        path: path.to_owned(),
        message: error.to_string(),
    }
}

/// writes rows as a gzipped CSV file with headers. existing files are left
/// untouched unless `overwrite` is set.
pub fn serialize_into_csv<I>(
    iterable: I,
    filename: &str,
    output_directory: &Path,
    overwrite: bool,
    desc: &str,
) -> Result<(), CutError>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    I::Item: Serialize,
{
    let mut writer = match create_writer(output_directory, filename, overwrite)? {
        Some(writer) => writer,
        None => {
            log::warn!("{filename} exists in output directory, skipping");
            return Ok(());
        }
    };
    let iter = iterable.into_iter();
    let total = iter.len();
    let bar_iter = tqdm!(iter, total = total, desc = desc);
    for element in bar_iter {
        writer.serialize(element).map_err(|e| {
            CutError::CsvWriteError(format!("Failed to write to {filename}: {e}"))
        })?;
    }
    eprintln!();
    let encoder = writer
        .into_inner()
        .map_err(|e| CutError::CsvWriteError(format!("Failed to flush {filename}: {e}")))?;
    encoder
        .finish()
        .map_err(|e| CutError::CsvWriteError(format!("Failed to finish {filename}: {e}")))?;
    Ok(())
}

fn create_writer(
    directory: &Path,
    filename: &str,
    overwrite: bool,
) -> Result<Option<csv::Writer<GzEncoder<File>>>, CutError> {
    let filepath = directory.join(filename);
    if filepath.exists() && !overwrite {
        return Ok(None);
    }
    let file = File::create(&filepath).map_err(|e| CutError::WriteError {
        path: filepath.clone(),
        message: e.to_string(),
    })?;
    let buffer = GzEncoder::new(file, Compression::default());
    let writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(buffer);
    Ok(Some(writer))
}
