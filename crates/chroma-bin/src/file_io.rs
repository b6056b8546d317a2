/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chroma_core::image::Image;
use chroma_core::options::DecoderOptions;
use chroma_ppm::PPMDecoder;
use log::debug;

use crate::errors::PipelineErrors;

/// A PPM file on disk waiting to be decoded
pub struct PPMFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

/// A fully decoded PPM file
pub struct DecodedFile {
    pub file_path:       PathBuf,
    /// File size in bytes
    pub size:            u64,
    pub image:           Image,
    /// Raw dimensions header line, trailing newline included
    pub dimensions_line: String,
    /// Width and height declared in the header, if readable
    pub declared:        Option<(usize, usize)>
}

impl PPMFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> PPMFile {
        PPMFile { file_path, options }
    }

    /// Read the whole file into memory and decode it
    ///
    /// The file is closed before this returns
    pub fn decode(self) -> Result<DecodedFile, PipelineErrors> {
        let data = std::fs::read(&self.file_path)
            .map_err(|err| PipelineErrors::FileErrors(self.file_path.clone(), err))?;

        debug!("Read {} bytes from {:?}", data.len(), self.file_path);

        let mut decoder = PPMDecoder::new_with_options(self.options, &data);

        let image = match decoder.decode() {
            Ok(image) => image,
            Err(err) => return Err(PipelineErrors::DecodeErrors(self.file_path, err))
        };
        let dimensions_line = decoder.dimensions_line().unwrap_or_default().to_string();
        let declared = decoder.get_dimensions();

        Ok(DecodedFile {
            file_path: self.file_path,
            size: data.len() as u64,
            image,
            dimensions_line,
            declared
        })
    }
}

/// Refuse to run when an input would be overwritten by the output
pub fn verify_file_paths(screen: &Path, fill: &Path, output: &Path) -> Result<(), PipelineErrors> {
    for input in [screen, fill] {
        if input == output {
            return Err(PipelineErrors::GenericString(format!(
                "Cannot use {:?} as both input and output",
                input
            )));
        }
    }
    Ok(())
}

/// Create (or truncate) `path` and write `data` to it
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), PipelineErrors> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(|err| PipelineErrors::FileErrors(path.to_path_buf(), err))?;

    file.write_all(data)
        .and_then(|()| file.flush())
        .map_err(|err| PipelineErrors::FileErrors(path.to_path_buf(), err))?;

    debug!("Wrote {} bytes to {:?}", data.len(), path);

    Ok(())
}
