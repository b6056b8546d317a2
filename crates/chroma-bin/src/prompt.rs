/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Interactive questions asked on the terminal

use std::io;
use std::io::{BufRead, Write};
use std::path::Path;

pub static CHANNEL_PROMPT: &str = "Enter color channel";
pub static THRESHOLD_PROMPT: &str = "Enter color channel difference";
pub static SCREEN_PROMPT: &str = "Enter greenscreen image file name";
pub static FILL_PROMPT: &str = "Enter fill image file name";
pub static OUTPUT_PROMPT: &str = "Enter output file name";

/// Print `prompt` on its own line and read one line of input
///
/// The line terminator is removed, anything else is returned untouched.
/// An exhausted input gives an empty answer.
pub fn read_line<R: BufRead, W: Write>(
    reader: &mut R, writer: &mut W, prompt: &str
) -> io::Result<String> {
    writeln!(writer, "{prompt}")?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;

    let trimmed = answer.trim_end_matches(['\n', '\r']).len();
    answer.truncate(trimmed);

    Ok(answer)
}

/// Ask whether `path` may be overwritten, only `y` counts as yes
pub fn confirm_overwrite<R: BufRead, W: Write>(
    reader: &mut R, writer: &mut W, path: &Path
) -> io::Result<bool> {
    let question = format!("File {:?} exists, overwrite [y/N]", path);
    let answer = read_line(reader, writer, &question)?;

    Ok(answer.trim() == "y")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use crate::prompt::{confirm_overwrite, read_line};

    #[test]
    fn test_read_line_strips_terminator_only() {
        let mut reader = Cursor::new(b" g \r\nnext\n".to_vec());
        let mut writer = Vec::new();

        assert_eq!(read_line(&mut reader, &mut writer, "Question").unwrap(), " g ");
        assert_eq!(read_line(&mut reader, &mut writer, "Again").unwrap(), "next");
        assert_eq!(read_line(&mut reader, &mut writer, "Empty").unwrap(), "");
        assert_eq!(writer, b"Question\nAgain\nEmpty\n");
    }

    #[test]
    fn test_confirm_overwrite() {
        let path = Path::new("out.ppm");
        let mut writer = Vec::new();

        let mut yes = Cursor::new(b"y\n".to_vec());
        assert!(confirm_overwrite(&mut yes, &mut writer, path).unwrap());

        let mut no = Cursor::new(b"yes\n".to_vec());
        assert!(!confirm_overwrite(&mut no, &mut writer, path).unwrap());

        let mut nothing = Cursor::new(Vec::new());
        assert!(!confirm_overwrite(&mut nothing, &mut writer, path).unwrap());
    }
}
