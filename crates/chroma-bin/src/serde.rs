use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::file_io::DecodedFile;

/// Probe output for a single file
pub struct Metadata<'a> {
    file: &'a DecodedFile
}

impl<'a> Metadata<'a> {
    pub fn new(file: &'a DecodedFile) -> Metadata<'a> {
        Metadata { file }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let (width, height) = self.file.image.dimensions();

        let mut state = serializer.serialize_struct("ImageMetadata", 8)?;

        state.serialize_field("file", &self.file.file_path.to_string_lossy())?;
        state.serialize_field("size", &self.file.size)?;
        state.serialize_field("dimensions_line", self.file.dimensions_line.trim_end())?;
        state.serialize_field("declared_width", &self.file.declared.map(|(w, _)| w))?;
        state.serialize_field("declared_height", &self.file.declared.map(|(_, h)| h))?;
        state.serialize_field("width", &width)?;
        state.serialize_field("height", &height)?;
        state.serialize_field("rectangular", &self.file.image.is_rectangular())?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chroma_core::image::Image;

    use crate::file_io::DecodedFile;
    use crate::serde::Metadata;

    #[test]
    fn test_metadata_fields() {
        let file = DecodedFile {
            file_path:       PathBuf::from("screen.ppm"),
            size:            40,
            image:           Image::fill([0, 255, 0], 2, 3),
            dimensions_line: "2 3\n".to_string(),
            declared:        Some((2, 3))
        };
        let value = serde_json::to_value(Metadata::new(&file)).unwrap();

        assert_eq!(value["file"], "screen.ppm");
        assert_eq!(value["size"], 40);
        assert_eq!(value["dimensions_line"], "2 3");
        assert_eq!(value["declared_width"], 2);
        assert_eq!(value["width"], 2);
        assert_eq!(value["height"], 3);
        assert_eq!(value["rectangular"], true);
    }
}
