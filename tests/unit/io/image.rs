//! Tests for fragment loading, canvas drawing, and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use layerforge::GenerationError;
    use layerforge::io::configuration::Dimensions;
    use layerforge::io::image::{Canvas, load_fragment};
    use layerforge::layers::Position;
    use std::fs;
    use tempfile::TempDir;

    const SIZE: Dimensions = Dimensions {
        width: 3,
        height: 2,
    };
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    // Tests a new canvas is fully transparent at the configured size
    #[test]
    fn test_canvas_starts_transparent() {
        let canvas = Canvas::new(SIZE);

        assert_eq!(canvas.pixels().dimensions(), (3, 2));
        assert!(canvas.pixels().pixels().all(|pixel| pixel.0 == [0, 0, 0, 0]));
    }

    // Tests drawing at an offset only touches the covered region
    #[test]
    fn test_draw_at_offset() {
        let mut canvas = Canvas::new(SIZE);
        let fragment = RgbaImage::from_pixel(1, 1, GREEN);

        canvas.draw(
            &fragment,
            Position { x: 2, y: 1 },
            Dimensions {
                width: 1,
                height: 1,
            },
        );

        assert_eq!(*canvas.pixels().get_pixel(2, 1), GREEN);
        assert_eq!(canvas.pixels().get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    // Tests save writes a PNG that loads back with the same pixels
    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("1.png");
        let mut canvas = Canvas::new(SIZE);
        canvas.draw(&RgbaImage::from_pixel(3, 2, GREEN), Position::default(), SIZE);

        canvas.save(&path).unwrap();
        let loaded = load_fragment(&path).unwrap();

        assert_eq!(&loaded, canvas.pixels());
    }

    // Tests saving into a missing directory is an export error
    #[test]
    fn test_save_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("1.png");

        let result = Canvas::new(SIZE).save(&path);

        assert!(matches!(result, Err(GenerationError::ImageExport { .. })));
    }

    // Tests loading a non-image file is a load error carrying the path
    #[test]
    fn test_load_invalid_fragment() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fake.png");
        fs::write(&path, "not a png").unwrap();

        match load_fragment(&path) {
            Err(GenerationError::ImageLoad { path: failed, .. }) => assert_eq!(failed, path),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests a fragment is decoded by content even when its extension is unknown
    #[test]
    fn test_load_fragment_unrecognized_extension() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("bg.png");
        let renamed = dir.path().join("bg.img");
        RgbaImage::from_pixel(3, 2, GREEN).save(&png).unwrap();
        fs::rename(&png, &renamed).unwrap();

        let loaded = load_fragment(&renamed).unwrap();

        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(*loaded.get_pixel(1, 1), GREEN);
    }

    // Tests a fragment is decoded by content even when its extension names another format
    #[test]
    fn test_load_fragment_mismatched_extension() {
        let dir = TempDir::new().unwrap();
        let png = dir.path().join("bg.png");
        let renamed = dir.path().join("bg.jpg");
        RgbaImage::from_pixel(1, 1, GREEN).save(&png).unwrap();
        fs::rename(&png, &renamed).unwrap();

        let loaded = load_fragment(&renamed).unwrap();

        assert_eq!(*loaded.get_pixel(0, 0), GREEN);
    }

    // Tests a missing fragment file is a filesystem error
    #[test]
    fn test_load_missing_fragment() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.png");

        let result = load_fragment(&path);

        assert!(matches!(result, Err(GenerationError::FileSystem { .. })));
    }
}
