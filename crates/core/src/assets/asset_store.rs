use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use thiserror::Error;

use crate::shared::constants::{MASK_ASSET_NAME, MODEL_ASSET_NAME};

static BUNDLED_MASK: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../assets/mask.png"));
static BUNDLED_MODEL: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../assets/seeta_fd_frontal_v1.0.bin"
));

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode mask image: {0}")]
    Mask(#[source] image::ImageError),
    #[error("mask image has zero dimensions")]
    EmptyMask,
    #[error("cannot unpack detector model: {0}")]
    Model(String),
}

/// Process-wide read-only assets: the mask bitmap and the parsed detector model.
///
/// Built once at startup. Any failure here is a packaging defect and the
/// caller is expected to abort rather than serve requests.
pub struct AssetStore {
    mask: Arc<RgbaImage>,
    model: rustface::Model,
    model_len: usize,
}

impl AssetStore {
    /// Builds the store from the mask and model compiled into the binary.
    pub fn bundled() -> Result<Self, AssetError> {
        Self::from_bytes(BUNDLED_MASK, BUNDLED_MODEL)
    }

    /// Loads [`MASK_ASSET_NAME`] and [`MODEL_ASSET_NAME`] from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mask = read_asset(&dir.join(MASK_ASSET_NAME))?;
        let model = read_asset(&dir.join(MODEL_ASSET_NAME))?;
        Self::from_bytes(&mask, &model)
    }

    /// Builds the store from in-memory asset bytes.
    pub fn from_bytes(mask: &[u8], model: &[u8]) -> Result<Self, AssetError> {
        let mask = image::load_from_memory(mask)
            .map_err(AssetError::Mask)?
            .to_rgba8();
        if mask.width() == 0 || mask.height() == 0 {
            return Err(AssetError::EmptyMask);
        }

        let model_len = model.len();
        let model =
            rustface::read_model(Cursor::new(model)).map_err(|e| AssetError::Model(e.to_string()))?;

        Ok(Self {
            mask: Arc::new(mask),
            model,
            model_len,
        })
    }

    pub fn mask(&self) -> &Arc<RgbaImage> {
        &self.mask
    }

    pub fn model(&self) -> &rustface::Model {
        &self.model
    }

    pub fn model_len(&self) -> usize {
        self.model_len
    }
}

fn read_asset(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|e| AssetError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 128]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_bundled_assets_load() {
        let store = AssetStore::bundled().unwrap();
        assert_eq!(store.mask().dimensions(), (256, 256));
        assert_eq!(store.model_len(), BUNDLED_MODEL.len());
        assert!(store.model_len() > 0);
    }

    #[test]
    fn test_load_missing_dir_reports_mask_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        match AssetStore::load(&missing) {
            Err(AssetError::Read { path, .. }) => assert_eq!(path, missing.join(MASK_ASSET_NAME)),
            other => panic!("expected read error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_missing_model_reports_model_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MASK_ASSET_NAME), png_bytes(8, 8)).unwrap();
        match AssetStore::load(dir.path()) {
            Err(AssetError::Read { path, .. }) => {
                assert_eq!(path, dir.path().join(MODEL_ASSET_NAME))
            }
            other => panic!("expected read error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_corrupt_mask_rejected() {
        let result = AssetStore::from_bytes(b"not an image", &[0u8; 16]);
        assert!(matches!(result, Err(AssetError::Mask(_))));
    }

    #[test]
    fn test_empty_model_rejected() {
        let result = AssetStore::from_bytes(&png_bytes(8, 8), &[]);
        assert!(matches!(result, Err(AssetError::Model(_))));
    }

    #[test]
    fn test_corrupt_model_from_dir_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MASK_ASSET_NAME), png_bytes(8, 8)).unwrap();
        fs::write(dir.path().join(MODEL_ASSET_NAME), b"").unwrap();
        assert!(matches!(
            AssetStore::load(dir.path()),
            Err(AssetError::Model(_))
        ));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = AssetError::Read {
            path: PathBuf::from("/assets/mask.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot read /assets/mask.png: missing");
    }
}
