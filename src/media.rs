use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use mime_guess::mime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Infer what kind of asset a picked file is from its MIME type. Anything
/// that is neither image nor video is rejected before a selection exists.
pub fn classify(path: &Path) -> Result<MediaKind, BookingError> {
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();

    if mime_type.type_() == mime::IMAGE {
        Ok(MediaKind::Image)
    } else if mime_type.type_() == mime::VIDEO {
        Ok(MediaKind::Video)
    } else {
        Err(BookingError::UnsupportedMediaType(
            mime_type.essence_str().to_string(),
        ))
    }
}

/// Hands out preview copies of picked media under a private directory.
pub struct PreviewStore {
    dir: PathBuf,
}

impl PreviewStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create preview directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Copy the source file into the preview directory under a fresh name.
    /// The returned handle owns the copy and deletes it when dropped.
    pub fn acquire(&self, source: &Path) -> Result<MediaPreview> {
        let file_name = match source.extension() {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext.to_string_lossy()),
            None => Uuid::new_v4().to_string(),
        };
        let path = self.dir.join(file_name);

        fs::copy(source, &path).with_context(|| {
            format!(
                "Failed to copy {} into preview directory",
                source.display()
            )
        })?;

        Ok(MediaPreview {
            path,
            released: false,
        })
    }
}

/// A transient preview copy of the selected media. Exclusively owned by the
/// current booking draft; replacing or clearing the selection drops the old
/// handle, which removes the file on the spot.
#[derive(Debug)]
pub struct MediaPreview {
    path: PathBuf,
    released: bool,
}

impl MediaPreview {
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn remove_file(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(err) = fs::remove_file(&self.path) {
            warn!(
                "Failed to remove media preview {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

impl Drop for MediaPreview {
    fn drop(&mut self) {
        self.remove_file();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_images_and_videos_by_extension() {
        assert_eq!(classify(Path::new("ad.png")).unwrap(), MediaKind::Image);
        assert_eq!(classify(Path::new("ad.jpg")).unwrap(), MediaKind::Image);
        assert_eq!(classify(Path::new("spot.mp4")).unwrap(), MediaKind::Video);
        assert_eq!(classify(Path::new("spot.mov")).unwrap(), MediaKind::Video);
    }

    #[test]
    fn rejects_everything_else() {
        let err = classify(Path::new("contract.pdf")).unwrap_err();
        assert_eq!(
            err,
            BookingError::UnsupportedMediaType("application/pdf".to_string())
        );
        assert!(matches!(
            classify(Path::new("mystery")),
            Err(BookingError::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn preview_copy_is_removed_on_drop() {
        let scratch = std::env::temp_dir().join(format!("billaboard-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&scratch).unwrap();

        let source = scratch.join("ad.png");
        fs::write(&source, b"not a real png").unwrap();

        let store = PreviewStore::new(scratch.join("previews")).unwrap();
        let preview = store.acquire(&source).unwrap();
        let preview_path = preview.path().to_path_buf();
        assert!(preview_path.exists());
        assert_eq!(preview_path.extension().unwrap(), "png");

        drop(preview);
        assert!(!preview_path.exists());

        fs::remove_dir_all(&scratch).unwrap();
    }

    #[test]
    fn acquiring_a_missing_source_fails() {
        let scratch = std::env::temp_dir().join(format!("billaboard-test-{}", Uuid::new_v4()));
        let store = PreviewStore::new(scratch.clone()).unwrap();
        assert!(store.acquire(Path::new("/nonexistent/ad.png")).is_err());
        fs::remove_dir_all(&scratch).unwrap();
    }
}
