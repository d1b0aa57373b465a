use std::fs::DirBuilder;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use rocket::fs::TempFile;
use rocket::tokio::fs::File;
use rocket::tokio::io::{self, AsyncRead, AsyncWriteExt};

use crate::model::error::startup_errors::StartupError;
use crate::model::error::upload_errors::UploadError;
use crate::model::picture::{extension_of, StoredPicture};

/// where uploaded pictures end up. Set once at startup and managed by rocket
#[derive(Debug, Clone, PartialEq)]
pub struct PictureStore {
    dir: PathBuf,
}

impl PictureStore {
    pub fn new(dir: impl Into<PathBuf>) -> PictureStore {
        PictureStore { dir: dir.into() }
    }

    #[cfg(test)]
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// ensures that the pictures directory exists on the file system, creating parents as needed
    pub fn prepare(&self) -> Result<(), StartupError> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o777);
        }
        builder.create(&self.dir).map_err(|e| {
            StartupError::PicturesDirectory(format!("{}: {e}", self.dir.display()))
        })
    }

    /// saves the uploaded `foto` part as `<dir>/<timestamp><extension>`, the extension coming from `file_name`
    pub async fn save_upload(
        &self,
        upload: &TempFile<'_>,
        file_name: &str,
        timestamp: u64,
    ) -> Result<StoredPicture, UploadError> {
        let reader = upload.open().await.map_err(|e| {
            log::error!("Could not read the uploaded file: {e}");
            UploadError::UnreadableFile
        })?;
        rocket::tokio::pin!(reader);
        self.save(&mut reader, extension_of(file_name), timestamp)
            .await
    }

    /// creates the destination file and copies everything from `reader` into it.
    ///
    /// A failed copy leaves whatever was written so far on disk
    pub async fn save<R>(
        &self,
        reader: &mut R,
        extension: &str,
        timestamp: u64,
    ) -> Result<StoredPicture, UploadError>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        let picture = StoredPicture::new(&self.dir, timestamp, extension);
        let mut out = File::create(&picture.path).await.map_err(|e| {
            log::error!("Could not create {picture}: {e}");
            UploadError::CreateFailed
        })?;
        let copied = io::copy(reader, &mut out).await;
        let flushed = out.flush().await;
        match copied.and(flushed) {
            Ok(_) => Ok(picture),
            Err(e) => {
                log::error!("Could not write {picture}: {e}");
                Err(UploadError::WriteFailed)
            }
        }
    }
}

/// the file name exactly as the client sent it, path and all.
///
/// `None` when the part had no file name or an empty one, which is what browsers send when no file was picked.
/// Rocket's [`TempFile::name`] strips the extension while sanitizing, so this reads the raw value
pub fn client_file_name<'a>(upload: &'a TempFile<'_>) -> Option<&'a str> {
    upload
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str())
        .filter(|name| !name.is_empty())
}

/// whole seconds since the unix epoch
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|since| since.as_secs())
        .unwrap_or_default()
}
