use rocket::fs::TempFile;
use rocket::FromForm;

/// the form sent by the upload page. Everything but `foto` is ignored
#[derive(FromForm)]
pub struct PhotoUpload<'a> {
    /// kept optional so a missing part can be told apart from a broken body
    pub foto: Option<TempFile<'a>>,
}
