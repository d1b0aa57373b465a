use rocket::http::Status;

#[derive(PartialEq, Debug)]
pub enum UploadError {
    /// the multipart body could not be parsed, or went over the size limit
    MalformedForm,
    /// no `foto` part in the form
    MissingFile,
    /// the `foto` part was received but its bytes couldn't be read back
    UnreadableFile,
    /// couldn't create the destination file
    CreateFailed,
    /// couldn't copy the bytes into the destination file
    WriteFailed,
}

impl UploadError {
    pub fn status(&self) -> Status {
        match self {
            UploadError::MalformedForm | UploadError::MissingFile | UploadError::UnreadableFile => {
                Status::BadRequest
            }
            UploadError::CreateFailed | UploadError::WriteFailed => Status::InternalServerError,
        }
    }
}
