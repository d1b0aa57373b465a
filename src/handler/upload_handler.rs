use rocket::form::{Errors, Form};
use rocket::http::{ContentType, Status};
use rocket::State;

use crate::model::error::upload_errors::UploadError;
use crate::model::request::PhotoUpload;
use crate::service::picture_service::{client_file_name, unix_timestamp, PictureStore};

type NoContent = ();

/// accepts a picture via multipart form and stores it off.
///
/// The markdown reference to the stored file goes to stdout, never to the client.
/// Error responses only carry a status code
#[post("/", data = "<upload>", format = "multipart/form-data")]
pub async fn upload_photo(
    upload: Result<Form<PhotoUpload<'_>>, Errors<'_>>,
    store: &State<PictureStore>,
) -> (Status, NoContent) {
    let upload = match upload {
        Ok(form) => form.into_inner(),
        Err(e) => {
            log::error!("Failed to process the upload form: {e}");
            return (UploadError::MalformedForm.status(), ());
        }
    };
    // plain value fields and empty file pickers (`filename=""`) don't count as a file
    let Some((foto, file_name)) = upload
        .foto
        .as_ref()
        .and_then(|foto| client_file_name(foto).map(|name| (foto, name)))
    else {
        log::error!("No file received in the `foto` field");
        return (UploadError::MissingFile.status(), ());
    };
    match store.save_upload(foto, file_name, unix_timestamp()).await {
        Ok(picture) => {
            println!("{}", picture.markdown_reference());
            (Status::Ok, ())
        }
        Err(e) => (e.status(), ()),
    }
}

/// anything posted to `/` that isn't `multipart/form-data` ends up here
#[post("/", rank = 2)]
pub fn upload_not_a_form(content_type: Option<&ContentType>) -> (Status, NoContent) {
    match content_type {
        Some(content_type) => log::error!(
            "Failed to process the upload form: unsupported content type {content_type}"
        ),
        None => log::error!("Failed to process the upload form: missing content type"),
    }
    (UploadError::MalformedForm.status(), ())
}
