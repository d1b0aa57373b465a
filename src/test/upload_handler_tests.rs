use std::fs;
use std::path::PathBuf;

use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;

use crate::rocket;
use crate::service::picture_service::PictureStore;
use crate::test::*;

fn client() -> Client {
    PictureStore::new(pictures_dir()).prepare().unwrap();
    Client::tracked(rocket(&test_config())).unwrap()
}

fn multipart_header() -> Header<'static> {
    Header::new("Content-Type", "multipart/form-data; boundary=BOUNDARY")
}

fn file_body(field: &str, file_name: &str, contents: &str) -> String {
    format!(
        "--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
Content-Type: image/png\r\n\
\r\n\
{contents}\r\n\
--BOUNDARY--\r\n"
    )
}

fn stored_files() -> Vec<PathBuf> {
    fs::read_dir(pictures_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

#[test]
fn upload_photo() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("foto", "photo.jpg", "pretend this is a jpeg"))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(res.into_string().unwrap_or_default(), "");
    let files = stored_files();
    assert_eq!(files.len(), 1);
    assert_eq!(
        fs::read_to_string(&files[0]).unwrap(),
        "pretend this is a jpeg"
    );
    cleanup();
}

#[test]
fn upload_photo_names_file_after_timestamp() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("foto", "IMG_0001.jpg", "bytes"))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let files = stored_files();
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    let timestamp = name.strip_suffix(".jpg").unwrap();
    assert!(timestamp.parse::<u64>().is_ok());
    cleanup();
}

#[test]
fn upload_photo_keeps_extension_case() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("foto", "photo.PNG", "bytes"))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let files = stored_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension().unwrap(), "PNG");
    cleanup();
}

#[test]
fn upload_photo_without_extension() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("foto", "photo", "bytes"))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let files = stored_files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].extension(), None);
    cleanup();
}

#[test]
fn upload_photo_ignores_other_fields() {
    let client = client();
    let body = "--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"caption\"\r\n\
\r\n\
at the beach\r\n\
--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"foto\"; filename=\"beach.jpeg\"\r\n\
Content-Type: image/jpeg\r\n\
\r\n\
sand\r\n\
--BOUNDARY--\r\n";
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let files = stored_files();
    assert_eq!(files.len(), 1);
    assert_eq!(fs::read_to_string(&files[0]).unwrap(), "sand");
    cleanup();
}

#[test]
fn upload_photo_missing_foto_field() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("file", "photo.jpg", "bytes"))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert_eq!(res.into_string().unwrap_or_default(), "");
    assert!(stored_files().is_empty());
    cleanup();
}

#[test]
fn upload_photo_too_large() {
    let client = client();
    let contents = "a".repeat(11 * 1024 * 1024);
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("foto", "huge.jpg", &contents))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert!(stored_files().is_empty());
    cleanup();
}

#[test]
fn upload_photo_malformed_body() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body("this is not multipart at all")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert!(stored_files().is_empty());
    cleanup();
}

#[test]
fn upload_photo_not_multipart() {
    let client = client();
    let res = client.post(uri!("/")).body("foto=hello").dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert_eq!(res.into_string().unwrap_or_default(), "");
    assert!(stored_files().is_empty());
    cleanup();
}

#[test]
fn upload_photo_url_encoded_form() {
    let client = client();
    let res = client
        .post(uri!("/"))
        .header(ContentType::Form)
        .body("foto=hello")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert_eq!(res.into_string().unwrap_or_default(), "");
    assert!(stored_files().is_empty());
    cleanup();
}

#[test]
fn upload_photo_foto_is_a_plain_field() {
    let client = client();
    let body = "--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"foto\"\r\n\
\r\n\
hello\r\n\
--BOUNDARY--\r\n";
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert!(stored_files().is_empty());
    cleanup();
}

// what a browser sends when the form is submitted without picking a file
#[test]
fn upload_photo_no_file_picked() {
    let client = client();
    let body = "--BOUNDARY\r\n\
Content-Disposition: form-data; name=\"foto\"; filename=\"\"\r\n\
Content-Type: application/octet-stream\r\n\
\r\n\
\r\n\
--BOUNDARY--\r\n";
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert!(stored_files().is_empty());
    cleanup();
}

#[test]
fn upload_photo_missing_directory() {
    let client = client();
    cleanup();
    let res = client
        .post(uri!("/"))
        .header(multipart_header())
        .body(file_body("foto", "photo.jpg", "bytes"))
        .dispatch();
    assert_eq!(res.status(), Status::InternalServerError);
    assert_eq!(res.into_string().unwrap_or_default(), "");
}
