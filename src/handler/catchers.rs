use rocket::http::Status;
use rocket::Request;

/// clients only ever get a status code back. Details stay in the server log
#[catch(default)]
pub fn empty_error(status: Status, request: &Request) -> (Status, ()) {
    log::warn!("{} {} responded with {status}", request.method(), request.uri());
    (status, ())
}
