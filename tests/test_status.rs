use oneshotd::http::status::StatusCode;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::PayloadTooLarge.as_u16(), 413);
    assert_eq!(StatusCode::ServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    assert_eq!(StatusCode::VersionNotSupported.as_u16(), 505);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::PayloadTooLarge.reason_phrase(),
        "Request Entity Too Large"
    );
    assert_eq!(StatusCode::ServerError.reason_phrase(), "Server Error");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    assert_eq!(
        StatusCode::VersionNotSupported.reason_phrase(),
        "HTTP Version Not Supported"
    );
}

#[test]
fn test_status_line_format() {
    assert_eq!(StatusCode::Ok.status_line(), "HTTP/1.1 200 OK\r\n");
    assert_eq!(
        StatusCode::NotFound.status_line(),
        "HTTP/1.1 404 Not Found\r\n"
    );
    assert_eq!(
        StatusCode::VersionNotSupported.status_line(),
        "HTTP/1.1 505 HTTP Version Not Supported\r\n"
    );
}
