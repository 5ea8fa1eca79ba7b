use super::*;

fn request(headers: &[(&str, &str)]) -> HttpRequest {
    HttpRequest {
        method: Method::Get,
        url: "http://localhost:5000/api/todos".to_owned(),
        headers: headers.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
        body: None,
    }
}

#[test]
fn header_lookup_is_case_insensitive() {
    let req = request(&[("Authorization", "Bearer t")]);
    assert_eq!(req.header("authorization"), Some("Bearer t"));
    assert_eq!(req.header("AUTHORIZATION"), Some("Bearer t"));
    assert_eq!(req.header("Content-Type"), None);
}

#[test]
fn success_is_2xx_only() {
    let resp = |status| HttpResponse { status, body: String::new() };
    assert!(resp(200).is_success());
    assert!(resp(204).is_success());
    assert!(!resp(199).is_success());
    assert!(!resp(301).is_success());
    assert!(!resp(401).is_success());
}

#[test]
fn method_names() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Patch.as_str(), "PATCH");
    assert_eq!(Method::Delete.as_str(), "DELETE");
}

#[tokio::test]
async fn offline_transport_reports_network_error() {
    let err = OfflineTransport.send(request(&[])).await.unwrap_err();
    assert!(matches!(err, TransportError::Network(msg) if msg.contains("GET http://localhost:5000/api/todos")));
}
