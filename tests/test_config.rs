use oneshotd::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.workers, 0);
    assert_eq!(cfg.server.max_request_buffer, 4096);
    assert_eq!(cfg.static_files.root, std::path::PathBuf::from("./public"));
    assert_eq!(cfg.static_files.default_document, "home.html");
    assert_eq!(cfg.static_files.error_document, "error.html");
}

#[test]
fn test_config_from_full_yaml() {
    let yaml = r#"
server:
  listen_addr: "0.0.0.0:3000"
  workers: 8
  max_request_buffer: 8192
static_files:
  root: "/srv/http"
  default_document: "index.html"
  error_document: "missing.html"
"#;

    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    assert_eq!(cfg.server.workers, 8);
    assert_eq!(cfg.server.max_request_buffer, 8192);
    assert_eq!(cfg.static_files.root, std::path::PathBuf::from("/srv/http"));
    assert_eq!(cfg.static_files.default_document, "index.html");
    assert_eq!(cfg.static_files.error_document, "missing.html");
}

#[test]
fn test_config_partial_yaml_keeps_defaults() {
    let yaml = r#"
server:
  listen_addr: "127.0.0.1:9000"
"#;

    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.server.max_request_buffer, 4096);
    assert_eq!(cfg.static_files.default_document, "home.html");
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    assert!(Config::from_yaml("server: [not, a, mapping]").is_err());
}

#[test]
fn test_explicit_worker_count_is_respected() {
    let yaml = "server:\n  workers: 3\n";
    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.worker_count(), 3);
}

#[test]
fn test_auto_worker_count_is_positive() {
    let cfg = Config::default();

    // 0 means auto-detect: twice the hardware concurrency, never below the floor
    assert!(cfg.server.worker_count() >= 2);
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();

    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.static_files.root, cfg2.static_files.root);
}
