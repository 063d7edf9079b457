use blankcheck::handlers::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_parse_url_line_with_scheme() {
    let result = parse_url_line("https://example.com");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_parse_url_line_without_scheme() {
    let result = parse_url_line("example.com");
    assert_eq!(result, Some("http://example.com".to_string()));
}

#[test]
fn test_parse_url_line_invalid() {
    let result = parse_url_line("not a valid url!!!");
    assert_eq!(result, None);
}

#[test]
fn test_load_urls_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://example.com")?;
    writeln!(temp_file, "httpbin.org")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "  https://api.example.com  ")?;

    let path = PathBuf::from(temp_file.path());
    let urls = load_urls_from_file(&path)?;

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0], "https://example.com");
    assert_eq!(urls[1], "http://httpbin.org");
    assert_eq!(urls[2], "https://api.example.com");

    Ok(())
}

#[test]
fn test_load_urls_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_urls_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No valid URLs"));
}

#[test]
fn test_load_urls_from_file_missing() {
    let result = load_urls_from_file(&PathBuf::from("/no/such/file.txt"));

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to read URL file"));
}

#[test]
fn test_resolve_targets_plain_url() {
    let targets = resolve_targets("https://example.com/").unwrap();

    assert_eq!(targets, vec!["https://example.com/".to_string()]);
}

#[test]
fn test_resolve_targets_txt_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = tempfile::Builder::new().suffix(".txt").tempfile()?;
    writeln!(temp_file, "https://one.example/")?;
    writeln!(temp_file, "https://two.example/")?;

    let token = temp_file.path().to_str().unwrap().to_string();
    let targets = resolve_targets(&token)?;

    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0], "https://one.example/");
    assert_eq!(targets[1], "https://two.example/");

    Ok(())
}

#[test]
fn test_resolve_targets_ignores_non_txt_files() -> Result<(), Box<dyn std::error::Error>> {
    // Only .txt files are read as URL lists; other paths pass through as a
    // single target.
    let mut temp_file = tempfile::Builder::new().suffix(".json").tempfile()?;
    writeln!(temp_file, "https://one.example/")?;

    let token = temp_file.path().to_str().unwrap().to_string();
    let targets = resolve_targets(&token)?;

    assert_eq!(targets, vec![token]);

    Ok(())
}

#[test]
fn test_resolve_output_path_creates_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("reports/august");
    let nested_str = nested.to_str().unwrap();

    let path = resolve_output_path(nested_str, "audit.txt").unwrap();

    assert!(nested.is_dir());
    assert_eq!(path, nested.join("audit.txt"));
}

#[test]
fn test_resolve_output_path_default_directory() {
    let path = resolve_output_path(".", "audit.txt").unwrap();

    assert_eq!(path, PathBuf::from("./audit.txt"));
}
