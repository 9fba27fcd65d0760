//! # Output Formatting
//!
//! Colored status lines and response rendering for the terminal.

use jira_agile::ResponseScheme;
use owo_colors::OwoColorize;

/// Print a success message
pub fn print_success(message: &str) {
  eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Format a status code, green for success and red otherwise
pub fn format_status(code: u16) -> String {
  if (200..300).contains(&code) {
    code.green().to_string()
  } else {
    code.red().to_string()
  }
}

/// Render a response body: pretty JSON when it parses, raw text otherwise
pub fn render_body(scheme: &ResponseScheme) -> String {
  match serde_json::from_slice::<serde_json::Value>(&scheme.bytes) {
    Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| scheme.text()),
    Err(_) => scheme.text(),
  }
}

/// Status line and headers, in the order the server sent them
pub fn render_head(scheme: &ResponseScheme) -> String {
  let mut head = format!("{} {} {}\n", format_status(scheme.code), scheme.method, scheme.endpoint);
  for (name, value) in &scheme.headers {
    head.push_str(&format!("{}: {}\n", name.cyan(), value.to_str().unwrap_or("<binary>")));
  }
  head
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scheme_with_body(body: &str) -> ResponseScheme {
    ResponseScheme {
      code: 200,
      endpoint: "https://example.atlassian.net/rest/agile/1.0/board/1".to_string(),
      method: "GET".to_string(),
      bytes: body.as_bytes().to_vec(),
      ..Default::default()
    }
  }

  /// Test pretty printing of a JSON body
  #[test]
  fn test_render_body_pretty_prints_json() {
    let scheme = scheme_with_body(r#"{"id":1,"name":"Board"}"#);
    assert_eq!(render_body(&scheme), "{\n  \"id\": 1,\n  \"name\": \"Board\"\n}");
  }

  /// Test that non-JSON bodies are printed as is
  #[test]
  fn test_render_body_falls_back_to_text() {
    let scheme = scheme_with_body("<html>Service Unavailable</html>");
    assert_eq!(render_body(&scheme), "<html>Service Unavailable</html>");
  }

  #[test]
  fn test_render_head_lists_headers() {
    let mut scheme = scheme_with_body("");
    scheme.headers.insert("x-arequestid", "abc123".parse().unwrap());

    let head = render_head(&scheme);
    assert!(head.contains("GET https://example.atlassian.net/rest/agile/1.0/board/1"));
    assert!(head.contains("x-arequestid"));
    assert!(head.contains("abc123"));
  }
}
