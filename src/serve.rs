//! Local preview server for a built site.
//!
//! A deliberately small, single-threaded HTTP responder over the output
//! directory: just enough to preview trailing-slash URLs and the root
//! redirect the way a real host serves them. It binds loopback only and is
//! not meant to face anything but a browser on the same machine.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind 127.0.0.1:{port}: {source}")]
    Bind { port: u16, source: std::io::Error },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a request target onto a file under `root`.
///
/// `/` and every directory-style path resolve to their `index.html`; query
/// strings and fragments are dropped. A target that climbs out of the root
/// or names nothing on disk resolves to `None`.
fn resolve_file(root: &Path, target: &str) -> Option<PathBuf> {
    let path = target.split(['?', '#']).next().unwrap_or(target);
    let mut file = root.to_path_buf();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => return None,
            _ => file.push(part),
        }
    }
    if file.is_dir() {
        file.push("index.html");
    }
    file.is_file().then_some(file)
}

fn content_type(file: &Path) -> &'static str {
    match file.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

fn handle(stream: &TcpStream, root: &Path) -> Result<(), ServeError> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let target = request_line.split_whitespace().nth(1).unwrap_or("/");

    let mut stream = stream;
    match resolve_file(root, target) {
        Some(file) => {
            let body = fs::read(&file)?;
            let header = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: {}\r\ncontent-length: {}\r\n\r\n",
                content_type(&file),
                body.len()
            );
            stream.write_all(header.as_bytes())?;
            stream.write_all(&body)?;
        }
        None => {
            let body = "404 not found";
            let header = format!(
                "HTTP/1.1 404 Not Found\r\ncontent-type: text/plain; charset=utf-8\r\ncontent-length: {}\r\n\r\n",
                body.len()
            );
            stream.write_all(header.as_bytes())?;
            stream.write_all(body.as_bytes())?;
        }
    }
    Ok(())
}

/// Serve `root` on `127.0.0.1:port` until interrupted.
pub fn serve(root: &Path, port: u16) -> Result<(), ServeError> {
    let listener = TcpListener::bind(("127.0.0.1", port))
        .map_err(|source| ServeError::Bind { port, source })?;
    println!(
        "Serving {} at http://127.0.0.1:{port}/ (Ctrl+C to stop)",
        root.display()
    );

    for stream in listener.incoming() {
        let stream = stream?;
        // One bad connection should not take the preview down.
        if let Err(err) = handle(&stream, root) {
            eprintln!("request failed: {err}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("index.html"), "<p>home</p>").unwrap();
        fs::create_dir_all(tmp.path().join("guide/one")).unwrap();
        fs::write(tmp.path().join("guide/one/index.html"), "<p>one</p>").unwrap();
        tmp
    }

    #[test]
    fn resolve_root_serves_site_index() {
        let tmp = site_fixture();
        let file = resolve_file(tmp.path(), "/").unwrap();
        assert_eq!(file, tmp.path().join("index.html"));
    }

    #[test]
    fn resolve_directory_with_and_without_trailing_slash() {
        let tmp = site_fixture();
        let expected = tmp.path().join("guide/one/index.html");
        assert_eq!(resolve_file(tmp.path(), "/guide/one/").unwrap(), expected);
        assert_eq!(resolve_file(tmp.path(), "/guide/one").unwrap(), expected);
    }

    #[test]
    fn resolve_serves_files_directly() {
        let tmp = site_fixture();
        assert_eq!(
            resolve_file(tmp.path(), "/guide/one/index.html").unwrap(),
            tmp.path().join("guide/one/index.html")
        );
    }

    #[test]
    fn resolve_drops_query_and_fragment() {
        let tmp = site_fixture();
        let expected = tmp.path().join("guide/one/index.html");
        assert_eq!(
            resolve_file(tmp.path(), "/guide/one/?from=pager").unwrap(),
            expected
        );
        assert_eq!(
            resolve_file(tmp.path(), "/guide/one/#setup").unwrap(),
            expected
        );
    }

    #[test]
    fn resolve_rejects_parent_escape() {
        let tmp = site_fixture();
        assert!(resolve_file(tmp.path(), "/../secret").is_none());
        assert!(resolve_file(tmp.path(), "/guide/../../secret").is_none());
    }

    #[test]
    fn resolve_missing_path_is_none() {
        let tmp = site_fixture();
        assert!(resolve_file(tmp.path(), "/nope/").is_none());
    }

    #[test]
    fn content_types_for_site_files() {
        assert_eq!(
            content_type(Path::new("a/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(content_type(Path::new("s.css")), "text/css; charset=utf-8");
        assert_eq!(content_type(Path::new("x.bin")), "application/octet-stream");
    }
}
