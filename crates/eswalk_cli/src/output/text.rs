//! Text output formatter

use crate::commands::FileTrace;

pub fn output_text(results: &[FileTrace]) {
    print!("{}", render_text(results));

    let failures: Vec<_> = results.iter().filter(|r| r.result.is_err()).collect();
    if !failures.is_empty() {
        eprintln!("\n{} file(s) failed to trace:", failures.len());
        for failure in failures {
            if let Err(error) = &failure.result {
                eprintln!("  {}: {}", failure.path.display(), error);
            }
        }
    }
}

/// Renders successful traces. With more than one input file, each trace is
/// preceded by a `==> path <==` header.
fn render_text(results: &[FileTrace]) -> String {
    let with_headers = results.len() > 1;
    let mut out = String::new();
    let mut first = true;

    for result in results {
        let Ok(trace) = &result.result else {
            continue;
        };
        if with_headers {
            if !first {
                out.push('\n');
            }
            out.push_str(&format!("==> {} <==\n", result.path.display()));
        }
        first = false;
        for event in trace {
            out.push_str(&event.to_string());
            out.push('\n');
        }
    }
    out
}
