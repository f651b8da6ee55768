//! Lint: key-hint text like `[R]` must be clickable.
//!
//! Every `render.rs` under `src/views/` builds its panels with
//! `ClickableList`. A hint such as `" [R] Start Over"` that goes through a
//! plain `cl.push(...)` shows up on screen but cannot be tapped, which
//! leaves touch users without that action.

use std::fs;
use std::path::Path;

/// True for a one-character bracket hint: `[R]`, `[x]`, `[1]`, `[-]`.
fn contains_bracket_key(s: &str) -> bool {
    s.as_bytes().windows(3).any(|w| {
        w[0] == b'['
            && w[2] == b']'
            && (w[1].is_ascii_alphanumeric() || b"-+=!?".contains(&w[1]))
    })
}

/// `(line number, line)` for every plain `.push(` that carries a bracket hint.
fn find_unclickable_hints(source: &str) -> Vec<(usize, String)> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("//")
                && contains_bracket_key(line)
                && line.contains(".push(")
                && !line.contains("push_clickable(")
        })
        .map(|(i, line)| (i + 1, line.trim().to_string()))
        .collect()
}

fn collect_render_files(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_render_files(&path, out);
        } else if path.file_name().is_some_and(|n| n == "render.rs") {
            out.push(path);
        }
    }
}

#[test]
fn key_hints_are_clickable() {
    let views_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/views");
    let mut files = Vec::new();
    collect_render_files(&views_dir, &mut files);
    assert!(!files.is_empty(), "no render.rs found under {}", views_dir.display());

    let mut report = String::new();
    for path in &files {
        let Ok(source) = fs::read_to_string(path) else {
            continue;
        };
        for (line_num, line) in find_unclickable_hints(&source) {
            report.push_str(&format!("  {}:{}: {}\n", path.display(), line_num, line));
        }
    }

    assert!(
        report.is_empty(),
        "bracket key hints pushed without a click target (use push_clickable):\n{}",
        report
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_plain_push() {
        let source = r#"cl.push(Line::from(" [R] Start Over"));"#;
        assert_eq!(find_unclickable_hints(source).len(), 1);
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"cl.push_clickable(Line::from(" [x] Python"), CHIP_BASE);"#;
        assert!(find_unclickable_hints(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"    // cl.push(Line::from(" [R] Start Over"));"#;
        assert!(find_unclickable_hints(source).is_empty());
    }

    #[test]
    fn reports_line_numbers() {
        let source = "let a = 1;\ncl.push(Line::from(\"[x] React\"));\n";
        assert_eq!(
            find_unclickable_hints(source),
            vec![(2, r#"cl.push(Line::from("[x] React"));"#.to_string())]
        );
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[R]"));
        assert!(contains_bracket_key(" [x] "));
        assert!(contains_bracket_key("[1]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[Esc]"));
        assert!(!contains_bracket_key("ab"));
    }
}
