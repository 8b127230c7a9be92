// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_guide_content(sections: usize) -> String {
    let mut content = String::from(
        "---\ntitle: Benchmark Guide\ntags: [bench, parsing]\nlevel of complexity: Intermediate\n---\n\n## Table of Contents\n",
    );
    for section in 0..sections {
        content.push_str(&format!("- [Section {section}](#section-{section})\n"));
    }
    content.push('\n');

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str(
            "A paragraph with **bold**, _italic_, *more italic*, `inline code` and a [link](https://example.com).\n\n",
        );
        content.push_str("> A quoted insight with **emphasis**.\n\n");
        content.push_str("### Steps\n1. First step\n2. Second step\n3. Third step\n\n");
        content.push_str("- Bullet one\n* Bullet two\n\n");
        content.push_str("```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n");
    }

    content
}
