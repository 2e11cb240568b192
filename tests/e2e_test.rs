// Test complete flow of the application
// Run with `cargo test --test e2e_test`

use std::fs;

use enolex::{initial_snapshot, tokenize_lines, TokenKind};

#[test]
fn e2e_test() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    // Iterate over all eno files in the data directory
    for entry in fs::read_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data")).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        if path.extension().unwrap() != "eno" {
            continue;
        }

        println!("--------------------------------------------------");
        println!("Entry: {:?}", entry.file_name());
        println!("--------------------------------------------------");

        let input = fs::read_to_string(&path).unwrap();

        // Tokenize all lines of the input file
        let mut snapshot = initial_snapshot();
        let mut lines: Vec<Vec<(TokenKind, String)>> = Vec::new();
        for line in tokenize_lines(&input) {
            for token in &line.tokens {
                println!("{}: {}", line.line_number, token);
            }
            lines.push(
                line.tokens
                    .iter()
                    .map(|t| (t.kind(), t.text().to_string()))
                    .collect(),
            );
            snapshot = line.snapshot;
        }
        println!("Lines count: {}", lines.len());

        // Open the expected output file which has the same base name as the eno file but with a
        // .tokens extension.
        let token_file_path = path.with_extension("tokens");
        let token_file = fs::File::open(&token_file_path).unwrap();
        let expected_lines: Vec<Vec<(TokenKind, String)>> = serde_json::from_reader(&token_file)
            .unwrap_or_else(|e| {
                panic!(
                    "**** Failed to read token file {}: {}",
                    token_file_path.display(),
                    e
                )
            });

        // Compare the tokens
        assert_eq!(lines, expected_lines);
        // All multiline fields are closed at the end of the document
        assert_eq!(snapshot, initial_snapshot());
    }
}
