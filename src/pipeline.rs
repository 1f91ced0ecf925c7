//! Per-file extraction pipeline and the parallel batch front end.
//!
//! Control flow per file: declaration pass -> boundary location -> source
//! slicing -> tokenization -> batch filtering. Everything operates on data
//! already resident in memory; file and network I/O belong to the caller.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::boundary;
use crate::extractors::{ExtractorManager, MethodDeclaration, MethodRecord};
use crate::filter::{self, FilterPolicy};
use crate::lexer;

/// Assemble unfiltered records for one file from its parsed declarations.
///
/// Declarations whose body boundary cannot be located are skipped;
/// `original_code` is the exact slice `lines[start-1..end]` of the file.
pub fn assemble_records(content: &str, declarations: Vec<MethodDeclaration>) -> Vec<MethodRecord> {
    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();

    for declaration in declarations {
        let start_line = declaration.start_line;
        let end_line = match boundary::locate_method_end(&lines, start_line) {
            Some(end_line) => end_line,
            None => {
                debug!(
                    "No body boundary for method {} starting at line {}; skipping",
                    declaration.name, start_line
                );
                continue;
            }
        };

        let original_code = lines[start_line - 1..end_line].join("\n");
        let code_tokens = lexer::tokenize(&original_code);

        records.push(MethodRecord {
            signature: declaration.signature(),
            method_name: declaration.name,
            start_line,
            end_line,
            original_code,
            code_tokens,
        });
    }

    records
}

/// Extract the retained methods of a single file.
///
/// Runs the declaration pass, assembles one record per located method, and
/// applies the line-count policy over the whole per-file batch.
pub fn extract_methods(
    file_path: &str,
    content: &str,
    policy: &FilterPolicy,
) -> Result<Vec<MethodRecord>, anyhow::Error> {
    let manager = ExtractorManager::new();
    let declarations = manager.extract_declarations(file_path, content)?;
    let records = assemble_records(content, declarations);
    let kept = filter::filter_methods(records, policy);

    debug!("Extracted {} methods from file: {}", kept.len(), file_path);
    Ok(kept)
}

/// Extract methods from multiple `(file_path, content)` pairs in parallel.
///
/// Files whose declaration pass fails contribute an empty result instead of
/// failing the batch; output order matches input order despite parallel
/// execution.
pub fn extract_methods_batch(
    files: &[(String, String)],
    policy: &FilterPolicy,
) -> Vec<Vec<MethodRecord>> {
    files
        .par_iter()
        .map(|(file_path, content)| {
            extract_methods(file_path, content, policy).unwrap_or_else(|e| {
                warn!("Failed to extract methods from {}: {}", file_path, e);
                Vec::new()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALCULATOR: &str = include_str!("../test_samples/Calculator.java");

    #[test]
    fn test_assemble_records_slices_source_verbatim() {
        let content = "void f() {\n  int x = 1;\n  // note\n  return;\n}";
        let declaration = MethodDeclaration {
            name: "f".to_string(),
            modifiers: Vec::new(),
            return_type: "void".to_string(),
            parameter_types: Vec::new(),
            start_line: 1,
        };

        let records = assemble_records(content, vec![declaration]);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.start_line, 1);
        assert_eq!(record.end_line, 5);
        assert_eq!(record.original_code, content);
        assert_eq!(record.signature, "void f()");
        assert_eq!(
            record.code_tokens[..5],
            ["void", "f", "(", ")", "{"]
        );

        // Survives the default policy: four non-blank lines after stripping
        let kept = filter::filter_methods(records, &FilterPolicy::default());
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_assemble_records_skips_unterminated_bodies() {
        let content = "void f() {\n  int x = 1;";
        let declaration = MethodDeclaration {
            name: "f".to_string(),
            modifiers: Vec::new(),
            return_type: "void".to_string(),
            parameter_types: Vec::new(),
            start_line: 1,
        };
        assert!(assemble_records(content, vec![declaration]).is_empty());
    }

    #[test]
    fn test_extract_methods_applies_policy_over_file_batch() {
        let records = extract_methods("Calculator.java", CALCULATOR, &FilterPolicy::default())
            .unwrap();

        // size() has one effective line and reserved() two; both are dropped
        let names: Vec<&str> = records.iter().map(|r| r.method_name.as_str()).collect();
        assert_eq!(names, vec!["add", "clamp"]);

        let add = &records[0];
        assert_eq!(add.start_line, 18);
        assert_eq!(add.end_line, 22);
        assert_eq!(add.signature, "public int add(int, int)");
        let lines: Vec<&str> = CALCULATOR.lines().collect();
        assert_eq!(add.original_code, lines[17..22].join("\n"));
        assert!(add.original_code.ends_with('}'));

        let clamp = &records[1];
        assert_eq!(clamp.start_line, 27);
        assert_eq!(clamp.end_line, 37);
        assert_eq!(clamp.signature, "public static int clamp(int, int, int)");
        assert!(clamp.original_code.starts_with("    public static int clamp(int value,"));
    }

    #[test]
    fn test_extract_methods_rejects_unsupported_files() {
        assert!(extract_methods("notes.txt", "not java", &FilterPolicy::default()).is_err());
    }

    #[test]
    fn test_batch_preserves_order_and_degrades_failures() {
        let files = vec![
            ("Calculator.java".to_string(), CALCULATOR.to_string()),
            ("README.md".to_string(), "# not java\n".to_string()),
            ("Calculator.java".to_string(), CALCULATOR.to_string()),
        ];

        let results = extract_methods_batch(&files, &FilterPolicy::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].len(), 2);
        assert!(results[1].is_empty());
        assert_eq!(results[0], results[2]);
    }
}
