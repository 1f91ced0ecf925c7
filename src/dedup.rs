//! Order-preserving duplicate removal for downstream dataset assembly.
//!
//! Vendored copies and template-generated sources make the same method show
//! up many times across a crawl; the dataset wants each once.

use std::collections::HashSet;

use crate::extractors::MethodRecord;

/// Drop records whose name and body were already seen, keeping the first
/// occurrence of each and the overall order.
///
/// Keys are md5 digests so the seen-set holds hex strings rather than whole
/// method bodies. The key ranges over whatever slice of the dataset the
/// caller passes in; provenance-scoped deduplication (per repository, per
/// file) means partitioning before calling.
pub fn dedupe_methods(records: Vec<MethodRecord>) -> Vec<MethodRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record_key(record)))
        .collect()
}

fn record_key(record: &MethodRecord) -> String {
    // NUL separator keeps (name, code) pairs from colliding across the join
    let input = format!("{}\0{}", record.method_name, record.original_code);
    let digest = md5::compute(input.as_bytes());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, body: &str) -> MethodRecord {
        MethodRecord {
            method_name: name.to_string(),
            start_line: 1,
            end_line: 1 + body.lines().count().saturating_sub(1),
            signature: format!("void {}()", name),
            original_code: body.to_string(),
            code_tokens: crate::lexer::tokenize(body),
        }
    }

    #[test]
    fn test_duplicates_are_dropped_first_wins() {
        let a = record("a", "void a() {\n    x();\n}");
        let b = record("b", "void b() {\n    y();\n}");
        let deduped = dedupe_methods(vec![a.clone(), b.clone(), a.clone()]);
        assert_eq!(deduped, vec![a, b]);
    }

    #[test]
    fn test_same_name_different_body_is_kept() {
        let overload_int = record("f", "void f(int x) {\n    use(x);\n}");
        let overload_str = record("f", "void f(String x) {\n    use(x);\n}");
        let deduped = dedupe_methods(vec![overload_int.clone(), overload_str.clone()]);
        assert_eq!(deduped, vec![overload_int, overload_str]);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_methods(Vec::new()).is_empty());
    }
}
