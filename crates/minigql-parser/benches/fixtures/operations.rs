//! Generated documents for size-scaling benchmarks.

const OPERATION_KINDS: [&str; 3] = ["query", "mutation", "subscription"];

/// A single query whose selection is `depth` levels of `child { ... }`,
/// each level also selecting `id`. The innermost level selects `name`.
pub fn deeply_nested_query(depth: usize) -> String {
    let open: String = (0..depth)
        .map(|level| if level == 0 { "root { id " } else { "child { id " })
        .collect();
    let close = "} ".repeat(depth);
    format!("query DeeplyNested {{ {open}name {close}}}\n")
}

/// `count` named operations cycling through query, mutation and
/// subscription. Each one declares a variable and passes it alongside
/// an object literal.
pub fn many_operations(count: usize) -> String {
    (0..count)
        .map(|i| {
            let kind = OPERATION_KINDS[i % OPERATION_KINDS.len()];
            format!(
                "{kind} Operation{i}($id: ID!, $tags: [String]) {{\n  \
                 node(id: $id, index: {i}, filter: {{ tags: $tags, limit: {i} }}) {{\n    \
                 id\n    name\n  }}\n}}\n\n"
            )
        })
        .collect()
}
