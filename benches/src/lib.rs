//! Helpers to generate inputs for the benchmarks

/// Build a literate source with `nb_fields` named groups, one per line.
#[must_use]
pub fn build_source(nb_fields: usize) -> String {
    let mut src = String::from("/\n    ^\n");
    for i in 0..nb_fields {
        if i > 0 {
            src.push_str("    \\s* , \\s*              # separator\n");
        }
        src.push_str(&format!(
            "    (?<field{i}> [^,\\#]* )   # field number {i}\n"
        ));
    }
    src.push_str("    $\n/ d m\n");
    src
}

/// Build a haystack of `nb_lines` lines matching a source built by [`build_source`].
#[must_use]
pub fn build_haystack(nb_fields: usize, nb_lines: usize) -> String {
    let line = (0..nb_fields)
        .map(|i| format!("value{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    vec![line; nb_lines].join("\n")
}
