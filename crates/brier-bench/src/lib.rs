//! Shared helpers for the Brier benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Render an open n×n grid: hedge border, empty interior, `S` in the
/// top-left interior cell and `E` in the bottom-right one.
///
/// The flood fill has to visit every interior cell, which makes this the
/// worst case for the reachability stage at a given size and the fixture
/// for the linear-scaling benchmarks.
pub fn open_grid(n: usize) -> String {
    assert!(n >= 3, "need room for border, start, and end");
    let mut lines = vec!["#".repeat(n)];
    for row in 1..n - 1 {
        let mut line = String::with_capacity(n);
        line.push('#');
        for col in 1..n - 1 {
            line.push(match (row, col) {
                (1, 1) => 'S',
                (r, c) if r == n - 2 && c == n - 2 => 'E',
                _ => ' ',
            });
        }
        line.push('#');
        lines.push(line);
    }
    lines.push("#".repeat(n));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use brier_map::compile;

    #[test]
    fn open_grid_compiles_at_every_benchmark_size() {
        for n in [4, 16, 64] {
            let map = compile(&open_grid(n)).unwrap();
            assert_eq!(map.width(), n as u32);
            assert_eq!(map.height(), n as u32);
        }
    }
}
