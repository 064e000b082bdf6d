//! Parity-check graph expansion (spec §4.2).
//!
//! Turns a [`CodeTable`]'s compressed `(deg, len, pos)` seed lists into the
//! full bipartite Tanner graph: every check row's variable-column
//! neighbors (`check_to_var`) and every variable column's check-row
//! neighbors (`var_to_check`), in the DVB-S2 IRA structure:
//!
//! - **Information columns** (`0..k`): grouped into blocks of 360 columns.
//!   Group `g`'s seed list names the check rows that its *first* column
//!   connects to; column `i` within the group (`0..360`) connects to rows
//!   `(seed + i * q) mod m` for each seed, per spec §4.2/§6.
//! - **Parity columns** (`k..n`): the standard's dual-diagonal accumulator
//!   — row 0 touches only column `k`; row `j >= 1` touches columns
//!   `k + j - 1` and `k + j`. This is exactly the structure that makes the
//!   encoder's running-XOR recurrence satisfy every check equation.

use crate::error::GraphError;
use crate::table::CodeTable;

/// Expanded bipartite Tanner graph for one code.
#[derive(Debug, Clone)]
pub struct ParityCheckGraph {
    pub n: usize,
    pub m: usize,
    pub check_to_var: Vec<Vec<u32>>,
    pub var_to_check: Vec<Vec<u32>>,
}

/// Expand a [`CodeTable`] into its full Tanner graph.
///
/// Returns [`GraphError`] if a seed or derived column index falls outside
/// its valid range — a malformed table, per spec §7(b).
pub fn expand(table: &CodeTable) -> Result<ParityCheckGraph, GraphError> {
    let n = table.n;
    let m = table.m();
    let q = table.q.max(1);

    let mut var_to_check: Vec<Vec<u32>> = vec![Vec::new(); n];

    let mut pos_iter = table.pos.iter().copied();
    let mut group_index: usize = 0;
    for (&deg, &len) in table.deg.iter().zip(table.len.iter()) {
        for _ in 0..len {
            let mut seeds = Vec::with_capacity(deg as usize);
            for _ in 0..deg {
                let seed = pos_iter
                    .next()
                    .ok_or(GraphError { index: 0, bound: m as u32 })?;
                if seed as usize >= m {
                    return Err(GraphError {
                        index: seed,
                        bound: m as u32,
                    });
                }
                seeds.push(seed);
            }

            for i in 0..360usize {
                let col = group_index * 360 + i;
                if col >= table.k {
                    return Err(GraphError {
                        index: col as u32,
                        bound: n as u32,
                    });
                }
                for &seed in &seeds {
                    let row = (seed as usize + i * q) % m;
                    var_to_check[col].push(row as u32);
                }
            }
            group_index += 1;
        }
    }
    debug_assert_eq!(group_index * 360, table.k, "table groups must cover all k columns");

    // Dual-diagonal parity accumulator.
    for j in 0..m {
        let col = table.k + j;
        var_to_check[col].push(j as u32);
        if j > 0 {
            var_to_check[col].push((j - 1) as u32);
        }
    }

    let mut check_to_var: Vec<Vec<u32>> = vec![Vec::new(); m];
    for (col, rows) in var_to_check.iter().enumerate() {
        for &row in rows {
            check_to_var[row as usize].push(col as u32);
        }
    }

    #[cfg(debug_assertions)]
    {
        let info_edges: usize = table
            .deg
            .iter()
            .zip(table.len.iter())
            .map(|(&d, &l)| d as usize * l as usize * 360)
            .sum();
        let parity_edges: usize = 2 * m - 1;
        let total: usize = check_to_var.iter().map(|r| r.len()).sum();
        debug_assert_eq!(total, info_edges + parity_edges);
    }

    Ok(ParityCheckGraph {
        n,
        m,
        check_to_var,
        var_to_check,
    })
}
