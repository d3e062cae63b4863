//! Shared helpers for integration tests.

#![allow(dead_code)]

use u_minimax::table::DistanceTable;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every directed tour starting and ending at location 0.
pub fn all_tours(n: usize) -> Vec<Vec<usize>> {
    fn permute(rest: &mut Vec<usize>, k: usize, out: &mut Vec<Vec<usize>>) {
        if k == rest.len() {
            let mut tour = Vec::with_capacity(rest.len() + 2);
            tour.push(0);
            tour.extend_from_slice(rest);
            tour.push(0);
            out.push(tour);
            return;
        }
        for i in k..rest.len() {
            rest.swap(k, i);
            permute(rest, k + 1, out);
            rest.swap(k, i);
        }
    }

    let mut rest: Vec<usize> = (1..n).collect();
    let mut out = Vec::new();
    permute(&mut rest, 0, &mut out);
    out
}

/// Smallest bottleneck over every tour, by enumeration.
pub fn brute_force_bottleneck<L>(table: &DistanceTable<L>) -> u64 {
    all_tours(table.len())
        .iter()
        .map(|tour| table.tour_bottleneck(tour))
        .min()
        .unwrap_or(0)
}

/// Returns `true` if `tour` visits `0..n` once each and returns to 0.
pub fn is_valid_tour(tour: &[usize], n: usize) -> bool {
    if tour.len() != n + 1 || tour[0] != 0 || tour[n] != 0 {
        return false;
    }
    let mut seen = vec![false; n];
    tour[..n].iter().all(|&c| c < n && !std::mem::replace(&mut seen[c], true))
}
