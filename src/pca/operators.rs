//! Perturbation operators over allocations.
//!
//! Both operators exchange two existing assignments rather than overwrite,
//! so the permutation invariant is preserved by construction:
//!
//! - [`random_swap`]: undirected mutation — two random tasks trade resources.
//! - [`swap_first_difference`]: directed attraction — one step toward a
//!   target allocation, fixing the first disagreeing position.

use rand::Rng;

use crate::models::Allocation;

/// Swaps the resources of two distinct, uniformly chosen tasks.
///
/// Returns the input unchanged for fewer than two tasks. Otherwise the
/// result differs from the input in exactly two positions (all resource
/// values are distinct under the permutation invariant).
pub fn random_swap<R: Rng>(allocation: &Allocation, rng: &mut R) -> Allocation {
    let len = allocation.len();
    let mut out = allocation.clone();
    if len < 2 {
        return out;
    }
    // Sample two indices without replacement.
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    out.swap(i, j);
    out
}

/// Moves `source` one step toward `target`.
///
/// Scans tasks in index order for the first position where the two
/// allocations disagree, then swaps that task's resource with the task
/// currently holding `target`'s resource for it. After the swap the scanned
/// position agrees with `target`; when the two positions form a 2-cycle the
/// counterpart position ends up agreeing as well. Repeated application
/// reaches `target` in at most `len - 1` steps. Equal inputs come back
/// unchanged.
pub fn swap_first_difference(source: &Allocation, target: &Allocation) -> Allocation {
    let mut out = source.clone();
    for i in 0..source.len() {
        if source.resource_for(i) != target.resource_for(i) {
            // The wanted resource is held by some other task; invariant
            // guarantees it exists.
            if let Some(j) = out.position_of(target.resource_for(i)) {
                out.swap(i, j);
            }
            break;
        }
    }
    out
}
