//! Operations shared by every level of the rig tree.

use super::bone::Bone;

/// Something that owns a subtree of bones: a bone, a limb, or a document.
///
/// Implementors only provide the traversal; ordering and z-index helpers are
/// derived from it. Traversal order is the tie-breaker when sorting by
/// z-index: a bone first, then its children, then its child limbs.
pub trait BoneTree {
    /// Appends every bone of the subtree to `out`, in traversal order.
    fn collect_bones<'a>(&'a self, out: &mut Vec<&'a Bone>);

    /// Calls `f` on every bone of the subtree, in traversal order.
    fn visit_bones_mut(&mut self, f: &mut dyn FnMut(&mut Bone));

    /// All bones, stable-sorted by z-index (lowest first).
    fn bones(&self) -> Vec<&Bone> {
        let mut bones = Vec::new();
        self.collect_bones(&mut bones);
        bones.sort_by_key(|b| b.z_index);
        bones
    }

    /// Smallest and largest z-index in the subtree, or `None` without bones.
    fn z_bounds(&self) -> Option<(i64, i64)> {
        let mut bones = Vec::new();
        self.collect_bones(&mut bones);
        let min = bones.iter().map(|b| b.z_index).min()?;
        let max = bones.iter().map(|b| b.z_index).max()?;
        Some((min, max))
    }

    /// Renumbers z-indices to `offset, offset + 1, ...` following [`BoneTree::bones`] order.
    ///
    /// Returns the highest index assigned, or `None` without bones.
    fn normalize_z_indices(&mut self, offset: i64) -> Option<i64> {
        let current: Vec<i64> = {
            let mut bones = Vec::new();
            self.collect_bones(&mut bones);
            bones.iter().map(|b| b.z_index).collect()
        };
        let ranks = stable_ranks(&current);
        let mut position = 0;
        self.visit_bones_mut(&mut |bone| {
            bone.z_index = offset + ranks[position] as i64;
            position += 1;
        });
        (!ranks.is_empty()).then(|| offset + ranks.len() as i64 - 1)
    }
}

/// Rank of each entry under a stable ascending sort.
fn stable_ranks(values: &[i64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&i| values[i]);
    let mut ranks = vec![0; values.len()];
    for (rank, index) in order.into_iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_ranks_keep_ties_in_order() {
        assert_eq!(stable_ranks(&[5, -1, 5, 0]), vec![2, 0, 3, 1]);
        assert!(stable_ranks(&[]).is_empty());
    }
}
