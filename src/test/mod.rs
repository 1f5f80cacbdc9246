mod test_invariants;
pub mod test_util;
